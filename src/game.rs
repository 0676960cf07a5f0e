use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::audio::SoundEffect;
use crate::clock::Ticker;
use crate::config::GRID_SIZE;
use crate::error::GameError;
use crate::food::Food;
use crate::grid::GridSize;
use crate::input::GameInput;
use crate::snake::Snake;

/// Whether the simulation advances on ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Stopped,
}

/// What happened during one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing noteworthy, or the game is stopped.
    None,
    FoodEaten,
    WallHit,
    SelfHit,
}

impl TickOutcome {
    /// Sound cue the caller should play for this outcome.
    #[must_use]
    pub fn sound(self) -> Option<SoundEffect> {
        match self {
            Self::None => None,
            Self::FoodEaten => Some(SoundEffect::Eat),
            Self::WallHit | Self::SelfHit => Some(SoundEffect::Wall),
        }
    }

    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, Self::WallHit | Self::SelfHit)
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    grid: GridSize,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game on the standard board seeded from OS entropy.
    pub fn new() -> Result<Self, GameError> {
        Self::with_rng(GRID_SIZE, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a running game with the canonical snake and food placed off it.
    pub fn with_rng(grid: GridSize, mut rng: R) -> Result<Self, GameError> {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, grid, snake.body())?;

        Ok(Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            grid,
            rng,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// The snake moves first; then food, wall, and self collisions are checked
    /// in that order. Both collisions end in [`Game::game_over`].
    pub fn update(&mut self) -> Result<TickOutcome, GameError> {
        if self.status == GameStatus::Stopped {
            return Ok(TickOutcome::None);
        }

        self.snake.update();
        let mut outcome = TickOutcome::None;

        if self.snake.head() == self.food.position {
            self.food
                .regenerate(&mut self.rng, self.grid, self.snake.body())?;
            self.snake.request_growth();
            self.score += 1;
            outcome = TickOutcome::FoodEaten;
        }

        if self.snake.head().is_on_wall(self.grid) {
            self.game_over()?;
            return Ok(TickOutcome::WallHit);
        }

        if self.snake.head_overlaps_body() {
            self.game_over()?;
            return Ok(TickOutcome::SelfHit);
        }

        Ok(outcome)
    }

    /// Runs [`Game::update`] only when `ticker` says a tick is due at `now`.
    pub fn tick_if_due(
        &mut self,
        ticker: &mut Ticker,
        now: Instant,
    ) -> Result<Option<TickOutcome>, GameError> {
        if !ticker.is_due(now) {
            return Ok(None);
        }
        self.update().map(Some)
    }

    /// Single reset path: respawns snake and food, stops play, clears score.
    pub fn game_over(&mut self) -> Result<(), GameError> {
        self.snake.reset();
        self.food
            .regenerate(&mut self.rng, self.grid, self.snake.body())?;
        self.status = GameStatus::Stopped;
        self.score = 0;
        Ok(())
    }

    /// Applies one external input event.
    ///
    /// Any direction press (re)starts play, even when the turn itself is
    /// rejected as a reversal. `Quit` is left to the frame loop.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.snake.set_direction(direction);
                self.status = GameStatus::Running;
            }
            GameInput::Quit => {}
        }
    }
}

impl<R> Game<R> {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}
