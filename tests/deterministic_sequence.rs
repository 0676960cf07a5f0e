use retro_snake::config::INITIAL_BODY;
use retro_snake::food::Food;
use retro_snake::game::{Game, GameStatus, TickOutcome};
use retro_snake::grid::{GridSize, Position};
use retro_snake::input::{Direction, GameInput};
use retro_snake::snake::Snake;

fn body_of(game: &Game) -> Vec<Position> {
    game.snake.segments().copied().collect()
}

#[test]
fn eat_then_grow_on_the_standard_board() {
    let mut game = Game::new_with_seed(GridSize::square(25), 42).expect("board has room");
    game.food = Food::at(Position::new(7, 9));

    assert_eq!(game.update(), Ok(TickOutcome::FoodEaten));
    assert_eq!(
        body_of(&game),
        vec![
            Position::new(7, 9),
            Position::new(6, 9),
            Position::new(5, 9)
        ]
    );
    assert_eq!(game.score, 1);

    game.food = Food::at(Position::new(20, 20));
    assert_eq!(game.update(), Ok(TickOutcome::None));
    assert_eq!(game.snake.len(), 4);
    assert_eq!(game.snake.segments().last(), Some(&Position::new(5, 9)));
    assert_eq!(game.score, 1);
}

#[test]
fn wall_hit_resets_and_direction_key_restarts() {
    let mut game = Game::new_with_seed(GridSize::square(25), 7).expect("board has room");
    game.score = 4;
    game.food = Food::at(Position::new(0, 0));
    game.snake = Snake::from_segments(
        vec![
            Position::new(24, 9),
            Position::new(23, 9),
            Position::new(22, 9),
        ],
        Direction::Right,
    );

    assert_eq!(game.update(), Ok(TickOutcome::WallHit));
    assert_eq!(game.status, GameStatus::Stopped);
    assert_eq!(game.score, 0);
    assert_eq!(body_of(&game), INITIAL_BODY.to_vec());

    assert_eq!(game.update(), Ok(TickOutcome::None));
    assert_eq!(body_of(&game), INITIAL_BODY.to_vec());

    game.apply_input(GameInput::Direction(Direction::Down));
    assert_eq!(game.status, GameStatus::Running);

    game.food = Food::at(Position::new(0, 0));
    assert_eq!(game.update(), Ok(TickOutcome::None));
    assert_eq!(game.snake.head(), Position::new(6, 10));
}

#[test]
fn driving_into_the_left_wall_takes_a_fixed_number_of_ticks() {
    let mut game = Game::new_with_seed(GridSize::square(25), 3).expect("board has room");
    game.food = Food::at(Position::new(24, 24));

    game.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(game.update(), Ok(TickOutcome::None));
    game.apply_input(GameInput::Direction(Direction::Left));

    // Head is at (6, 8); six steps reach column 0 and the seventh leaves the board.
    for _ in 0..6 {
        assert_eq!(game.update(), Ok(TickOutcome::None));
    }
    assert_eq!(game.snake.head(), Position::new(0, 8));
    assert_eq!(game.update(), Ok(TickOutcome::WallHit));
}

#[test]
fn food_never_lands_on_the_snake_during_a_long_session() {
    let mut game = Game::new_with_seed(GridSize::square(25), 99).expect("board has room");
    let turns = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Right,
    ];

    for step in 0..400 {
        if step % 5 == 0 {
            game.apply_input(GameInput::Direction(turns[(step / 5) % turns.len()]));
        }
        let outcome = game.update().expect("board never fills");
        assert!(!game.snake.occupies(game.food.position));
        if outcome.is_game_over() {
            assert_eq!(game.score, 0);
            assert_eq!(body_of(&game), INITIAL_BODY.to_vec());
        }
    }
}
