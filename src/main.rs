use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use retro_snake::audio::{Muted, SoundSink, TerminalBell};
use retro_snake::clock::Ticker;
use retro_snake::config::{FRAME_INTERVAL, GRID_SIZE, TICK_INTERVAL};
use retro_snake::game::{Game, TickOutcome};
use retro_snake::input::{GameInput, InputHandler};
use retro_snake::renderer;
use retro_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Silence the eat and wall cues.
    #[arg(long)]
    mute: bool,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file (the terminal is in raw mode).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    install_panic_hook();

    let result = run(&cli);
    if let Err(error) = &result {
        error!("session ended with error: {error}");
    }
    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn run(cli: &Cli) -> io::Result<()> {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::with_rng(GRID_SIZE, rng)?;
    let mut sound: Box<dyn SoundSink> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::stdout())
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());

    info!(
        "starting {}x{} board, tick every {:?}",
        GRID_SIZE.width,
        GRID_SIZE.height,
        ticker.interval()
    );

    loop {
        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            if !game.is_running() {
                debug!("restarting after {game_input:?}");
            }
            game.apply_input(game_input);
        }

        let score_before = game.score;
        if let Some(outcome) = game.tick_if_due(&mut ticker, Instant::now())? {
            dispatch(outcome, score_before, sound.as_mut());
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &game))?;

        thread::sleep(FRAME_INTERVAL);
    }

    info!("quit with score {}", game.score);
    Ok(())
}

fn dispatch(outcome: TickOutcome, score_before: u32, sound: &mut dyn SoundSink) {
    match outcome {
        TickOutcome::FoodEaten => debug!("food eaten, score {}", score_before + 1),
        TickOutcome::WallHit | TickOutcome::SelfHit => {
            info!("game over ({outcome:?}) with score {score_before}");
        }
        TickOutcome::None => {}
    }

    if let Some(effect) = outcome.sound() {
        if let Err(error) = sound.play(effect) {
            error!("failed to play {effect:?}: {error}");
        }
    }
}
