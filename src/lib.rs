//! Retro grid Snake: a deterministic tick-based simulation core with a thin
//! ratatui/crossterm presentation layer around it.

pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
