//! Flappy - terminal Flappy Bird.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod assets;
pub mod build_info;
pub mod constants;
pub mod display;
pub mod error;
pub mod frame_clock;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod ui;

pub use error::{FlappyError, Result};
pub use game::{GameState, Phase, PlayArea};
pub use game_loop::GameLoop;
