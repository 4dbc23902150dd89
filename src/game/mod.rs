//! Flappy Bird game model.
//!
//! A real-time action game where the player navigates a bird through
//! scrolling pipe obstacles by flapping. Gravity pulls the bird down each
//! frame, and hitting a pipe or the ground ends the run.

pub mod geometry;
pub mod logic;
pub mod types;

pub use geometry::Rect;
pub use logic::*;
pub use types::*;
