//! Game logic: input processing, physics, spawning, scoring and collisions.

use super::types::{GameState, Phase};
use crate::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Mouse click, Space or Up.
    Flap,
    /// Window close equivalent (Esc, q, Ctrl+C). Handled by the game loop.
    Quit,
    /// Anything else. Ignored.
    Other,
}

/// Process a single player input.
///
/// A flap after a crash restarts the game; otherwise it overrides the
/// bird's velocity with the flap impulse and starts the run if idle.
pub fn process_input(game: &mut GameState, input: FlappyInput, now_ms: u64) {
    if input != FlappyInput::Flap {
        return;
    }

    if game.phase == Phase::GameOver {
        game.reset(now_ms);
        return;
    }

    game.bird.velocity = FLAP_IMPULSE;
    if game.phase == Phase::Idle {
        game.transition(Phase::Running);
    }
}

/// Advance the game by one frame. No-op unless the game is running.
///
/// `now_ms` is a monotonic clock reading used only for the spawn timer.
pub fn process_tick<R: Rng>(game: &mut GameState, now_ms: u64, rng: &mut R) {
    if game.phase != Phase::Running {
        return;
    }

    // Semi-implicit Euler: velocity first, then position
    game.bird.velocity += GRAVITY;
    game.bird.y += game.bird.velocity;

    if now_ms.saturating_sub(game.last_spawn_ms) > PIPE_SPAWN_INTERVAL_MS {
        game.spawn_pipe(rng);
        game.last_spawn_ms = now_ms;
    }

    // Scroll and score
    let bird_x = game.bird.x;
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
        if !pipe.passed && pipe.right() < bird_x {
            pipe.passed = true;
            game.score += 1;
        }
    }

    game.pipes.retain(|p| p.x > -PIPE_REMOVE_MARGIN);

    if check_collision(game) {
        game.transition(Phase::GameOver);
    }
}

/// True if the bird touches the ground band or any pipe segment.
pub fn check_collision(game: &GameState) -> bool {
    if game.bird.bottom() >= game.area.ground_top() {
        return true;
    }

    let bird = game.bird.rect();
    game.pipes
        .iter()
        .any(|p| bird.overlaps(&p.top_rect()) || bird.overlaps(&p.bottom_rect(game.area)))
}
