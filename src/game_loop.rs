//! The frame loop: pace, poll input, update, render, present.

use crate::assets::Assets;
use crate::constants::TARGET_FPS;
use crate::error::Result;
use crate::frame_clock::FrameClock;
use crate::game::{process_tick, GameState, PlayArea};
use crate::input::{handle_event, InputResult};
use crate::ui::flappy_scene::FlappyRenderer;
use crossterm::event::{self, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Owns all game state for the lifetime of the process.
pub struct GameLoop<R: Rng> {
    game: GameState,
    renderer: FlappyRenderer,
    rng: R,
}

impl<R: Rng> GameLoop<R> {
    /// Fresh game in the Idle phase. The bird's size comes from its sprite.
    /// The spawn timer starts at clock reading 0.
    pub fn new(area: PlayArea, assets: Assets, rng: R) -> Self {
        let (bird_width, bird_height) = assets.bird_size();
        Self {
            game: GameState::new(area, bird_width, bird_height, 0),
            renderer: FlappyRenderer::new(assets),
            rng,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run until a quit event. Each iteration waits for the frame clock,
    /// then does one `step` with whatever input arrived meanwhile.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut clock = FrameClock::new(TARGET_FPS);
        let mut frames: u64 = 0;
        loop {
            let dt = clock.tick();
            if is_slow_frame(dt, clock.frame_duration()) {
                tracing::debug!(?dt, frames, "slow frame");
            }
            let events = drain_events()?;
            if self.step(terminal, &events, clock.now_ms())? == InputResult::Quit {
                tracing::info!(frames, score = self.game.score, "quit");
                return Ok(());
            }
            frames += 1;
        }
    }

    /// One loop iteration after pacing: dispatch input, update if running,
    /// draw. Returns `Quit` without drawing when a quit event was seen.
    pub fn step<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &[Event],
        now_ms: u64,
    ) -> Result<InputResult> {
        for event in events {
            if handle_event(&mut self.game, event, now_ms) == InputResult::Quit {
                return Ok(InputResult::Quit);
            }
        }

        process_tick(&mut self.game, now_ms, &mut self.rng);

        let game = &self.game;
        let renderer = &mut self.renderer;
        terminal.draw(|frame| renderer.render(frame, game))?;
        Ok(InputResult::Continue)
    }
}

/// A frame that took more than twice its budget.
fn is_slow_frame(dt: Duration, budget: Duration) -> bool {
    dt > budget * 2
}

/// Everything queued since the last frame, without blocking.
fn drain_events() -> Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}
