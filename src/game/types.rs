//! Flappy Bird data structures.
//!
//! Everything is measured in world pixels: the play area is at most
//! 480×800, y grows downward, and the ground band sits at the bottom.

use super::geometry::Rect;
use crate::constants::*;
use rand::Rng;
use std::ops::RangeInclusive;

/// Size of the visible play area in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayArea {
    pub width: u32,
    pub height: u32,
}

impl PlayArea {
    pub const MAX: PlayArea = PlayArea {
        width: MAX_AREA_WIDTH,
        height: MAX_AREA_HEIGHT,
    };

    /// Area bounded by the fixed maximums, clamped to the detected screen.
    pub fn fit_to_screen(screen_width: u32, screen_height: u32) -> Self {
        Self {
            width: screen_width.min(MAX_AREA_WIDTH),
            height: screen_height.min(MAX_AREA_HEIGHT),
        }
    }

    /// Y coordinate of the top edge of the ground band.
    pub fn ground_top(&self) -> f64 {
        (self.height as i32 - GROUND_HEIGHT) as f64
    }

    /// Valid top-gap offsets for a freshly spawned pipe. Both segments keep
    /// at least `PIPE_MIN_SEGMENT` pixels; a play area too short for that
    /// collapses to the minimum offset.
    pub fn gap_top_range(&self) -> RangeInclusive<i32> {
        let top_max = self.height as i32 - GROUND_HEIGHT - PIPE_GAP - PIPE_MIN_SEGMENT;
        PIPE_MIN_SEGMENT..=top_max.max(PIPE_MIN_SEGMENT)
    }
}

/// The player's bird. Only `y` and `velocity` change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    /// Place a bird of the sprite's size at its starting position.
    pub fn new(area: PlayArea, width: u32, height: u32) -> Self {
        Self {
            x: area.width as f64 * BIRD_X_FRACTION,
            y: Self::start_y(area),
            velocity: 0.0,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Starting height: the vertical center of the play area.
    pub fn start_y(area: PlayArea) -> f64 {
        (area.height / 2) as f64
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A pipe obstacle: a top and a bottom segment around a fixed-height gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Y coordinate where the gap starts (bottom of the top segment).
    pub top: i32,
    /// Whether the bird has passed this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f64, top: i32) -> Self {
        Self {
            x,
            top,
            passed: false,
        }
    }

    /// X coordinate of the trailing (right) edge.
    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    /// Y coordinate where the bottom segment starts.
    pub fn gap_bottom(&self) -> i32 {
        self.top + PIPE_GAP
    }

    /// Upper obstacle, from the top of the area down to the gap.
    pub fn top_rect(&self) -> Rect {
        Rect::from_xywh(self.x, 0.0, PIPE_WIDTH, self.top as f64)
    }

    /// Lower obstacle, from the end of the gap down to the ground band.
    pub fn bottom_rect(&self, area: PlayArea) -> Rect {
        let y = self.gap_bottom() as f64;
        Rect::from_xywh(self.x, y, PIPE_WIDTH, area.ground_top() - y)
    }
}

/// Gameplay phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap. Physics paused.
    Idle,
    Running,
    /// Bird crashed. Physics frozen until reset.
    GameOver,
}

impl Phase {
    /// Whether `self -> next` is a legal move of the state machine.
    pub fn can_transition_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Running)
                | (Phase::Running, Phase::GameOver)
                | (Phase::GameOver, Phase::Idle)
        )
    }
}

/// Main game state, owned by the game loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub area: PlayArea,
    pub bird: Bird,
    /// Live pipes in spawn order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: Phase,
    /// Clock reading (ms) of the last spawn or reset.
    pub last_spawn_ms: u64,
}

impl GameState {
    /// Create a fresh game. `bird_width`/`bird_height` come from the sprite.
    pub fn new(area: PlayArea, bird_width: u32, bird_height: u32, now_ms: u64) -> Self {
        Self {
            area,
            bird: Bird::new(area, bird_width, bird_height),
            pipes: Vec::new(),
            score: 0,
            phase: Phase::Idle,
            last_spawn_ms: now_ms,
        }
    }

    /// Move to `next` if the state machine allows it. Returns whether the
    /// phase changed; illegal or no-op transitions are ignored.
    pub fn transition(&mut self, next: Phase) -> bool {
        if !self.phase.can_transition_to(next) {
            return false;
        }
        tracing::debug!(from = ?self.phase, to = ?next, score = self.score, "phase transition");
        self.phase = next;
        true
    }

    /// Clear pipes and score, put the bird back and restart the spawn timer.
    /// Only legal from GameOver.
    pub fn reset(&mut self, now_ms: u64) -> bool {
        if !self.transition(Phase::Idle) {
            return false;
        }
        self.pipes.clear();
        self.score = 0;
        self.bird.y = Bird::start_y(self.area);
        self.bird.velocity = 0.0;
        self.last_spawn_ms = now_ms;
        true
    }

    /// Push a pipe just past the right edge with a random gap offset.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let top = rng.gen_range(self.area.gap_top_range());
        let x = self.area.width as f64 + PIPE_SPAWN_OFFSET;
        tracing::trace!(x, top, "spawn pipe");
        self.pipes.push(Pipe::new(x, top));
    }
}
