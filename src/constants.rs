// Display constants
pub const MAX_AREA_WIDTH: u32 = 480;
pub const MAX_AREA_HEIGHT: u32 = 800;
pub const WINDOW_TITLE: &str = "Flappy Bird Mobile + PC";

// Frame timing constants
pub const TARGET_FPS: u32 = 60;

// Bird physics constants (world pixels per tick)
pub const GRAVITY: f64 = 0.45;
pub const FLAP_IMPULSE: f64 = -9.0;
pub const BIRD_X_FRACTION: f64 = 0.18;

// Pipe constants (world pixels)
pub const PIPE_GAP: i32 = 160;
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_MIN_SEGMENT: i32 = 40;
pub const PIPE_SPAWN_OFFSET: f64 = 10.0;
pub const PIPE_REMOVE_MARGIN: f64 = 100.0;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;

// Ground band height at the bottom of the play area
pub const GROUND_HEIGHT: i32 = 80;

// Asset locations, relative to the working directory
pub const ASSET_DIR: &str = "assets";
pub const BACKGROUND_FILE: &str = "background.png";
pub const BIRD_FILE: &str = "bird.png";
pub const PIPE_FILE: &str = "pipe.png";
