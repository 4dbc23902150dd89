pub mod big_text;
pub mod flappy_scene;
pub mod pixel_canvas;

pub use flappy_scene::FlappyRenderer;
