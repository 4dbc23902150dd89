//! Sprite loading.
//!
//! The three images are decoded once at startup. Any failure is fatal.

use crate::constants::{ASSET_DIR, BACKGROUND_FILE, BIRD_FILE, PIPE_FILE};
use crate::error::{FlappyError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Decoded sprites, straight from disk (unscaled).
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: RgbaImage,
    pub bird: RgbaImage,
    pub pipe: RgbaImage,
}

impl Assets {
    /// Load from the default `assets/` directory under the working directory.
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(ASSET_DIR))
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let assets = Self {
            background: load_image(&dir.join(BACKGROUND_FILE))?,
            bird: load_image(&dir.join(BIRD_FILE))?,
            pipe: load_image(&dir.join(PIPE_FILE))?,
        };
        tracing::info!(
            dir = %dir.display(),
            bird_width = assets.bird.width(),
            bird_height = assets.bird.height(),
            "assets loaded"
        );
        Ok(assets)
    }

    /// Bird collision size, taken from the sprite.
    pub fn bird_size(&self) -> (u32, u32) {
        self.bird.dimensions()
    }
}

fn load_image(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| FlappyError::Asset {
            path: PathBuf::from(path),
            source,
        })
}
