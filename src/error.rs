//! Fatal error types. Nothing here is recoverable mid-session.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("failed to load asset {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlappyError>;
