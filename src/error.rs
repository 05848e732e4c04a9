//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a dialogue.
///
/// Pagination itself cannot fail: once a [`crate::Viewport`] exists, every
/// message maps to a finite page sequence.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("viewport width must be at least 1 column")]
    ZeroWidth,
    #[error("viewport height must be at least 1 line")]
    ZeroHeight,
    #[error("viewport width {width} exceeds line buffer capacity {capacity}")]
    WidthExceedsCapacity { width: usize, capacity: usize },
    #[error("viewport height {height} exceeds page buffer capacity {capacity}")]
    HeightExceedsCapacity { height: usize, capacity: usize },
    #[error("box frame {width}x{height} has no interior")]
    FrameTooSmall { width: u16, height: u16 },
    #[error("box frame at ({x}, {y}) size {width}x{height} runs past the tile plane")]
    FrameOutOfRange {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    #[error("failed to read config {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DialogueError>;
