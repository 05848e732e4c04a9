//! Viewport bounds and page buffer capacity

use crate::error::{DialogueError, Result};
use crate::TileRect;
use tracing::warn;

/// Maximum columns per line.
///
/// Lines are ranges into the message, so this bounds layout width rather
/// than a terminated char buffer; no slot is reserved for a terminator.
pub const MAX_LINE_WIDTH: usize = 40;

/// Maximum lines a page can hold
pub const MAX_PAGE_LINES: usize = 4;

/// Character grid available for one page (columns x lines).
///
/// Always within `1..=MAX_LINE_WIDTH` by `1..=MAX_PAGE_LINES`; the constructors
/// are the only place bounds are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: usize,
    height: usize,
}

impl Viewport {
    /// Create a viewport, rejecting bounds the page buffer cannot hold
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_nonzero(width, height)?;
        if width > MAX_LINE_WIDTH {
            return Err(DialogueError::WidthExceedsCapacity {
                width,
                capacity: MAX_LINE_WIDTH,
            });
        }
        if height > MAX_PAGE_LINES {
            return Err(DialogueError::HeightExceedsCapacity {
                height,
                capacity: MAX_PAGE_LINES,
            });
        }
        Ok(Self { width, height })
    }

    /// Create a viewport, clamping over-capacity bounds.
    ///
    /// Zero bounds are still an error. Clamping is logged on the
    /// `dialogue.viewport` target so a truncated layout is never silent.
    pub fn clamped(width: usize, height: usize) -> Result<Self> {
        check_nonzero(width, height)?;
        let clamped_width = width.min(MAX_LINE_WIDTH);
        let clamped_height = height.min(MAX_PAGE_LINES);
        if clamped_width != width || clamped_height != height {
            warn!(
                target: "dialogue.viewport",
                width,
                height,
                clamped_width,
                clamped_height,
                "viewport_clamped_to_capacity"
            );
        }
        Ok(Self {
            width: clamped_width,
            height: clamped_height,
        })
    }

    /// Interior of a bordered box: one tile of border on every side
    pub fn for_frame(frame: TileRect) -> Result<Self> {
        if frame.width < 3 || frame.height < 3 {
            return Err(DialogueError::FrameTooSmall {
                width: frame.width,
                height: frame.height,
            });
        }
        if frame.extent().is_none() {
            return Err(DialogueError::FrameOutOfRange {
                x: frame.x,
                y: frame.y,
                width: frame.width,
                height: frame.height,
            });
        }
        Self::clamped(frame.width as usize - 2, frame.height as usize - 2)
    }

    /// Max characters per line
    pub fn width(&self) -> usize {
        self.width
    }

    /// Max lines per page
    pub fn height(&self) -> usize {
        self.height
    }
}

fn check_nonzero(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(DialogueError::ZeroWidth);
    }
    if height == 0 {
        return Err(DialogueError::ZeroHeight);
    }
    Ok(())
}
