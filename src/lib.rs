//! Dialogue Pager: paginated dialogue boxes for fixed-grid tile displays
//!
//! This crate provides:
//! - Greedy word-wrap of a message into a fixed columns x lines viewport
//! - A forward-only page state machine driven by confirm presses
//! - Display lists and a character tile plane for drawing the box
//! - TOML configuration for box geometry and glyphs

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmDialogue;

// Re-export primary types
pub use config::{DialogueConfig, FrameConfig};
pub use error::{DialogueError, Result};
pub use input::{Buttons, InputState};
pub use layout::{
    paginate, PageSnapshot, PageState, Paginator, Viewport, MAX_LINE_WIDTH, MAX_PAGE_LINES,
};
pub use render::{BoxStyle, DisplayItem, DisplayList, TileGrid};

/// Rectangle in tile units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TileRect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }

    /// One past the right and bottom edges, or `None` if either overflows
    /// the tile coordinate space
    pub fn extent(&self) -> Option<(u16, u16)> {
        Some((
            self.x.checked_add(self.width)?,
            self.y.checked_add(self.height)?,
        ))
    }
}

/// A bordered dialogue box combining placement, glyphs and pagination
pub struct DialogueBox<'a> {
    pub frame: TileRect,
    pub title: Option<String>,
    pub style: BoxStyle,
    paginator: Paginator<&'a str>,
}

impl<'a> DialogueBox<'a> {
    /// Create an idle box from configuration
    pub fn new(config: &DialogueConfig) -> Self {
        Self {
            frame: config.frame.rect(),
            title: config.frame.title.clone(),
            style: config.style,
            paginator: Paginator::new(),
        }
    }

    /// Show a new message, sized to the frame's interior
    pub fn start(&mut self, text: &'a str) -> Result<()> {
        let viewport = Viewport::for_frame(self.frame)?;
        self.paginator.start(text, viewport);
        Ok(())
    }

    /// Advance on a confirm press. Returns `true` when the state changed.
    pub fn update(&mut self, input: &InputState) -> bool {
        if !self.paginator.is_active() || !input.just_pressed(Buttons::CONFIRM) {
            return false;
        }
        self.paginator.advance()
    }

    pub fn advance(&mut self) -> bool {
        self.paginator.advance()
    }

    pub fn is_active(&self) -> bool {
        self.paginator.is_active()
    }

    pub fn needs_more_indicator(&self) -> bool {
        self.paginator.needs_more_indicator()
    }

    pub fn current_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.paginator.current_lines()
    }

    pub fn paginator(&self) -> &Paginator<&'a str> {
        &self.paginator
    }

    /// Build the display list for the current page
    pub fn build_display_list(&self) -> DisplayList {
        if !self.paginator.is_active() {
            return DisplayList::default();
        }
        DisplayList::build(self.frame, self.title.as_deref(), &self.paginator)
    }

    /// Draw the box into a tile plane; nothing is drawn while inactive
    pub fn render(&self, grid: &mut TileGrid) {
        grid.apply(&self.build_display_list(), &self.style);
    }
}
