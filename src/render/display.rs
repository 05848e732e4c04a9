//! Display list: render-ready representation of a dialogue box

use crate::layout::Paginator;
use crate::TileRect;
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

/// Glyphs used to draw a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub corner: char,
    pub horizontal: char,
    pub vertical: char,
    pub fill: char,
    /// Shown on the bottom border while more pages remain
    pub more: char,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            corner: '+',
            horizontal: '-',
            vertical: '|',
            fill: ' ',
            more: 'v',
        }
    }
}

/// A display item to render
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// Border and cleared interior
    Frame { rect: TileRect },
    /// Title drawn over the top border
    Title { x: u16, y: u16, text: String },
    /// One line of the current page
    TextRun {
        line_index: usize,
        x: u16,
        y: u16,
        text: String,
    },
    /// More-text marker
    MoreIndicator { x: u16, y: u16 },
}

/// Display list for one frame of a dialogue box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    /// Build the display list for a box showing the paginator's current page
    pub fn build<T: AsRef<str>>(
        frame: TileRect,
        title: Option<&str>,
        paginator: &Paginator<T>,
    ) -> Self {
        let mut items = Vec::new();
        let Some((right, bottom)) = frame.extent() else {
            return Self { items };
        };
        if frame.width < 2 || frame.height < 2 {
            return Self { items };
        }

        items.push(DisplayItem::Frame { rect: frame });

        if let Some(item) = title.and_then(|t| place_title(frame, t)) {
            items.push(item);
        }

        // Lines past the interior would land on the bottom border
        let interior_rows = (frame.height - 2) as usize;
        for (line_index, text) in paginator.current_lines().take(interior_rows).enumerate() {
            items.push(DisplayItem::TextRun {
                line_index,
                x: frame.x + 1,
                y: frame.y + 1 + line_index as u16,
                text: text.to_string(),
            });
        }

        if paginator.needs_more_indicator() {
            items.push(DisplayItem::MoreIndicator {
                x: right - 2,
                y: bottom - 1,
            });
        }

        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text runs in line order
    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DisplayItem::TextRun { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Centre a title on the top border.
///
/// Titles wider than the interior are clipped to it, ending in `...` when the
/// interior has room for at least one character before the dots.
fn place_title(frame: TileRect, title: &str) -> Option<DisplayItem> {
    let interior = frame.width.saturating_sub(2) as usize;
    let len = title.graphemes(true).count();
    if len == 0 || interior == 0 {
        return None;
    }

    if len <= interior {
        let x = (frame.x + (frame.width - len as u16) / 2).max(frame.x + 1);
        return Some(DisplayItem::Title {
            x,
            y: frame.y,
            text: title.to_string(),
        });
    }

    let text = if interior >= 4 {
        let kept: String = title.graphemes(true).take(interior - 3).collect();
        format!("{kept}...")
    } else {
        title.graphemes(true).take(interior).collect()
    };
    Some(DisplayItem::Title {
        x: frame.x + 1,
        y: frame.y,
        text,
    })
}
