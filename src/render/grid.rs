//! Character tile plane

use crate::render::display::{BoxStyle, DisplayItem, DisplayList};
use crate::TileRect;
use unicode_segmentation::UnicodeSegmentation;

/// A plane of character tiles.
///
/// Each tile holds one grapheme cluster, matching how lines are measured.
/// Writes outside the plane are dropped, like tilemap writes past the edge of
/// a background layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    columns: u16,
    rows: u16,
    cells: Vec<String>,
}

impl TileGrid {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![" ".to_string(); columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
            cell.push(' ');
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        TileRect::new(0, 0, self.columns, self.rows)
            .contains(x, y)
            .then(|| y as usize * self.columns as usize + x as usize)
    }

    pub fn put(&mut self, x: u16, y: u16, glyph: char) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.clear();
            cell.push(glyph);
        }
    }

    /// Store a whole grapheme cluster in one tile
    pub fn put_cluster(&mut self, x: u16, y: u16, cluster: &str) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.clear();
            cell.push_str(cluster);
        }
    }

    /// Base char of the tile's cluster
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.cell(x, y).and_then(|cell| cell.chars().next())
    }

    /// Full cluster stored in the tile
    pub fn cell(&self, x: u16, y: u16) -> Option<&str> {
        self.index(x, y).map(|i| self.cells[i].as_str())
    }

    /// Draw text left to right, one grapheme cluster per tile
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        for (i, cluster) in text.graphemes(true).enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            match x.checked_add(offset) {
                Some(col) => self.put_cluster(col, y, cluster),
                None => break,
            }
        }
    }

    /// Row `y` as a string
    pub fn row(&self, y: u16) -> Option<String> {
        if y >= self.rows {
            return None;
        }
        let start = y as usize * self.columns as usize;
        Some(self.cells[start..start + self.columns as usize].concat())
    }

    /// Draw a bordered box with a cleared interior
    pub fn draw_frame(&mut self, rect: TileRect, style: &BoxStyle) {
        let Some((end_x, end_y)) = rect.extent() else {
            return;
        };
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = end_x - 1;
        let bottom = end_y - 1;

        for y in rect.y..=bottom {
            for x in rect.x..=right {
                let on_x_edge = x == rect.x || x == right;
                let on_y_edge = y == rect.y || y == bottom;
                let glyph = match (on_x_edge, on_y_edge) {
                    (true, true) => style.corner,
                    (false, true) => style.horizontal,
                    (true, false) => style.vertical,
                    (false, false) => style.fill,
                };
                self.put(x, y, glyph);
            }
        }
    }

    /// Rasterize a display list in order
    pub fn apply(&mut self, list: &DisplayList, style: &BoxStyle) {
        for item in &list.items {
            match item {
                DisplayItem::Frame { rect } => self.draw_frame(*rect, style),
                DisplayItem::Title { x, y, text } | DisplayItem::TextRun { x, y, text, .. } => {
                    self.draw_text(*x, *y, text)
                }
                DisplayItem::MoreIndicator { x, y } => self.put(*x, *y, style.more),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_frame() {
        let mut grid = TileGrid::new(6, 4);
        grid.draw_frame(TileRect::new(1, 0, 4, 3), &BoxStyle::default());

        assert_eq!(grid.row(0).unwrap(), " +--+ ");
        assert_eq!(grid.row(1).unwrap(), " |  | ");
        assert_eq!(grid.row(2).unwrap(), " +--+ ");
        assert_eq!(grid.row(3).unwrap(), "      ");
    }

    #[test]
    fn test_writes_outside_are_dropped() {
        let mut grid = TileGrid::new(3, 1);
        grid.draw_text(1, 0, "abcdef");
        grid.put(0, 5, 'x');
        assert_eq!(grid.row(0).unwrap(), " ab");
        assert_eq!(grid.get(0, 5), None);
        assert_eq!(grid.row(1), None);
    }

    #[test]
    fn test_apply_display_list() {
        let mut grid = TileGrid::new(8, 3);
        let list = DisplayList {
            items: vec![
                DisplayItem::Frame {
                    rect: TileRect::new(0, 0, 8, 3),
                },
                DisplayItem::Title {
                    x: 2,
                    y: 0,
                    text: "Hi".to_string(),
                },
                DisplayItem::TextRun {
                    line_index: 0,
                    x: 1,
                    y: 1,
                    text: "text".to_string(),
                },
                DisplayItem::MoreIndicator { x: 6, y: 2 },
            ],
        };
        grid.apply(&list, &BoxStyle::default());

        assert_eq!(grid.row(0).unwrap(), "+-Hi---+");
        assert_eq!(grid.row(1).unwrap(), "|text  |");
        assert_eq!(grid.row(2).unwrap(), "+-----v+");

        grid.clear();
        assert_eq!(grid.row(1).unwrap(), "        ");
    }

    #[test]
    fn test_combining_marks_share_a_tile() {
        let mut grid = TileGrid::new(6, 3);
        grid.draw_frame(TileRect::new(0, 0, 6, 3), &BoxStyle::default());
        grid.draw_text(1, 1, "ca\u{301}fe\u{301}");

        assert_eq!(grid.row(1).unwrap(), "|ca\u{301}fe\u{301}|");
        assert_eq!(grid.cell(2, 1), Some("a\u{301}"));
        assert_eq!(grid.get(4, 1), Some('e'));
        assert_eq!(grid.get(5, 1), Some('|'));
    }

    #[test]
    fn test_frame_past_plane_edge_is_skipped() {
        let mut grid = TileGrid::new(4, 4);
        grid.draw_frame(TileRect::new(u16::MAX - 1, 0, 4, 3), &BoxStyle::default());
        assert_eq!(grid, TileGrid::new(4, 4));
    }
}
