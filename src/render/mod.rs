//! Render output: display list and tile plane

mod display;
mod grid;

pub use display::{BoxStyle, DisplayItem, DisplayList};
pub use grid::TileGrid;
