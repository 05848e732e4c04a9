//! Text layout: viewport bounds, line breaking and pagination

mod line_break;
mod pagination;
mod viewport;

pub use line_break::{LineBreaker, LineSpan};
pub use pagination::{paginate, PageLayout, PageSnapshot, PageState, Paginator};
pub use viewport::{Viewport, MAX_LINE_WIDTH, MAX_PAGE_LINES};
