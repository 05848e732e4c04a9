//! Pagination of dialogue messages into fixed-size pages

use crate::layout::line_break::{skip_spaces, LineBreaker};
use crate::layout::viewport::{Viewport, MAX_PAGE_LINES};
use serde::Serialize;
use smallvec::SmallVec;
use std::ops::Range;
use tracing::{debug, trace};

/// Line ranges for one page, stored inline up to the page buffer capacity
pub type PageLines = SmallVec<[Range<usize>; MAX_PAGE_LINES]>;

/// One computed page of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Byte ranges of each line within the message
    pub lines: PageLines,
    /// Cursor after this page
    pub end: usize,
}

impl PageLayout {
    /// Compute the page starting at `start`.
    ///
    /// The first line of a page keeps its leading spaces; every later line
    /// drops them, collapsing any separator run left over from the previous
    /// wrap.
    pub fn compute(text: &str, start: usize, viewport: Viewport) -> Self {
        let breaker = LineBreaker::new(viewport.width());
        let mut lines = PageLines::new();
        let mut cursor = start;

        for line_index in 0..viewport.height() {
            if line_index > 0 {
                cursor = skip_spaces(text, cursor);
            }
            if cursor >= text.len() {
                break;
            }

            let span = breaker.break_line(text, cursor);
            lines.push(span.range);
            cursor = span.resume;

            if cursor >= text.len() {
                break;
            }
        }

        trace!(
            target: "dialogue.paginate",
            start,
            end = cursor,
            lines = lines.len(),
            "page_computed"
        );

        Self { lines, end: cursor }
    }

    /// True when text remains after this page
    pub fn has_more(&self, text: &str) -> bool {
        self.end < text.len()
    }
}

/// Pagination state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PageState {
    /// No message loaded
    #[default]
    Idle,
    /// Showing a page with more text after it
    ActiveMidPage,
    /// Showing the final page
    ActiveLastPage,
    /// Final page acknowledged
    Finished,
}

/// Serializable view of the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub index: usize,
    pub state: PageState,
    pub lines: Vec<String>,
    pub more: bool,
}

/// Forward-only paginator over one message at a time.
///
/// `T` is the message storage: `&str` to borrow the caller's text for the
/// duration of the message, `String` to own it.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    message: Option<T>,
    viewport: Option<Viewport>,
    cursor: usize,
    page_index: usize,
    lines: PageLines,
    state: PageState,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self {
            message: None,
            viewport: None,
            cursor: 0,
            page_index: 0,
            lines: PageLines::new(),
            state: PageState::Idle,
        }
    }
}

impl<T: AsRef<str>> Paginator<T> {
    /// Create an idle paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new message, discarding any in-progress one
    pub fn start(&mut self, message: T, viewport: Viewport) {
        *self = Self {
            message: Some(message),
            viewport: Some(viewport),
            ..Self::default()
        };
        self.load_page();
        debug!(
            target: "dialogue.state",
            state = ?self.state,
            lines = self.lines.len(),
            "dialogue_started"
        );
    }

    /// Turn the page, or finish after the last one.
    ///
    /// Returns `true` when the state changed.
    pub fn advance(&mut self) -> bool {
        let before = self.state;
        match self.state {
            PageState::ActiveMidPage => {
                self.page_index += 1;
                self.load_page();
            }
            PageState::ActiveLastPage => {
                self.state = PageState::Finished;
                self.lines.clear();
            }
            PageState::Idle | PageState::Finished => return false,
        }
        debug!(
            target: "dialogue.state",
            from = ?before,
            to = ?self.state,
            page = self.page_index,
            "dialogue_advanced"
        );
        true
    }

    fn load_page(&mut self) {
        let (Some(message), Some(viewport)) = (self.message.as_ref(), self.viewport) else {
            return;
        };
        let text = message.as_ref();
        let page = PageLayout::compute(text, self.cursor, viewport);
        let has_more = page.has_more(text);

        self.cursor = page.end;
        self.lines = page.lines;
        self.state = match (self.lines.is_empty(), has_more) {
            (true, _) => PageState::Finished,
            (false, true) => PageState::ActiveMidPage,
            (false, false) => PageState::ActiveLastPage,
        };
        // An empty message never showed anything to acknowledge
        if self.state == PageState::Finished && self.page_index == 0 {
            self.state = PageState::Idle;
        }
    }

    /// True unless idle or finished
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            PageState::ActiveMidPage | PageState::ActiveLastPage
        )
    }

    /// True while further pages remain after the current one
    pub fn needs_more_indicator(&self) -> bool {
        self.state == PageState::ActiveMidPage
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Byte offset of the end of the current page
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of line `index` on the current page
    pub fn line(&self, index: usize) -> Option<&str> {
        let range = self.lines.get(index)?.clone();
        self.message.as_ref().map(|m| &m.as_ref()[range])
    }

    /// Lines of the current page, in display order
    pub fn current_lines(&self) -> impl Iterator<Item = &str> + '_ {
        let text = self.message.as_ref().map_or("", |m| m.as_ref());
        self.lines.iter().map(move |range| &text[range.clone()])
    }

    /// Owned copy of the current page
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            index: self.page_index,
            state: self.state,
            lines: self.current_lines().map(str::to_owned).collect(),
            more: self.needs_more_indicator(),
        }
    }
}

/// Page through `text` from start to finish
pub fn paginate(text: &str, viewport: Viewport) -> Vec<PageSnapshot> {
    let mut paginator = Paginator::new();
    paginator.start(text, viewport);

    let mut pages = Vec::new();
    while paginator.is_active() {
        if paginator.page_index() == pages.len() {
            pages.push(paginator.snapshot());
        }
        paginator.advance();
    }
    pages
}
