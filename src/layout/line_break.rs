//! Line breaking algorithm

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// One broken line: the text it shows and where the next line resumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte range of the line's text within the message
    pub range: Range<usize>,
    /// Byte offset the next line starts scanning from (past any consumed
    /// break character)
    pub resume: usize,
}

/// Greedy fixed-width line breaker.
///
/// Columns are grapheme clusters. A line ends at a newline, at the end of the
/// text, or after `width` columns. When the window is full and the next cluster
/// would continue a word, the line is wrapped back to the last space in the
/// window; with no usable space the word is hard-broken at `width`.
#[derive(Debug, Clone, Copy)]
pub struct LineBreaker {
    width: usize,
}

impl LineBreaker {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Break one line starting at byte offset `start`
    pub fn break_line(&self, text: &str, start: usize) -> LineSpan {
        let mut end = start;
        let mut columns = 0;
        let mut last_space: Option<usize> = None;

        for (offset, grapheme) in text[start..].grapheme_indices(true) {
            if columns == self.width || is_newline(grapheme) {
                break;
            }
            // A space in column 0 would wrap to an empty line; not a candidate
            if grapheme == " " && offset > 0 {
                last_space = Some(start + offset);
            }
            end = start + offset + grapheme.len();
            columns += 1;
        }

        if columns == self.width && continues_word(&text[end..]) {
            if let Some(space) = last_space {
                end = space;
            }
        }

        let resume = match text[end..].graphemes(true).next() {
            Some(g) if g == " " || is_newline(g) => end + g.len(),
            _ => end,
        };

        LineSpan {
            range: start..end,
            resume,
        }
    }
}

/// Advance past a run of spaces
pub fn skip_spaces(text: &str, mut cursor: usize) -> usize {
    while text.as_bytes().get(cursor) == Some(&b' ') {
        cursor += 1;
    }
    cursor
}

fn is_newline(grapheme: &str) -> bool {
    grapheme == "\n" || grapheme == "\r\n"
}

/// True when `rest` starts mid-word, i.e. not at a space, newline or the end
fn continues_word(rest: &str) -> bool {
    match rest.graphemes(true).next() {
        None => false,
        Some(g) => g != " " && !is_newline(g),
    }
}
