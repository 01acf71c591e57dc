//! Pure text helpers and dimensional constants for the text fields.
//!
//! These are stateless helpers with no dependency on InputBox or CursorState.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 3;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Offset from area edge to content (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text (at least one).
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }
    (textwrap::wrap(text, wrap_options(width)).len() as u16).max(1)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(crate) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Todo text is a single line: pasted line breaks become spaces.
pub(crate) fn flatten_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Longest prefix of `text` that fits in `width` terminal columns.
pub(crate) fn fit_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..i];
        }
    }
    text
}

/// Display width of a string in terminal columns.
pub(crate) fn display_width(text: &str) -> usize {
    text.width()
}
