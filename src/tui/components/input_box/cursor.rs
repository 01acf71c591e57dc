//! Cursor position tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset.
//! All methods accept `buffer: &str` explicitly; the text data is owned by
//! `InputBox`, keeping the dependency visible.

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, display_width, inner_width,
    wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Put the cursor at the end of `buffer` (used after the buffer is replaced).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// Calculate which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        let lines = textwrap::wrap(&buffer[..self.pos], wrap_options(width));
        lines.len().saturating_sub(1) as u16
    }

    /// Update scroll offset to keep cursor visible within the viewport.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Calculate screen position for cursor based on wrapped text layout.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y);
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let cursor_line = lines.len().saturating_sub(1) as u16;

        // textwrap trims trailing spaces, so count them back in.
        let trailing_spaces = text_before_cursor.len() - text_before_cursor.trim_end_matches(' ').len();
        let last_line_width = lines.last().map(|line| display_width(line)).unwrap_or(0);
        let cursor_col = ((last_line_width + trailing_spaces) as u16).min(width);

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        (
            area.x + CONTENT_OFFSET_X + cursor_col,
            area.y + CONTENT_OFFSET_Y + visible_line,
        )
    }
}
