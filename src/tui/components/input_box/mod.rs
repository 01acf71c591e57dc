//! # InputBox Component
//!
//! The new-item field at the top of the screen, with its `[Add]` button.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter, or a click on `[Add]`)
//! - Show the placeholder while empty
//!
//! ## State Management
//!
//! The buffer is internal state, mirrored into the core draft via
//! `Action::SetDraftText` on every change. After a submit the parent calls
//! [`InputBox::sync`] with the core draft, which is how the field clears.
//! Cursor position and scroll state are encapsulated in `CursorState`.

mod cursor;
pub(crate) mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, flatten_newlines, inner_width, next_char_boundary,
    prev_char_boundary, wrap_line_count, wrap_options,
};

const ADD_BUTTON_LABEL: &str = "[Add]";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed). May be empty; the core decides.
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Text input for new todo items.
///
/// # Props
///
/// - `placeholder`: Shown dimmed while the buffer is empty
/// - `focused`: Whether keystrokes go here (draws the cursor)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Placeholder text (Prop)
    pub placeholder: String,
    /// Focus flag (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            placeholder: placeholder.into(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer with the core draft if they differ.
    pub fn sync(&mut self, draft: &str) {
        if self.buffer != draft {
            self.buffer = draft.to_string();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    /// Calculate required height for current buffer content, clamped to viewport limits.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Screen area of the `[Add]` label on the top border.
    pub fn add_button_area(area: Rect) -> Rect {
        let label_width = ADD_BUTTON_LABEL.len() as u16;
        let right = area.right().saturating_sub(1);
        Rect {
            x: right.saturating_sub(label_width).max(area.x),
            y: area.y,
            width: label_width.min(area.width),
            height: 1,
        }
    }

    /// Get the visible lines based on current scroll offset.
    fn get_visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let border_style = if self.focused {
            theme::accent()
        } else {
            theme::accent_dim()
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::styled(ADD_BUTTON_LABEL, theme::button()).right_aligned())
            .padding(Padding::horizontal(1));

        let input = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(theme::placeholder())
        } else {
            Paragraph::new(self.get_visible_text(area.width)).style(theme::item_text())
        };

        frame.render_widget(input.block(block), area);

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text = flatten_newlines(text);
                if text.is_empty() {
                    return None;
                }
                self.insert_str(&text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.buffer.len() {
                    self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
