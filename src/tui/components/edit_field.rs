//! # EditField Component
//!
//! Single-line inline editor shown in place of a row's text while that row
//! is the core's `editing_id`. Long text scrolls horizontally so the cursor
//! stays visible.
//!
//! Every text change is reported as `Changed` and the parent forwards the
//! buffer through `Action::Edit`. `Commit` (Enter) does the same with the
//! unchanged text; `Cancel` (Esc or focus moving away) becomes
//! `Action::StopEditing`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::text_wrap::{
    display_width, fit_width, flatten_newlines, next_char_boundary, prev_char_boundary,
};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    /// Enter: store this text on the row (empty allowed).
    Commit(String),
    /// The field lost focus without committing.
    Cancel,
    /// The buffer changed; `buffer` holds the new text.
    Changed,
}

#[derive(Debug, Default)]
pub struct EditField {
    pub buffer: String,
    /// Cursor byte offset (0..=buffer.len())
    pos: usize,
    /// Whether to draw the terminal cursor (Prop)
    pub focused: bool,
}

impl EditField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the field with a row's current text, cursor at the end.
    pub fn load(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.pos = self.buffer.len();
    }

    /// First visible byte and cursor column for a field `width` columns wide.
    fn window(&self, width: usize) -> (usize, u16) {
        if width == 0 {
            return (self.pos, 0);
        }
        let mut start = 0;
        // Keep one column free for the cursor itself.
        while start < self.pos && display_width(&self.buffer[start..self.pos]) >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        (start, display_width(&self.buffer[start..self.pos]) as u16)
    }
}

impl Component for EditField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;
        let (start, cursor_col) = self.window(width);
        let visible = fit_width(&self.buffer[start..], width);

        frame.render_widget(Span::styled(visible.to_string(), theme::accent()), area);

        if self.focused && area.width > 0 {
            frame.set_cursor_position((area.x + cursor_col, area.y));
        }
    }
}

impl EventHandler for EditField {
    type Event = EditEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(EditEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let text = flatten_newlines(text);
                self.buffer.insert_str(self.pos, &text);
                self.pos += text.len();
                Some(EditEvent::Changed)
            }
            TuiEvent::Backspace if self.pos > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                Some(EditEvent::Changed)
            }
            TuiEvent::Delete if self.pos < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                Some(EditEvent::Changed)
            }
            TuiEvent::CursorLeft => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorRight if self.pos < self.buffer.len() => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(EditEvent::Commit(self.buffer.clone())),
            TuiEvent::Escape | TuiEvent::FocusNext => Some(EditEvent::Cancel),
            _ => None,
        }
    }
}
