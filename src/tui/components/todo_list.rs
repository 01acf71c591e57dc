//! # TodoList Component
//!
//! Bordered, scrollable list of rows built from `core::view::render`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TodoListState` lives in `TuiState` (selection, scroll offset, edit field)
//! - `TodoListView` is created each frame with borrowed rows and state
//!
//! ## Row Layout
//!
//! ```text
//! [✓] buy oat milk                 ✎  X
//! ├──┤├───────────── text ────────┤├─┤├─┤
//!  toggle                          edit remove
//! ```
//!
//! The editing row replaces text and `✎` with the `EditField`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::view::RowView;
use crate::tui::component::Component;
use crate::tui::components::edit_field::EditField;
use crate::tui::components::input_box::text_wrap::{display_width, fit_width};
use crate::tui::theme;

pub const INDICATOR_WIDTH: u16 = 4;
pub const EDIT_WIDTH: u16 = 3;
pub const REMOVE_WIDTH: u16 = 3;

/// Clickable region of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowZone {
    Toggle,
    Text,
    Edit,
    Remove,
}

/// Which zone column `col` (relative to the row start) falls in.
pub fn zone_at(col: u16, width: u16, editing: bool) -> RowZone {
    if col < INDICATOR_WIDTH {
        RowZone::Toggle
    } else if col >= width.saturating_sub(REMOVE_WIDTH) {
        RowZone::Remove
    } else if !editing && col >= width.saturating_sub(REMOVE_WIDTH + EDIT_WIDTH) {
        RowZone::Edit
    } else {
        RowZone::Text
    }
}

/// Persistent state for the list.
pub struct TodoListState {
    pub list_state: ListState,
    pub edit_field: EditField,
}

impl TodoListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            edit_field: EditField::new(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    /// First visible row index.
    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = self.selected().map_or(len - 1, |i| i.saturating_sub(1));
        self.select(Some(prev));
    }

    /// Keep the selection inside `0..len` after rows disappear.
    pub fn clamp(&mut self, len: usize) {
        match self.selected() {
            _ if len == 0 => self.select(None),
            Some(i) if i >= len => self.select(Some(len - 1)),
            _ => {}
        }
    }
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the list.
pub struct TodoListView<'a> {
    rows: &'a [RowView],
    state: &'a mut TodoListState,
    focused: bool,
}

impl<'a> TodoListView<'a> {
    pub fn new(rows: &'a [RowView], state: &'a mut TodoListState, focused: bool) -> Self {
        Self {
            rows,
            state,
            focused,
        }
    }
}

impl Component for TodoListView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            theme::accent()
        } else {
            theme::accent_dim()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);

        if self.rows.is_empty() {
            let empty = Paragraph::new("Nothing to do yet.")
                .style(theme::placeholder())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(row_line(row, inner.width)))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(theme::SELECTION)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);

        // Overlay the edit field on the editing row, if it is on screen
        let Some(index) = self.rows.iter().position(|row| row.editing) else {
            return;
        };
        let offset = self.state.list_state.offset();
        if index < offset || index - offset >= inner.height as usize {
            return;
        }
        let field_area = Rect {
            x: inner.x + INDICATOR_WIDTH,
            y: inner.y + (index - offset) as u16,
            width: inner.width.saturating_sub(INDICATOR_WIDTH + REMOVE_WIDTH),
            height: 1,
        };
        self.state.edit_field.render(frame, field_area);
    }
}

fn row_line(row: &RowView, width: u16) -> Line<'static> {
    let indicator = if row.completed { "[✓] " } else { "[ ] " };
    let indicator = Span::styled(indicator, theme::accent());
    let remove = Span::styled(" X ", theme::remove());

    if row.editing {
        let fill = width.saturating_sub(INDICATOR_WIDTH + REMOVE_WIDTH) as usize;
        return Line::from(vec![indicator, Span::raw(" ".repeat(fill)), remove]);
    }

    let text_width = width.saturating_sub(INDICATOR_WIDTH + EDIT_WIDTH + REMOVE_WIDTH) as usize;
    let text = truncate(&row.text, text_width);
    let pad = text_width.saturating_sub(display_width(&text));
    let text_style = if row.completed {
        theme::completed_text()
    } else {
        theme::item_text()
    };

    Line::from(vec![
        indicator,
        Span::styled(text, text_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(" ✎ ", theme::accent()),
        remove,
    ])
}

/// Truncate to `width` columns, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        text.to_string()
    } else if width == 0 {
        String::new()
    } else {
        format!("{}…", fit_width(text, width - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::render;
    use crate::test_support::{buffer_line, buffer_text, list_with};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(rows: &[RowView], state: &mut TodoListState, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| TodoListView::new(rows, state, true).render(f, f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn test_zone_at() {
        assert_eq!(zone_at(0, 30, false), RowZone::Toggle);
        assert_eq!(zone_at(3, 30, false), RowZone::Toggle);
        assert_eq!(zone_at(4, 30, false), RowZone::Text);
        assert_eq!(zone_at(25, 30, false), RowZone::Edit);
        assert_eq!(zone_at(27, 30, false), RowZone::Remove);
        assert_eq!(zone_at(29, 30, false), RowZone::Remove);
    }

    #[test]
    fn test_zone_at_editing_row_has_no_edit_zone() {
        assert_eq!(zone_at(25, 30, true), RowZone::Text);
        assert_eq!(zone_at(28, 30, true), RowZone::Remove);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = TodoListState::new();
        state.select_prev(3);
        assert_eq!(state.selected(), Some(2));
        state.select_next(3);
        assert_eq!(state.selected(), Some(2));
        state.select_prev(3);
        assert_eq!(state.selected(), Some(1));

        state.clamp(1);
        assert_eq!(state.selected(), Some(0));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_next_on_empty_list_is_noop() {
        let mut state = TodoListState::new();
        state.select_next(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("milk", 10), "milk");
        assert_eq!(truncate("buy oat milk", 6), "buy o…");
        assert_eq!(truncate("milk", 0), "");
    }

    #[test]
    fn test_render_empty_list() {
        let mut state = TodoListState::new();
        let terminal = draw(&[], &mut state, 30, 5);
        assert!(buffer_text(terminal.backend().buffer()).contains("Nothing to do yet."));
    }

    #[test]
    fn test_render_rows_in_order_with_affordances() {
        let (mut list, ids) = list_with(&["buy milk", "walk dog"]);
        list.toggle_complete(ids[1]);
        let rows = render(&list);
        let mut state = TodoListState::new();

        let terminal = draw(&rows, &mut state, 30, 5);
        let buffer = terminal.backend().buffer();

        let first = buffer_line(buffer, 1);
        let second = buffer_line(buffer, 2);
        assert!(first.contains("[ ] buy milk"));
        assert!(first.contains("✎"));
        assert!(first.contains('X'));
        assert!(second.contains("[✓] walk dog"));
    }

    #[test]
    fn test_render_editing_row_shows_field_not_text() {
        let (mut list, ids) = list_with(&["buy milk"]);
        list.start_editing(ids[0]);
        let rows = render(&list);
        let mut state = TodoListState::new();
        state.edit_field.load("buy oat");

        let terminal = draw(&rows, &mut state, 30, 4);
        let line = buffer_line(terminal.backend().buffer(), 1);

        assert!(line.contains("buy oat"));
        assert!(!line.contains("buy milk"));
        assert!(!line.contains("✎"));
        assert!(line.contains('X'));
    }
}
