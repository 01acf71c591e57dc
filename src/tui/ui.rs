use crate::core::state::TodoList;
use crate::core::view::{self, RowView};
use crate::tui::component::Component;
use crate::tui::components::todo_list::zone_at;
use crate::tui::components::{InputBox, RowZone, TitleBar, TodoListView};
use crate::tui::theme;
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    AddButton,
    Input,
    Row(usize, RowZone),
    /// Inside the list but below the last row.
    ListBackground,
}

/// Screen split: title, input, list, help.
pub fn layout(frame_area: Rect, input_height: u16) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(input_height), Min(0), Length(1)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, list: &TodoList, tui: &mut TuiState) {
    frame.render_widget(Block::default().style(theme::base()), frame.area());

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let [title_area, input_area, list_area, help_area] = layout(frame.area(), input_height);

    TitleBar::new(tui.title.clone(), list.len(), list.completed_count()).render(frame, title_area);

    tui.input_box.focused = tui.focus == Focus::Draft;
    tui.input_box.render(frame, input_area);

    let rows = view::render(list);
    tui.todo_list.edit_field.focused = tui.focus == Focus::Edit;
    let list_focused = tui.focus != Focus::Draft;
    TodoListView::new(&rows, &mut tui.todo_list, list_focused).render(frame, list_area);

    draw_help_bar(frame, help_area, tui.focus);
}

fn help_entries(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Draft => &[("Enter", "Add"), ("Tab", "List"), ("Ctrl+C", "Quit")],
        Focus::List => &[
            ("Space", "Toggle"),
            ("e", "Edit"),
            ("d", "Remove"),
            ("Tab", "Input"),
            ("q", "Quit"),
        ],
        Focus::Edit => &[("Type", "Edit"), ("Esc", "Done")],
    }
}

fn draw_help_bar(frame: &mut Frame, area: Rect, focus: Focus) {
    let spans: Vec<Span> = help_entries(focus)
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key} "), theme::accent().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{label} "), theme::muted()),
            ]
        })
        .collect();
    frame.render_widget(Line::from(spans).centered(), area);
}

/// Hit test: map a click at screen (`col`, `row`) to the element under it.
pub fn hit_test(
    col: u16,
    row: u16,
    frame_area: Rect,
    input_height: u16,
    list_offset: usize,
    rows: &[RowView],
) -> Option<Hit> {
    let [_title_area, input_area, list_area, _help_area] = layout(frame_area, input_height);
    let pos = Position::new(col, row);

    if InputBox::add_button_area(input_area).contains(pos) {
        return Some(Hit::AddButton);
    }
    if input_area.contains(pos) {
        return Some(Hit::Input);
    }

    let inner = list_area.inner(Margin::new(1, 1));
    if !inner.contains(pos) {
        return None;
    }

    let index = list_offset + (row - inner.y) as usize;
    match rows.get(index) {
        Some(row_view) => Some(Hit::Row(
            index,
            zone_at(col - inner.x, inner.width, row_view.editing),
        )),
        None => Some(Hit::ListBackground),
    }
}
