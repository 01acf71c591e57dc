//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` (up to 500ms) and only
//! redraws after at least one event arrived. All pending events are drained
//! before the next draw.
//!
//! ## Focus
//!
//! Exactly one place receives keystrokes:
//!
//! - `Draft`: the new-item input box
//! - `List`: row selection and per-row commands
//! - `Edit`: the inline edit field of the core's `editing_id`
//!
//! The core decides when edit mode starts and ends; focus follows the
//! `Effect` returned by `update()`.

mod component;
pub mod components;
mod event;
mod theme;
pub mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{TodoId, TodoList};
use crate::core::view;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditEvent, InputBox, InputEvent, RowZone, TodoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Draft,
    List,
    Edit,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub title: String,
    pub input_box: InputBox,
    pub todo_list: TodoListState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            input_box: InputBox::new(placeholder),
            todo_list: TodoListState::new(),
            focus: Focus::Draft, // User expects to type immediately
        }
    }

    fn selected_id(&self, list: &TodoList) -> Option<TodoId> {
        self.todo_list
            .selected()
            .and_then(|index| list.items().get(index))
            .map(|item| item.id)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Keyboard enhancement is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let mut list = TodoList::new();
    let mut tui = TuiState::new(config.title.clone(), config.placeholder.clone());

    let mut terminal = ratatui::init();
    let guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut list, &mut tui);

    drop(guard);
    ratatui::restore();
    info!("Exiting with {} items", list.len());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    list: &mut TodoList,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, list, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(list, tui, event, frame_area) {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event by focus. Returns true when the app should quit.
fn handle_event(list: &mut TodoList, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => false,
        // The wheel only scrolls the list; it never moves focus
        TuiEvent::ScrollUp | TuiEvent::ScrollDown if tui.focus != Focus::List => false,
        // ForceQuit (Ctrl+C) always quits regardless of focus
        TuiEvent::ForceQuit => dispatch(list, tui, Action::Quit),
        TuiEvent::MouseClick(col, row) => handle_click(list, tui, col, row, frame_area),
        _ => match tui.focus {
            Focus::Draft => handle_draft_event(list, tui, &event),
            Focus::List => handle_list_event(list, tui, &event),
            Focus::Edit => handle_edit_event(list, tui, &event),
        },
    }
}

/// Apply an action and carry out the effect it returns. Returns true on quit.
fn dispatch(list: &mut TodoList, tui: &mut TuiState, action: Action) -> bool {
    let effect = update(list, action);

    // Props flow back from the core
    tui.input_box.sync(list.draft_text());
    tui.todo_list.clamp(list.len());

    match effect {
        Effect::Quit => return true,
        Effect::FocusEditor(id) => match (list.get(id), list.position(id)) {
            (Some(item), Some(index)) => {
                tui.todo_list.edit_field.load(&item.text);
                tui.todo_list.select(Some(index));
                tui.focus = Focus::Edit;
            }
            _ => warn!("Edit requested for missing item {}", id),
        },
        Effect::ReleaseEditor => {
            if tui.focus == Focus::Edit {
                tui.focus = Focus::List;
            }
        }
        Effect::None => {}
    }
    false
}

fn focus_list(list: &TodoList, tui: &mut TuiState) {
    tui.focus = Focus::List;
    if tui.todo_list.selected().is_none() && !list.is_empty() {
        tui.todo_list.select(Some(0));
    }
}

fn handle_draft_event(list: &mut TodoList, tui: &mut TuiState, event: &TuiEvent) -> bool {
    if matches!(event, TuiEvent::FocusNext | TuiEvent::CursorDown) {
        focus_list(list, tui);
        return false;
    }

    match tui.input_box.handle_event(event) {
        Some(InputEvent::ContentChanged) => {
            let text = tui.input_box.buffer.clone();
            dispatch(list, tui, Action::SetDraftText(text))
        }
        Some(InputEvent::Submit(text)) => dispatch(list, tui, Action::Add(text)),
        None => false,
    }
}

fn handle_list_event(list: &mut TodoList, tui: &mut TuiState, event: &TuiEvent) -> bool {
    let selected = tui.selected_id(list);

    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp => tui.todo_list.select_prev(list.len()),
        TuiEvent::CursorDown | TuiEvent::ScrollDown => tui.todo_list.select_next(list.len()),
        TuiEvent::FocusNext | TuiEvent::Escape => tui.focus = Focus::Draft,
        TuiEvent::InputChar('q') => return dispatch(list, tui, Action::Quit),
        TuiEvent::InputChar(' ') => {
            if let Some(id) = selected {
                return dispatch(list, tui, Action::ToggleComplete(id));
            }
        }
        TuiEvent::InputChar('e') | TuiEvent::Submit => {
            if let Some(id) = selected {
                return dispatch(list, tui, Action::StartEditing(id));
            }
        }
        TuiEvent::InputChar('d' | 'x') | TuiEvent::Delete => {
            if let Some(id) = selected {
                return dispatch(list, tui, Action::Remove(id));
            }
        }
        // Typing anything else switches to the input and types there
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            tui.focus = Focus::Draft;
            return handle_draft_event(list, tui, event);
        }
        _ => {}
    }
    false
}

fn handle_edit_event(list: &mut TodoList, tui: &mut TuiState, event: &TuiEvent) -> bool {
    let text = match tui.todo_list.edit_field.handle_event(event) {
        Some(EditEvent::Changed) => tui.todo_list.edit_field.buffer.clone(),
        Some(EditEvent::Commit(text)) => text,
        Some(EditEvent::Cancel) => return dispatch(list, tui, Action::StopEditing),
        None => return false,
    };

    // Each change goes straight to the core, which ends edit mode
    match list.editing_id() {
        Some(id) => dispatch(list, tui, Action::Edit { id, text }),
        None => {
            tui.focus = Focus::List;
            false
        }
    }
}

fn handle_click(list: &mut TodoList, tui: &mut TuiState, col: u16, row: u16, frame_area: Rect) -> bool {
    let rows = view::render(list);
    let input_height = tui.input_box.calculate_height(frame_area.width);
    let Some(hit) = ui::hit_test(col, row, frame_area, input_height, tui.todo_list.offset(), &rows)
    else {
        return false;
    };

    // Clicking anywhere but the edit field itself is a focus loss
    let on_edit_field = matches!(hit, Hit::Row(index, RowZone::Text) if rows[index].editing);
    if tui.focus == Focus::Edit && !on_edit_field {
        dispatch(list, tui, Action::StopEditing);
    }

    match hit {
        Hit::AddButton => {
            tui.focus = Focus::Draft;
            let text = tui.input_box.buffer.clone();
            dispatch(list, tui, Action::Add(text))
        }
        Hit::Input => {
            tui.focus = Focus::Draft;
            false
        }
        Hit::ListBackground => {
            focus_list(list, tui);
            false
        }
        Hit::Row(index, zone) => {
            let id = rows[index].id;
            if !on_edit_field {
                tui.focus = Focus::List;
            }
            tui.todo_list.select(Some(index));
            match zone {
                RowZone::Toggle => dispatch(list, tui, Action::ToggleComplete(id)),
                RowZone::Edit => dispatch(list, tui, Action::StartEditing(id)),
                RowZone::Remove => dispatch(list, tui, Action::Remove(id)),
                RowZone::Text => false,
            }
        }
    }
}
