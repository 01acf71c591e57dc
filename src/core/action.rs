//! # Actions
//!
//! Everything that can happen to the list becomes an `Action`.
//! User presses Enter in the input? That's `Action::Add(text)`.
//! User clicks the pencil on a row? That's `Action::StartEditing(id)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what it has to do next (move focus, quit).
//! No I/O happens here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{TodoId, TodoList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the new-item input.
    Add(String),
    Remove(TodoId),
    ToggleComplete(TodoId),
    /// Commit new text for a row. Also ends edit mode.
    Edit { id: TodoId, text: String },
    StartEditing(TodoId),
    /// The edit field lost focus without committing.
    StopEditing,
    /// Mirror of the new-item input field.
    SetDraftText(String),
    Quit,
}

/// What the adapter must do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Grant input focus to this row's edit field.
    FocusEditor(TodoId),
    /// Edit mode is over; the edit field gives focus back.
    ReleaseEditor,
}

pub fn update(list: &mut TodoList, action: Action) -> Effect {
    match action {
        Action::Add(text) => {
            match list.add(text) {
                Some(id) => info!("Added {} ({} items)", id, list.len()),
                None => debug!("Ignored add with empty text"),
            }
            Effect::None
        }
        Action::Remove(id) => {
            let was_editing = list.editing_id() == Some(id);
            match list.remove(id) {
                Some(item) => info!("Removed {} ({:?})", id, item.text),
                None => debug!("Remove of stale id {}", id),
            }
            if was_editing {
                Effect::ReleaseEditor
            } else {
                Effect::None
            }
        }
        Action::ToggleComplete(id) => {
            match list.toggle_complete(id) {
                Some(completed) => info!("Toggled {} -> completed={}", id, completed),
                None => debug!("Toggle of stale id {}", id),
            }
            Effect::None
        }
        Action::Edit { id, text } => {
            if list.edit(id, text) {
                info!("Edited {}", id);
            } else {
                debug!("Edit of stale id {}", id);
            }
            Effect::ReleaseEditor
        }
        Action::StartEditing(id) => {
            if let Some(previous) = list.editing_id().filter(|prev| *prev != id) {
                debug!("Edit mode moves from {} to {}", previous, id);
            }
            list.start_editing(id);
            Effect::FocusEditor(id)
        }
        Action::StopEditing => {
            list.stop_editing();
            Effect::ReleaseEditor
        }
        Action::SetDraftText(text) => {
            list.set_draft_text(text);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}
