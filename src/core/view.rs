//! # Render Description
//!
//! The boundary between the controller and whatever draws it. After every
//! mutation the adapter asks for the full row list again; there is no
//! incremental update contract.

use crate::core::state::{TodoId, TodoList};

/// View-model for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// The row shows an edit field instead of its text and edit affordance.
    pub editing: bool,
}

/// Rows in collection order. No sorting, no filtering.
pub fn render(list: &TodoList) -> Vec<RowView> {
    let editing_id = list.editing_id();
    list.items()
        .iter()
        .map(|item| RowView {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
            editing: editing_id == Some(item.id),
        })
        .collect()
}
