//! # Todo List State
//!
//! The list controller: every todo item plus the two pieces of transient
//! UI state (the new-item draft and the inline-edit cursor). No TUI types
//! live here; presentation state belongs to the `tui` module.
//!
//! ```text
//! TodoList
//! ├── items: Vec<TodoItem>          // insertion order, append-only at the tail
//! ├── draft_text: String            // mirror of the new-item input
//! ├── editing_id: Option<TodoId>    // at most one row in edit mode
//! └── next_id: u64                  // monotonic id source, never reused
//! ```
//!
//! Every operation is total. Operations that name an id which is no longer
//! present are silent no-ops; ids only ever come from this controller, so a
//! miss can only be a stale reference.

use std::fmt;

/// Stable identity of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug)]
pub struct TodoList {
    items: Vec<TodoItem>,
    draft_text: String,
    editing_id: Option<TodoId>,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft_text: String::new(),
            editing_id: None,
            next_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of the item in display order.
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.editing_id
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Append a new item and clear the draft.
    ///
    /// Exactly-empty text is rejected (no item, draft untouched). Anything
    /// else, whitespace included, is stored verbatim.
    pub fn add(&mut self, text: impl Into<String>) -> Option<TodoId> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            text,
            completed: false,
        });
        self.draft_text.clear();
        Some(id)
    }

    /// Delete the item with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        Some(self.items.remove(index))
    }

    /// Flip `completed` in place. Returns the new value.
    pub fn toggle_complete(&mut self, id: TodoId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Replace the item's text (empty allowed) and leave edit mode.
    ///
    /// Edit mode ends even when `id` is stale.
    pub fn edit(&mut self, id: TodoId, new_text: impl Into<String>) -> bool {
        self.editing_id = None;
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = new_text.into();
                true
            }
            None => false,
        }
    }

    /// Put `id` into edit mode. Any other row silently loses it.
    pub fn start_editing(&mut self, id: TodoId) {
        self.editing_id = Some(id);
    }

    pub fn stop_editing(&mut self) {
        self.editing_id = None;
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::list_with;

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.draft_text(), "");
        assert_eq!(list.editing_id(), None);
    }

    #[test]
    fn test_add_appends_incomplete_item_and_clears_draft() {
        let mut list = TodoList::new();
        list.set_draft_text("buy milk");

        let id = list.add("buy milk").expect("non-empty text is accepted");

        assert_eq!(list.len(), 1);
        let item = list.get(id).unwrap();
        assert_eq!(item.text, "buy milk");
        assert!(!item.completed);
        assert_eq!(list.draft_text(), "");
    }

    #[test]
    fn test_add_empty_is_noop_and_keeps_draft() {
        let mut list = TodoList::new();
        list.set_draft_text("half typed");

        assert_eq!(list.add(""), None);

        assert!(list.is_empty());
        assert_eq!(list.draft_text(), "half typed");
    }

    #[test]
    fn test_add_accepts_whitespace_only_text() {
        let mut list = TodoList::new();
        let id = list.add("   ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "   ");
    }

    #[test]
    fn test_add_appends_at_tail() {
        let (list, ids) = list_with(&["a", "b", "c"]);
        let order: Vec<TodoId> = list.items().iter().map(|item| item.id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.remove(ids[1]);
        let fresh = list.add("c").unwrap();
        assert!(!ids.contains(&fresh));
        assert!(fresh > ids[1]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let (mut list, ids) = list_with(&["a", "b", "c"]);

        let removed = list.remove(ids[1]).unwrap();

        assert_eq!(removed.text, "b");
        let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let (mut list, ids) = list_with(&["a"]);
        list.remove(ids[0]);
        assert!(list.remove(ids[0]).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_ends_edit_mode_for_that_row_only() {
        let (mut list, ids) = list_with(&["a", "b"]);

        list.start_editing(ids[0]);
        list.remove(ids[1]);
        assert_eq!(list.editing_id(), Some(ids[0]));

        list.remove(ids[0]);
        assert_eq!(list.editing_id(), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut list, ids) = list_with(&["a"]);

        assert_eq!(list.toggle_complete(ids[0]), Some(true));
        assert_eq!(list.toggle_complete(ids[0]), Some(false));
        assert!(!list.get(ids[0]).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut list = TodoList::new();
        let (_, ids) = list_with(&["elsewhere"]);
        assert_eq!(list.toggle_complete(ids[0]), None);
    }

    #[test]
    fn test_edit_changes_only_target_and_clears_cursor() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.start_editing(ids[1]);

        assert!(list.edit(ids[0], "alpha"));

        assert_eq!(list.get(ids[0]).unwrap().text, "alpha");
        assert_eq!(list.get(ids[1]).unwrap().text, "b");
        assert_eq!(list.editing_id(), None);
    }

    #[test]
    fn test_edit_allows_empty_text() {
        let (mut list, ids) = list_with(&["a"]);
        list.edit(ids[0], "");
        assert_eq!(list.get(ids[0]).unwrap().text, "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_edit_missing_id_still_clears_cursor() {
        let (mut list, ids) = list_with(&["a"]);
        list.start_editing(ids[0]);
        list.remove(ids[0]);
        list.start_editing(ids[0]);

        assert!(!list.edit(ids[0], "ghost"));
        assert_eq!(list.editing_id(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_edit_keeps_completion_and_position() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.toggle_complete(ids[0]);
        list.edit(ids[0], "first");

        assert_eq!(list.items()[0].id, ids[0]);
        assert!(list.items()[0].completed);
    }

    #[test]
    fn test_only_one_row_editable() {
        let (mut list, ids) = list_with(&["x", "y"]);
        list.start_editing(ids[0]);
        list.start_editing(ids[1]);
        assert_eq!(list.editing_id(), Some(ids[1]));
    }

    #[test]
    fn test_stop_editing_keeps_text() {
        let (mut list, ids) = list_with(&["keep me"]);
        list.start_editing(ids[0]);
        list.stop_editing();
        assert_eq!(list.editing_id(), None);
        assert_eq!(list.get(ids[0]).unwrap().text, "keep me");
    }

    #[test]
    fn test_completed_count() {
        let (mut list, ids) = list_with(&["a", "b", "c"]);
        list.toggle_complete(ids[0]);
        list.toggle_complete(ids[2]);
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn test_id_display() {
        let (_, ids) = list_with(&["a"]);
        assert_eq!(ids[0].to_string(), "#1");
    }
}
