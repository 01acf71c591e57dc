//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{TodoId, TodoList};

/// Creates a list holding one item per text, in order, with their ids.
pub fn list_with(texts: &[&str]) -> (TodoList, Vec<TodoId>) {
    let mut list = TodoList::new();
    let ids = texts
        .iter()
        .map(|text| list.add(*text).expect("test texts must be non-empty"))
        .collect();
    (list, ids)
}

/// Flattens a rendered test buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Text of a single buffer row, trailing spaces trimmed.
pub fn buffer_line(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    let width = buffer.area.width;
    (0..width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}
