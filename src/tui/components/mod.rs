//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: List title and completion count
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: New-item field with placeholder and `[Add]` button
//! - `EditField`: Inline single-line editor for the row being edited
//! - `TodoList`: Scrollable rows with toggle/edit/remove affordances
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into the
//! core state on their own:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TodoListView::new(&rows, &mut tui.todo_list, focused).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! todo_list.render(frame, area); // reads the TodoList by itself
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top line)
//! ├── input_box/       (New-item input)
//! ├── edit_field.rs    (Inline row editor)
//! └── todo_list.rs     (Row list)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod edit_field;
pub mod input_box;
pub mod todo_list;
pub use edit_field::{EditEvent, EditField};
pub use input_box::{InputBox, InputEvent};
pub use todo_list::{RowZone, TodoListState, TodoListView};
