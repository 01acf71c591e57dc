//! # Core Application Logic
//!
//! This module contains the todo list's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TodoList (state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (rows)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Tests    │
//!            │  Adapter   │            │            │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `TodoList` controller, all list state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: Row view-models derived from the state
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
pub mod view;
