//! Stateful TUI components: UI state + input handling + rendering.

pub mod dashboard;

pub use dashboard::{DashboardAction, DashboardComponent};
