//! Layout only. Views format view models and never decide what is shown.

pub mod console;
pub mod html;
pub mod tui;
