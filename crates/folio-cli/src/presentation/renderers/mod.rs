pub mod console;
pub mod site;
pub mod tui;

pub use console::ConsoleRenderer;
pub use site::SiteRenderer;
pub use tui::TuiRenderer;
