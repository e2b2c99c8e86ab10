// NOTE: folio architecture
//
// Datasets are read once, then frozen. The only state that ever changes is a
// selection index per list plus the active tab, all owned by
// `folio_engine::Dashboard`. Every renderer is a pure function of that state:
// - the static site writes one page per reachable state, and links between
//   pages stand in for clicks
// - the terminal dashboard mutates the state on key presses and redraws
// - `show` prints a single section once

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod loader;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
