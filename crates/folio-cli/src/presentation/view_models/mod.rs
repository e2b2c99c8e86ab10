//! Data contracts between presenters and views.
//!
//! Everything here is raw data (dates as `YearMonth`, durations in months,
//! layout in percent). Views decide how to format it.

pub mod dashboard;
pub mod education;
pub mod employment;
pub mod skills;

pub use dashboard::*;
pub use education::*;
pub use employment::*;
pub use skills::*;
