pub mod dataset;
pub mod date;
pub mod domain;
pub mod error;

pub use dataset::*;
pub use date::*;
pub use domain::*;
pub use error::{Error, Result};
