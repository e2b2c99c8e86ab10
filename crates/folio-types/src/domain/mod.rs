pub mod education;
pub mod job;
pub mod profile;
pub mod rich_text;
pub mod skill;

pub use education::*;
pub use job::*;
pub use profile::*;
pub use rich_text::*;
pub use skill::*;
