//! Presentation-independent core of a folio dashboard.
//!
//! Everything here is a total function of the loaded datasets plus a handful
//! of selection indices. Renderers (HTML, terminal, console) read from these
//! types and never compute layout or selection themselves.

pub mod carousel;
pub mod dashboard;
pub mod education;
pub mod employment;
pub mod rich_text;
pub mod selection;
pub mod skills;
pub mod timeline;
pub mod validate;

pub use carousel::{Carousel, Section};
pub use dashboard::{Dashboard, Datasets};
pub use education::{EducationTimeline, ABSTRACT_PREVIEW_LIMIT, DEFAULT_EDUCATION_INDEX};
pub use employment::EmploymentHistory;
pub use rich_text::{render_rich_text, Inline};
pub use selection::Selection;
pub use skills::SkillSection;
pub use timeline::{Segment, Tick, TimelineLayout};
pub use validate::{validate, Issue, Severity};
