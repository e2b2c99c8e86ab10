//! HTML views for the static site.
//!
//! Each view is a `Display` wrapper around a view model. Clicks are links:
//! a tab points at its section page, a list entry at the page where that
//! entry is selected (see `links`).

pub mod links;
mod page;
mod rich_text;
mod sections;
mod sidebar;

pub use links::{entry_page, section_page, INDEX_PAGE};
pub use page::HtmlPage;
pub use rich_text::RichTextHtml;
pub use sections::{EducationHtml, EmploymentHtml, SkillsHtml};
pub use sidebar::SidebarHtml;
