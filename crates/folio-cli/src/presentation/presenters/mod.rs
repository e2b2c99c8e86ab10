//! Domain state to view model conversion.
//!
//! Presenters decide *what* is shown (selection flags, the read-more
//! threshold, which section is active) and never format strings.

mod dashboard;
mod education;
mod employment;
mod skills;

pub use dashboard::{present_dashboard, present_section, present_sidebar};
pub use education::present_education;
pub use employment::present_employment;
pub use skills::present_skills;

use folio_engine::{render_rich_text, Inline};
use folio_types::DetailItem;

fn present_details(items: &[DetailItem]) -> Vec<Vec<Inline>> {
    items.iter().map(render_rich_text).collect()
}
