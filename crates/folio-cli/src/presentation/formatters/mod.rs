pub mod html;
pub mod icon;
pub mod text;

pub use html::Escaped;
pub use icon::{icon_glyph, link_glyph};
pub use text::{inline_plain, truncate};
