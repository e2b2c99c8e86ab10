use folio_engine::Inline;
use std::fmt;

use crate::presentation::formatters::Escaped;

/// Inline runs as HTML. Links open in a new context without a referrer.
pub struct RichTextHtml<'a>(pub &'a [Inline]);

impl fmt::Display for RichTextHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in self.0 {
            match run {
                Inline::Text { text } => write!(f, "<span>{}</span>", Escaped(text))?,
                Inline::Link { text, href } => write!(
                    f,
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    Escaped(href),
                    Escaped(text)
                )?,
            }
        }
        Ok(())
    }
}

/// Bulleted list of rich-text lines; nothing at all when empty
pub(super) struct BulletsHtml<'a>(pub &'a [Vec<Inline>]);

impl fmt::Display for BulletsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, r#"<ul class="bullets">"#)?;
        for line in self.0 {
            writeln!(f, "<li>{}</li>", RichTextHtml(line))?;
        }
        writeln!(f, "</ul>")
    }
}
