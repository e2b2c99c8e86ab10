use std::fmt;

use super::rich_text::RichTextHtml;
use crate::presentation::formatters::{link_glyph, Escaped};
use crate::presentation::view_models::SidebarViewModel;
use folio_types::LinkKind;

pub struct SidebarHtml<'a>(pub &'a SidebarViewModel);

impl fmt::Display for SidebarHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        writeln!(f, r#"<aside class="sidebar">"#)?;
        writeln!(f, "<h1>{}</h1>", Escaped(&vm.name))?;

        if !vm.links.is_empty() {
            writeln!(f, r#"<nav class="social">"#)?;
            for link in &vm.links {
                write!(f, r#"<a class="social-{}" href="{}""#, link.kind.as_str(), Escaped(&link.href))?;
                if link.new_context {
                    write!(f, r#" target="_blank" rel="noopener noreferrer""#)?;
                }
                if link.kind == LinkKind::Download {
                    write!(f, " download")?;
                }
                writeln!(
                    f,
                    r#"><span class="glyph">{}</span> {}</a>"#,
                    link_glyph(link.kind),
                    Escaped(&link.label)
                )?;
            }
            writeln!(f, "</nav>")?;
        }

        if let Some(photo) = &vm.photo {
            let alt = vm.photo_alt.as_deref().unwrap_or(&vm.name);
            writeln!(
                f,
                r#"<div class="photo"><img src="{}" alt="{}"></div>"#,
                Escaped(photo),
                Escaped(alt)
            )?;
        }

        for paragraph in &vm.bio {
            writeln!(f, r#"<p class="bio">{}</p>"#, RichTextHtml(paragraph))?;
        }

        writeln!(f, "</aside>")
    }
}
