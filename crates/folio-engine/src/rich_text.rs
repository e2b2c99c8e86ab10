use folio_types::DetailItem;
use serde::Serialize;

/// Renderer-neutral inline content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    /// External link; renderers open it in a new context without a referrer
    Link { text: String, href: String },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text } | Inline::Link { text, .. } => text,
        }
    }
}

/// Flatten a detail item into inline runs, in input order.
///
/// A fragment becomes a link only when its `link` is present and non-empty.
pub fn render_rich_text(detail: &DetailItem) -> Vec<Inline> {
    match detail {
        DetailItem::Plain(text) => vec![Inline::Text { text: text.clone() }],
        DetailItem::Rich(items) => items
            .iter()
            .map(|item| match item.link.as_deref() {
                Some(href) if !href.is_empty() => Inline::Link {
                    text: item.text.clone(),
                    href: href.to_string(),
                },
                _ => Inline::Text {
                    text: item.text.clone(),
                },
            })
            .collect(),
    }
}
