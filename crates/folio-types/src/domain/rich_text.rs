use serde::{Deserialize, Serialize};

/// One fragment of a rich detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RichTextItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
        }
    }
}

/// A detail line: either plain text or an ordered run of fragments.
///
/// In JSON this is a bare string or an array of `{text, link?}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailItem {
    Plain(String),
    Rich(Vec<RichTextItem>),
}

impl DetailItem {
    /// Concatenated text with links dropped
    pub fn plain_text(&self) -> String {
        match self {
            DetailItem::Plain(text) => text.clone(),
            DetailItem::Rich(items) => items.iter().map(|item| item.text.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DetailItem::Plain(text) => text.is_empty(),
            DetailItem::Rich(items) => items.iter().all(|item| item.text.is_empty()),
        }
    }
}

impl From<&str> for DetailItem {
    fn from(s: &str) -> Self {
        DetailItem::Plain(s.to_string())
    }
}

impl From<String> for DetailItem {
    fn from(s: String) -> Self {
        DetailItem::Plain(s)
    }
}

impl From<Vec<RichTextItem>> for DetailItem {
    fn from(items: Vec<RichTextItem>) -> Self {
        DetailItem::Rich(items)
    }
}
