use serde::{Deserialize, Serialize};
use std::fmt;

use super::DetailItem;

/// Icon shown beside a skill area.
///
/// Keys outside the known set deserialize to `Unknown` so a typo in a
/// dataset degrades to a fallback glyph instead of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Code,
    Database,
    Cloud,
    Brain,
    Chart,
    ThumbsUp,
    #[serde(other)]
    Unknown,
}

impl IconKey {
    pub const KNOWN: [IconKey; 6] = [
        IconKey::Code,
        IconKey::Database,
        IconKey::Cloud,
        IconKey::Brain,
        IconKey::Chart,
        IconKey::ThumbsUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Code => "code",
            IconKey::Database => "database",
            IconKey::Cloud => "cloud",
            IconKey::Brain => "brain",
            IconKey::Chart => "chart",
            IconKey::ThumbsUp => "thumbs_up",
            IconKey::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, IconKey::Unknown)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillArea {
    pub name: String,
    #[serde(alias = "iconKey")]
    pub icon_name: IconKey,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub more_details: Vec<DetailItem>,
}
