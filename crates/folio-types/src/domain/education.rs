use serde::{Deserialize, Serialize};

use super::DetailItem;
use crate::date::YearMonth;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub date: YearMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPeriod {
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_short: Option<String>,
    pub degree: String,
    pub start_date: YearMonth,
    pub end_date: YearMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<DetailItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl EducationPeriod {
    /// Label for the timeline segment: short name when given
    pub fn short_label(&self) -> &str {
        self.institution_short
            .as_deref()
            .unwrap_or(&self.institution)
    }
}
