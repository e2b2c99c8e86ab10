use serde::{Deserialize, Serialize};

use super::DetailItem;
use crate::date::YearMonth;

/// A single position in the employment history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub role: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub start_date: YearMonth,
    pub end_date: YearMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<DetailItem>,
}
