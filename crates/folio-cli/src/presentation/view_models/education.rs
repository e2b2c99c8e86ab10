use folio_engine::{Inline, Segment, Tick};
use folio_types::YearMonth;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PublicationViewModel {
    pub title: String,
    pub url: Option<String>,
    pub publisher: Option<String>,
    pub date: YearMonth,
    pub abstract_text: Option<String>,
    /// Abstract is long enough to warrant a "read more" affordance
    pub read_more: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodViewModel {
    pub institution: String,
    pub label: String,
    pub degree: String,
    pub start_date: YearMonth,
    pub end_date: YearMonth,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub grade: Option<String>,
    pub highlights: Vec<Vec<Inline>>,
    pub publications: Vec<PublicationViewModel>,
    pub segment: Segment,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationViewModel {
    pub periods: Vec<PeriodViewModel>,
    pub ticks: Vec<Tick>,
    pub total_span_months: i64,
    pub selected: Option<usize>,
}

impl EducationViewModel {
    pub fn selected_period(&self) -> Option<&PeriodViewModel> {
        self.selected.and_then(|i| self.periods.get(i))
    }
}
