use folio_engine::Inline;
use folio_types::YearMonth;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobViewModel {
    pub role: String,
    pub company: String,
    pub company_url: Option<String>,
    pub logo_url: Option<String>,
    pub start_date: YearMonth,
    pub end_date: YearMonth,
    pub duration_months: u32,
    pub description: Option<String>,
    pub achievements: Vec<Vec<Inline>>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmploymentViewModel {
    pub jobs: Vec<JobViewModel>,
    pub selected: Option<usize>,
}

impl EmploymentViewModel {
    pub fn selected_job(&self) -> Option<&JobViewModel> {
        self.selected.and_then(|i| self.jobs.get(i))
    }
}
