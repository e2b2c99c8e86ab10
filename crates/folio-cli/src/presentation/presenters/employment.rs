use folio_engine::EmploymentHistory;
use folio_types::months_between;

use super::present_details;
use crate::presentation::view_models::{EmploymentViewModel, JobViewModel};

pub fn present_employment(history: &EmploymentHistory) -> EmploymentViewModel {
    let selection = history.selection();
    let jobs = history
        .jobs()
        .iter()
        .enumerate()
        .map(|(i, job)| JobViewModel {
            role: job.role.clone(),
            company: job.company.clone(),
            company_url: job.company_url.clone().filter(|url| !url.is_empty()),
            logo_url: job.logo_url.clone(),
            start_date: job.start_date,
            end_date: job.end_date,
            duration_months: months_between(job.start_date, job.end_date),
            description: job.description.clone().filter(|d| !d.trim().is_empty()),
            achievements: present_details(&job.achievements),
            selected: selection.is_selected(i),
        })
        .collect();

    EmploymentViewModel {
        jobs,
        selected: selection.selected(),
    }
}
