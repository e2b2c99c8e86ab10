use serde::Serialize;
use std::fmt;

use crate::dashboard::Datasets;
use crate::timeline::TimelineLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub dataset: &'static str,
    /// Entry position in the dataset, when the issue belongs to one entry
    pub index: Option<usize>,
    pub message: String,
}

impl Issue {
    fn error(dataset: &'static str, index: usize, message: String) -> Self {
        Self {
            severity: Severity::Error,
            dataset,
            index: Some(index),
            message,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]: {}", self.dataset, index, self.message),
            None => write!(f, "{}: {}", self.dataset, self.message),
        }
    }
}

/// Check the invariants the datasets cannot express in their JSON shape
pub fn validate(data: &Datasets) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (i, area) in data.skills.iter().enumerate() {
        if !area.icon_name.is_known() {
            issues.push(Issue::error(
                "skills",
                i,
                format!("'{}' has an unrecognized icon key", area.name),
            ));
        }
    }

    for (i, job) in data.jobs.iter().enumerate() {
        if job.end_date < job.start_date {
            issues.push(Issue::error(
                "jobs",
                i,
                format!(
                    "'{}' ends ({}) before it starts ({})",
                    job.role, job.end_date, job.start_date
                ),
            ));
        }
    }

    for (i, period) in data.education.iter().enumerate() {
        if period.end_date < period.start_date {
            issues.push(Issue::error(
                "education",
                i,
                format!(
                    "'{}' ends ({}) before it starts ({})",
                    period.institution, period.end_date, period.start_date
                ),
            ));
        }
    }

    let ranges: Vec<_> = data
        .education
        .iter()
        .map(|p| (p.start_date, p.end_date))
        .collect();
    let zero_span = TimelineLayout::compute(&ranges)
        .map(|layout| layout.total_span_months == 0)
        .unwrap_or(false);
    if zero_span {
        issues.push(Issue {
            severity: Severity::Warning,
            dataset: "education",
            index: None,
            message: "all periods share one month; timeline segments fill the full width"
                .to_string(),
        });
    }

    issues
}
