use folio_types::Job;

use crate::selection::Selection;

/// Jobs in dataset order with the job shown in the detail panel
#[derive(Debug, Clone)]
pub struct EmploymentHistory {
    jobs: Vec<Job>,
    selection: Selection,
}

impl EmploymentHistory {
    pub fn new(jobs: Vec<Job>) -> Self {
        let selection = Selection::new(0, jobs.len());
        Self { jobs, selection }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.selection.select(index)
    }

    pub fn selected(&self) -> Option<&Job> {
        self.selection.selected().and_then(|i| self.jobs.get(i))
    }
}
