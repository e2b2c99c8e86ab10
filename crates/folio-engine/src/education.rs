use folio_types::EducationPeriod;

use crate::selection::Selection;
use crate::timeline::TimelineLayout;

/// Preferred initial selection; clamped to the last period for shorter lists
pub const DEFAULT_EDUCATION_INDEX: usize = 2;

/// Abstracts longer than this many characters get a "read more" affordance
pub const ABSTRACT_PREVIEW_LIMIT: usize = 150;

/// Education periods laid out on a shared timeline
#[derive(Debug, Clone)]
pub struct EducationTimeline {
    periods: Vec<EducationPeriod>,
    selection: Selection,
    layout: Option<TimelineLayout>,
}

impl EducationTimeline {
    pub fn new(periods: Vec<EducationPeriod>) -> Self {
        let ranges: Vec<_> = periods
            .iter()
            .map(|p| (p.start_date, p.end_date))
            .collect();
        let layout = TimelineLayout::compute(&ranges);
        let selection = Selection::new(DEFAULT_EDUCATION_INDEX, periods.len());
        Self {
            periods,
            selection,
            layout,
        }
    }

    pub fn periods(&self) -> &[EducationPeriod] {
        &self.periods
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// None exactly when there are no periods
    pub fn layout(&self) -> Option<&TimelineLayout> {
        self.layout.as_ref()
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

    pub fn selected(&self) -> Option<&EducationPeriod> {
        self.selection.selected().and_then(|i| self.periods.get(i))
    }
}

/// Whether an abstract is long enough to show the "read more" affordance
pub fn abstract_needs_read_more(text: &str) -> bool {
    text.chars().count() > ABSTRACT_PREVIEW_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_more_threshold() {
        assert!(abstract_needs_read_more(&"a".repeat(200)));
        assert!(!abstract_needs_read_more(&"a".repeat(100)));
        assert!(!abstract_needs_read_more(&"a".repeat(150)));
        assert!(abstract_needs_read_more(&"a".repeat(151)));
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = EducationTimeline::new(Vec::new());
        assert!(timeline.is_empty());
        assert!(timeline.layout().is_none());
        assert!(timeline.selected().is_none());
    }
}
