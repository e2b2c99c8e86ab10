use folio_types::{EducationPeriod, Job, Profile, SkillArea};

use crate::carousel::{Carousel, Section};
use crate::education::EducationTimeline;
use crate::employment::EmploymentHistory;
use crate::selection::Selection;
use crate::skills::SkillSection;

/// The three datasets a dashboard is built from
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub skills: Vec<SkillArea>,
    pub jobs: Vec<Job>,
    pub education: Vec<EducationPeriod>,
}

/// Sidebar profile plus the tabbed sections and their selection state
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: Profile,
    pub carousel: Carousel,
    pub skills: SkillSection,
    pub employment: EmploymentHistory,
    pub education: EducationTimeline,
}

impl Dashboard {
    pub fn new(profile: Profile, data: Datasets) -> Self {
        Self {
            profile,
            carousel: Carousel::new(),
            skills: SkillSection::new(data.skills),
            employment: EmploymentHistory::new(data.jobs),
            education: EducationTimeline::new(data.education),
        }
    }

    pub fn active_section(&self) -> Section {
        self.carousel.current()
    }

    /// Selection of the given section's list
    pub fn selection(&self, section: Section) -> &Selection {
        match section {
            Section::Skills => self.skills.selection(),
            Section::Employment => self.employment.selection(),
            Section::Education => self.education.selection(),
        }
    }

    pub fn selection_mut(&mut self, section: Section) -> &mut Selection {
        match section {
            Section::Skills => self.skills.selection_mut(),
            Section::Employment => self.employment.selection_mut(),
            Section::Education => self.education.selection_mut(),
        }
    }

    /// Number of selectable entries in a section
    pub fn entry_count(&self, section: Section) -> usize {
        self.selection(section).len()
    }

    /// Select an entry in the active section
    pub fn select_in_active(&mut self, index: usize) -> bool {
        let section = self.active_section();
        self.selection_mut(section).select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard_defaults() {
        let dashboard = Dashboard::new(Profile::default(), Datasets::default());
        assert_eq!(dashboard.active_section(), Section::Employment);
        for section in Section::ALL {
            assert_eq!(dashboard.entry_count(section), 0);
            assert_eq!(dashboard.selection(section).selected(), None);
        }
    }
}
