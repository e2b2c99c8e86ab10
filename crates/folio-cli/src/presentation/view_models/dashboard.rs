use folio_engine::{Inline, Section};
use folio_types::LinkKind;
use serde::Serialize;

use super::{EducationViewModel, EmploymentViewModel, SkillsViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct LinkViewModel {
    pub label: String,
    pub href: String,
    pub kind: LinkKind,
    pub new_context: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarViewModel {
    pub name: String,
    pub photo: Option<String>,
    pub photo_alt: Option<String>,
    pub links: Vec<LinkViewModel>,
    /// One entry per biography paragraph
    pub bio: Vec<Vec<Inline>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabViewModel {
    pub section: Section,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", content = "content", rename_all = "snake_case")]
pub enum SectionViewModel {
    Skills(SkillsViewModel),
    Employment(EmploymentViewModel),
    Education(EducationViewModel),
}

impl SectionViewModel {
    pub fn section(&self) -> Section {
        match self {
            SectionViewModel::Skills(_) => Section::Skills,
            SectionViewModel::Employment(_) => Section::Employment,
            SectionViewModel::Education(_) => Section::Education,
        }
    }
}

/// Full screen: sidebar, tab header and the active section only
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub sidebar: SidebarViewModel,
    pub tabs: Vec<TabViewModel>,
    pub content: SectionViewModel,
}
