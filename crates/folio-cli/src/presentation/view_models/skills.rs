use folio_engine::Inline;
use folio_types::IconKey;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillAreaViewModel {
    pub name: String,
    pub icon: IconKey,
    pub skills: Vec<String>,
    pub details: Vec<Vec<Inline>>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsViewModel {
    pub areas: Vec<SkillAreaViewModel>,
    pub selected: Option<usize>,
}

impl SkillsViewModel {
    pub fn selected_area(&self) -> Option<&SkillAreaViewModel> {
        self.selected.and_then(|i| self.areas.get(i))
    }
}
