use folio_types::SkillArea;

use crate::selection::Selection;

/// Skill areas with the area shown in the detail panel
#[derive(Debug, Clone)]
pub struct SkillSection {
    areas: Vec<SkillArea>,
    selection: Selection,
}

impl SkillSection {
    pub fn new(areas: Vec<SkillArea>) -> Self {
        let selection = Selection::new(0, areas.len());
        Self { areas, selection }
    }

    pub fn areas(&self) -> &[SkillArea] {
        &self.areas
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
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

    pub fn selected(&self) -> Option<&SkillArea> {
        self.selection.selected().and_then(|i| self.areas.get(i))
    }
}
