use folio_engine::SkillSection;

use super::present_details;
use crate::presentation::view_models::{SkillAreaViewModel, SkillsViewModel};

pub fn present_skills(section: &SkillSection) -> SkillsViewModel {
    let selection = section.selection();
    let areas = section
        .areas()
        .iter()
        .enumerate()
        .map(|(i, area)| SkillAreaViewModel {
            name: area.name.clone(),
            icon: area.icon_name,
            skills: area.skills.clone(),
            details: present_details(&area.more_details),
            selected: selection.is_selected(i),
        })
        .collect();

    SkillsViewModel {
        areas,
        selected: selection.selected(),
    }
}
