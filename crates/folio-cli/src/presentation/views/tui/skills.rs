use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{bullet_lines, detail_paragraph, placeholder, selected_style};
use crate::presentation::formatters::{icon_glyph, truncate};
use crate::presentation::view_models::SkillsViewModel;

/// Inner width of the 40-column list pane
const LIST_WIDTH: usize = 36;

pub struct SkillsView<'a> {
    model: &'a SkillsViewModel,
}

impl<'a> SkillsView<'a> {
    pub fn new(model: &'a SkillsViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.areas.is_empty()
    }

    pub fn build_placeholder(&self) -> Paragraph<'static> {
        placeholder("Skills", "No skills provided.")
    }

    pub fn build_list(&self) -> List<'static> {
        let items: Vec<ListItem<'static>> = self
            .model
            .areas
            .iter()
            .map(|area| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", icon_glyph(area.icon))),
                        Span::styled(
                            area.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", truncate(&area.skills.join(" • "), LIST_WIDTH)),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ])
            })
            .collect();

        List::new(items)
            .block(Block::default().title("Skill areas").borders(Borders::ALL))
            .highlight_style(selected_style())
    }

    pub fn build_detail(&self) -> Paragraph<'static> {
        let Some(area) = self.model.selected_area() else {
            return detail_paragraph(String::new(), Vec::new());
        };
        detail_paragraph(
            format!("{} {}", icon_glyph(area.icon), area.name),
            bullet_lines(&area.details),
        )
    }
}
