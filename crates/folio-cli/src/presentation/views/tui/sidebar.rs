use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::inline_spans;
use crate::presentation::formatters::link_glyph;
use crate::presentation::view_models::SidebarViewModel;

pub struct SidebarView<'a> {
    model: &'a SidebarViewModel,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a SidebarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for SidebarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.model.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for link in &self.model.links {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", link_glyph(link.kind))),
                Span::styled(link.label.clone(), Style::default().fg(Color::Blue)),
                Span::styled(
                    format!("  {}", link.href),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }

        for paragraph in &self.model.bio {
            lines.push(Line::default());
            lines.push(Line::from(inline_spans(paragraph)));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
