//! TUI View Components
//!
//! Thin wrappers around view models that build Ratatui widgets.
//!
//! ## Design Principles:
//! - Views take a reference to a ViewModel (no ownership)
//! - No selection logic; the selected entry comes from the ViewModel
//! - Rich-text links map to underlined spans

pub mod components;
pub mod education;
pub mod sidebar;
pub mod skills;
pub mod employment;
pub mod tabs;

pub use education::EducationView;
pub use employment::EmploymentView;
pub use sidebar::SidebarView;
pub use skills::SkillsView;
pub use tabs::TabsView;

use folio_engine::Inline;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Inline runs as spans; links are underlined
pub(crate) fn inline_spans(runs: &[Inline]) -> Vec<Span<'static>> {
    runs.iter()
        .map(|run| match run {
            Inline::Text { text } => Span::raw(text.clone()),
            Inline::Link { text, .. } => Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

/// Bulleted rich-text lines
pub(crate) fn bullet_lines(items: &[Vec<Inline>]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|runs| {
            let mut spans = vec![Span::raw("• ")];
            spans.extend(inline_spans(runs));
            Line::from(spans)
        })
        .collect()
}

pub(crate) fn placeholder(title: &str, message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    )))
    .block(Block::default().title(title.to_string()).borders(Borders::ALL))
}

pub(crate) fn selected_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn detail_paragraph(title: String, lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false })
}
