use folio_types::format_range;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{bullet_lines, detail_paragraph, placeholder};
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{EducationViewModel, PublicationViewModel};

pub struct EducationView<'a> {
    model: &'a EducationViewModel,
}

/// Column for a percentage position on an axis `columns` wide
fn column(percent: f64, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    ((percent / 100.0) * columns as f64).round().clamp(0.0, (columns - 1) as f64) as usize
}

impl<'a> EducationView<'a> {
    pub fn new(model: &'a EducationViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.periods.is_empty()
    }

    pub fn build_placeholder(&self) -> Paragraph<'static> {
        placeholder("My Education Journey", "No education history provided.")
    }

    /// Rows needed by `build_timeline`, borders included
    pub fn timeline_height(&self) -> u16 {
        (self.model.periods.len() + 4) as u16
    }

    /// Tick row, axis row and one bar per period, scaled to `width` columns
    pub fn build_timeline(&self, width: u16) -> Paragraph<'static> {
        let columns = width.saturating_sub(2) as usize;

        let mut tick_row = vec![' '; columns];
        for tick in &self.model.ticks {
            let start = column(tick.position, columns);
            for (offset, ch) in tick.year.to_string().chars().enumerate() {
                if let Some(cell) = tick_row.get_mut(start + offset) {
                    *cell = ch;
                }
            }
        }

        let mut lines = vec![
            Line::from(Span::styled(
                tick_row.into_iter().collect::<String>(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "─".repeat(columns),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        for period in &self.model.periods {
            let start = column(period.segment.position, columns);
            let bar_len = ((period.segment.width / 100.0) * columns as f64).round() as usize;
            let bar_len = bar_len.clamp(1, columns.saturating_sub(start).max(1));

            let label = truncate(&period.label, bar_len);
            let padding = bar_len.saturating_sub(label.chars().count());
            let style = if period.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            };

            lines.push(Line::from(vec![
                Span::raw(" ".repeat(start)),
                Span::styled(format!("{}{}", label, " ".repeat(padding)), style),
            ]));
        }

        Paragraph::new(lines).block(
            Block::default()
                .title("Academic Background")
                .borders(Borders::ALL),
        )
    }

    /// Detail panel; abstracts are listed only when `expand_abstracts` is set
    pub fn build_detail(&self, expand_abstracts: bool) -> Paragraph<'static> {
        let Some(period) = self.model.selected_period() else {
            return detail_paragraph(String::new(), Vec::new());
        };

        let mut lines = vec![
            Line::from(period.degree.clone()),
            Line::from(Span::styled(
                format_range(period.start_date, period.end_date),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        if let Some(grade) = &period.grade {
            lines.push(Line::from(format!("🏅 {}", grade)));
        }
        if let Some(description) = &period.description {
            lines.push(Line::default());
            lines.push(Line::from(description.clone()));
        }
        if !period.highlights.is_empty() {
            lines.push(Line::default());
            lines.push(heading("Key Points"));
            lines.extend(bullet_lines(&period.highlights));
        }
        if !period.publications.is_empty() {
            lines.push(Line::default());
            lines.push(heading("Publications"));
            for publication in &period.publications {
                lines.extend(publication_lines(publication, expand_abstracts));
            }
        }

        detail_paragraph(period.institution.clone(), lines)
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn publication_lines(publication: &PublicationViewModel, expanded: bool) -> Vec<Line<'static>> {
    let title_style = match publication.url {
        Some(_) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        None => Style::default(),
    };
    let meta = match &publication.publisher {
        Some(publisher) => format!("  {} · {}", publisher, publication.date.label()),
        None => format!("  {}", publication.date.label()),
    };

    let mut lines = vec![
        Line::from(Span::styled(format!("• {}", publication.title), title_style)),
        Line::from(Span::styled(meta, Style::default().add_modifier(Modifier::DIM))),
    ];
    match (&publication.abstract_text, expanded) {
        (Some(text), true) => lines.push(Line::from(format!("  {}", text))),
        (Some(_), false) if publication.read_more => lines.push(Line::from(Span::styled(
            "  Read abstract... (a)",
            Style::default().fg(Color::Blue),
        ))),
        _ => {}
    }
    lines
}
