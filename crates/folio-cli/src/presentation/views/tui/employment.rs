use folio_types::{format_months, format_range};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{bullet_lines, detail_paragraph, placeholder, selected_style};
use crate::presentation::view_models::EmploymentViewModel;

pub struct EmploymentView<'a> {
    model: &'a EmploymentViewModel,
}

impl<'a> EmploymentView<'a> {
    pub fn new(model: &'a EmploymentViewModel) -> Self {
        Self { model }
    }

    pub fn is_empty(&self) -> bool {
        self.model.jobs.is_empty()
    }

    pub fn build_placeholder(&self) -> Paragraph<'static> {
        placeholder("Employment History", "No employment history provided.")
    }

    pub fn build_list(&self) -> List<'static> {
        let items: Vec<ListItem<'static>> = self
            .model
            .jobs
            .iter()
            .map(|job| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        job.role.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("  {}", job.company)),
                    Line::from(Span::styled(
                        format!("  {}", format_range(job.start_date, job.end_date)),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ])
            })
            .collect();

        List::new(items)
            .block(Block::default().title("Jobs").borders(Borders::ALL))
            .highlight_style(selected_style())
    }

    pub fn build_detail(&self) -> Paragraph<'static> {
        let Some(job) = self.model.selected_job() else {
            return detail_paragraph(String::new(), Vec::new());
        };

        let company = match &job.company_url {
            Some(_) => Span::styled(
                job.company.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            None => Span::raw(job.company.clone()),
        };

        let mut lines = vec![
            Line::from(company),
            Line::from(Span::styled(
                format!(
                    "{} · {}",
                    format_range(job.start_date, job.end_date),
                    format_months(job.duration_months)
                ),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        if let Some(description) = &job.description {
            lines.push(Line::default());
            lines.push(Line::from(description.clone()));
        }
        if !job.achievements.is_empty() {
            lines.push(Line::default());
            lines.extend(bullet_lines(&job.achievements));
        }

        detail_paragraph(job.role.clone(), lines)
    }
}
