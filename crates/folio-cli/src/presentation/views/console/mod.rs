//! Plain-text views for `folio show`.
//!
//! Layout mirrors the dashboard: the entry list first (selected entry
//! marked with `>`), then the detail panel of the selected entry.

use folio_types::{format_months, format_range};
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{icon_glyph, inline_plain};
use crate::presentation::view_models::{
    EducationViewModel, EmploymentViewModel, SectionViewModel, SkillsViewModel,
};

pub struct SectionText<'a> {
    data: &'a SectionViewModel,
    color: bool,
}

impl<'a> SectionText<'a> {
    pub fn new(data: &'a SectionViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn marker(&self, selected: bool) -> String {
        match (selected, self.color) {
            (true, true) => ">".cyan().bold().to_string(),
            (true, false) => ">".to_string(),
            (false, _) => " ".to_string(),
        }
    }

    fn skills(&self, f: &mut fmt::Formatter<'_>, vm: &SkillsViewModel) -> fmt::Result {
        writeln!(f, "{}", self.heading("Skills"))?;
        if vm.areas.is_empty() {
            return writeln!(f, "No skills provided.");
        }
        for area in &vm.areas {
            writeln!(
                f,
                "{} {} {} ({})",
                self.marker(area.selected),
                icon_glyph(area.icon),
                area.name,
                area.skills.join(" • ")
            )?;
        }
        if let Some(area) = vm.selected_area() {
            writeln!(f)?;
            writeln!(f, "{} {}", icon_glyph(area.icon), self.heading(&area.name))?;
            for detail in &area.details {
                writeln!(f, "  - {}", inline_plain(detail))?;
            }
        }
        Ok(())
    }

    fn employment(&self, f: &mut fmt::Formatter<'_>, vm: &EmploymentViewModel) -> fmt::Result {
        writeln!(f, "{}", self.heading("Employment History"))?;
        if vm.jobs.is_empty() {
            return writeln!(f, "No employment history provided.");
        }
        for job in &vm.jobs {
            writeln!(
                f,
                "{} {} @ {} ({})",
                self.marker(job.selected),
                job.role,
                job.company,
                format_range(job.start_date, job.end_date)
            )?;
        }
        if let Some(job) = vm.selected_job() {
            writeln!(f)?;
            writeln!(f, "{}", self.heading(&job.role))?;
            match &job.company_url {
                Some(url) => writeln!(f, "{} <{}>", job.company, url)?,
                None => writeln!(f, "{}", job.company)?,
            }
            writeln!(
                f,
                "{} · {}",
                format_range(job.start_date, job.end_date),
                format_months(job.duration_months)
            )?;
            if let Some(description) = &job.description {
                writeln!(f)?;
                writeln!(f, "{}", description)?;
            }
            if !job.achievements.is_empty() {
                writeln!(f)?;
                for achievement in &job.achievements {
                    writeln!(f, "  - {}", inline_plain(achievement))?;
                }
            }
        }
        Ok(())
    }

    fn education(&self, f: &mut fmt::Formatter<'_>, vm: &EducationViewModel) -> fmt::Result {
        writeln!(f, "{}", self.heading("Academic Background"))?;
        if vm.periods.is_empty() {
            return writeln!(f, "No education history provided.");
        }
        for period in &vm.periods {
            writeln!(
                f,
                "{} {} - {} ({}) [{:.1}% +{:.1}%]",
                self.marker(period.selected),
                period.label,
                period.degree,
                format_range(period.start_date, period.end_date),
                period.segment.position,
                period.segment.width
            )?;
        }
        let Some(period) = vm.selected_period() else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "{}", self.heading(&period.institution))?;
        writeln!(f, "{}", period.degree)?;
        writeln!(f, "{}", format_range(period.start_date, period.end_date))?;
        if let Some(grade) = &period.grade {
            writeln!(f, "Grade: {}", grade)?;
        }
        if let Some(description) = &period.description {
            writeln!(f, "{}", description)?;
        }
        if !period.highlights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Key Points")?;
            for highlight in &period.highlights {
                writeln!(f, "  - {}", inline_plain(highlight))?;
            }
        }
        if !period.publications.is_empty() {
            writeln!(f)?;
            writeln!(f, "Publications")?;
            for publication in &period.publications {
                match &publication.url {
                    Some(url) => writeln!(f, "  * {} <{}>", publication.title, url)?,
                    None => writeln!(f, "  * {}", publication.title)?,
                }
                match &publication.publisher {
                    Some(publisher) => {
                        writeln!(f, "    {} · {}", publisher, publication.date.label())?
                    }
                    None => writeln!(f, "    {}", publication.date.label())?,
                }
                if let Some(text) = &publication.abstract_text {
                    writeln!(f, "    {}", text)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SectionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            SectionViewModel::Skills(vm) => self.skills(f, vm),
            SectionViewModel::Employment(vm) => self.employment(f, vm),
            SectionViewModel::Education(vm) => self.education(f, vm),
        }
    }
}
