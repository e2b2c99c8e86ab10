use folio_engine::Section;
use folio_types::{format_months, format_range};
use std::fmt;

use super::links::entry_page;
use super::rich_text::BulletsHtml;
use crate::presentation::formatters::{icon_glyph, Escaped};
use crate::presentation::view_models::{
    EducationViewModel, EmploymentViewModel, PeriodViewModel, PublicationViewModel,
    SkillsViewModel,
};

fn placeholder(f: &mut fmt::Formatter<'_>, heading: &str, message: &str) -> fmt::Result {
    writeln!(f, r#"<section class="placeholder">"#)?;
    writeln!(f, "<h2>{}</h2>", Escaped(heading))?;
    writeln!(f, "<p>{}</p>", Escaped(message))?;
    writeln!(f, "</section>")
}

fn card_class(selected: bool) -> &'static str {
    if selected { "card selected" } else { "card" }
}

pub struct SkillsHtml<'a>(pub &'a SkillsViewModel);

impl fmt::Display for SkillsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        if vm.areas.is_empty() {
            return placeholder(f, "Skills", "No skills provided.");
        }

        writeln!(f, r#"<div class="two-pane">"#)?;
        writeln!(f, r#"<ul class="cards">"#)?;
        for (i, area) in vm.areas.iter().enumerate() {
            writeln!(
                f,
                r#"<li class="{}"><a href="{}"><span class="icon">{}</span><div class="card-body"><div class="card-title">{}</div><p class="card-sub">{}</p></div></a></li>"#,
                card_class(area.selected),
                entry_page(Section::Skills, i),
                Escaped(icon_glyph(area.icon)),
                Escaped(&area.name),
                Escaped(&area.skills.join(" • "))
            )?;
        }
        writeln!(f, "</ul>")?;

        writeln!(f, r#"<div class="detail">"#)?;
        if let Some(area) = vm.selected_area() {
            writeln!(
                f,
                r#"<div class="detail-head"><span class="icon large">{}</span><h3>{}</h3></div>"#,
                Escaped(icon_glyph(area.icon)),
                Escaped(&area.name)
            )?;
            write!(f, "{}", BulletsHtml(&area.details))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

pub struct EmploymentHtml<'a>(pub &'a EmploymentViewModel);

impl fmt::Display for EmploymentHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        if vm.jobs.is_empty() {
            return placeholder(f, "Employment History", "No employment history provided.");
        }

        writeln!(f, r#"<div class="two-pane">"#)?;
        writeln!(f, r#"<ul class="cards scroll">"#)?;
        for (i, job) in vm.jobs.iter().enumerate() {
            write!(
                f,
                r#"<li class="{}"><a href="{}">"#,
                card_class(job.selected),
                entry_page(Section::Employment, i)
            )?;
            if let Some(logo) = &job.logo_url {
                write!(
                    f,
                    r#"<img class="logo" src="{}" alt="{} logo">"#,
                    Escaped(logo),
                    Escaped(&job.company)
                )?;
            }
            writeln!(
                f,
                r#"<div class="card-body"><div class="card-title">{}</div><div class="card-sub">{}</div><div class="card-dates">{}</div></div></a></li>"#,
                Escaped(&job.role),
                Escaped(&job.company),
                format_range(job.start_date, job.end_date)
            )?;
        }
        writeln!(f, "</ul>")?;

        writeln!(f, r#"<div class="detail">"#)?;
        if let Some(job) = vm.selected_job() {
            writeln!(f, r#"<div class="detail-head">"#)?;
            if let Some(logo) = &job.logo_url {
                writeln!(
                    f,
                    r#"<img class="logo large" src="{}" alt="{} logo">"#,
                    Escaped(logo),
                    Escaped(&job.company)
                )?;
            }
            writeln!(f, "<div>")?;
            writeln!(f, "<h3>{}</h3>", Escaped(&job.role))?;
            match &job.company_url {
                Some(url) => writeln!(
                    f,
                    r#"<p class="company"><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></p>"#,
                    Escaped(url),
                    Escaped(&job.company)
                )?,
                None => writeln!(f, r#"<p class="company">{}</p>"#, Escaped(&job.company))?,
            }
            writeln!(
                f,
                r#"<p class="dates">{} · {}</p>"#,
                format_range(job.start_date, job.end_date),
                format_months(job.duration_months)
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;

            if let Some(description) = &job.description {
                writeln!(f, r#"<p class="description">{}</p>"#, Escaped(description))?;
            }
            write!(f, "{}", BulletsHtml(&job.achievements))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

pub struct EducationHtml<'a>(pub &'a EducationViewModel);

impl fmt::Display for EducationHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        if vm.periods.is_empty() {
            return placeholder(f, "My Education Journey", "No education history provided.");
        }

        writeln!(f, r#"<div class="timeline">"#)?;

        writeln!(f, r#"<div class="ticks">"#)?;
        for tick in &vm.ticks {
            writeln!(
                f,
                r#"<div class="tick" style="left: {:.4}%"><time datetime="{}-01-01">{}</time><div class="tick-mark"></div></div>"#,
                tick.position, tick.year, tick.year
            )?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, r#"<div class="axis"></div>"#)?;

        writeln!(f, r#"<div class="segments">"#)?;
        for (i, period) in vm.periods.iter().enumerate() {
            write!(
                f,
                r#"<a class="{}" href="{}" style="left: {:.4}%; width: {:.4}%">"#,
                if period.selected { "segment selected" } else { "segment" },
                entry_page(Section::Education, i),
                period.segment.position,
                period.segment.width
            )?;
            if let Some(logo) = &period.logo_url {
                write!(
                    f,
                    r#"<img class="logo small" src="{}" alt="{} logo">"#,
                    Escaped(logo),
                    Escaped(&period.institution)
                )?;
            }
            writeln!(
                f,
                r#"<div class="segment-body"><div class="segment-label">{}</div><div class="segment-sub">{}</div></div></a>"#,
                Escaped(&period.label),
                Escaped(&period.degree)
            )?;
        }
        writeln!(f, "</div>")?;

        if let Some(period) = vm.selected_period() {
            write!(f, "{}", PeriodDetailHtml(period))?;
        }

        writeln!(f, "</div>")
    }
}

struct PeriodDetailHtml<'a>(&'a PeriodViewModel);

impl fmt::Display for PeriodDetailHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = self.0;
        writeln!(f, r#"<div class="detail period">"#)?;
        if let Some(logo) = &period.logo_url {
            writeln!(
                f,
                r#"<img class="logo large" src="{}" alt="{} logo">"#,
                Escaped(logo),
                Escaped(&period.institution)
            )?;
        }
        writeln!(f, r#"<div class="period-body">"#)?;
        writeln!(f, "<h3>{}</h3>", Escaped(&period.institution))?;
        writeln!(f, "<p>{}</p>", Escaped(&period.degree))?;
        writeln!(
            f,
            r#"<p class="dates">{}</p>"#,
            format_range(period.start_date, period.end_date)
        )?;

        if let Some(grade) = &period.grade {
            writeln!(f, r#"<h4 class="grade">🏅 {}</h4>"#, Escaped(grade))?;
        }
        if let Some(description) = &period.description {
            writeln!(f, r#"<p class="description">{}</p>"#, Escaped(description))?;
        }

        if !period.highlights.is_empty() {
            writeln!(f, "<h4>✨ Key Points</h4>")?;
            write!(f, "{}", BulletsHtml(&period.highlights))?;
        }

        if !period.publications.is_empty() {
            writeln!(f, "<h4>📖 Publications</h4>")?;
            writeln!(f, r#"<div class="publications">"#)?;
            for publication in &period.publications {
                write!(f, "{}", PublicationHtml(publication))?;
            }
            writeln!(f, "</div>")?;
        }

        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

struct PublicationHtml<'a>(&'a PublicationViewModel);

impl fmt::Display for PublicationHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let publication = self.0;
        writeln!(f, r#"<div class="publication">"#)?;
        match &publication.url {
            Some(url) => writeln!(
                f,
                r#"<h5><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h5>"#,
                Escaped(url),
                Escaped(&publication.title)
            )?,
            None => writeln!(f, "<h5>{}</h5>", Escaped(&publication.title))?,
        }

        match &publication.publisher {
            Some(publisher) => writeln!(
                f,
                r#"<p class="pub-meta">{} · {}</p>"#,
                Escaped(publisher),
                publication.date.label()
            )?,
            None => writeln!(f, r#"<p class="pub-meta">{}</p>"#, publication.date.label())?,
        }

        if let Some(text) = &publication.abstract_text {
            let affordance = if publication.read_more {
                "Read abstract..."
            } else {
                ""
            };
            writeln!(
                f,
                r#"<details class="abstract"><summary><span class="read-more">{}</span></summary><p>{}</p></details>"#,
                affordance,
                Escaped(text)
            )?;
        }

        writeln!(f, "</div>")
    }
}
