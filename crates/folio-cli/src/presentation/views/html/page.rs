use std::fmt;

use super::links::section_page;
use super::sections::{EducationHtml, EmploymentHtml, SkillsHtml};
use super::sidebar::SidebarHtml;
use crate::presentation::formatters::Escaped;
use crate::presentation::view_models::{DashboardViewModel, SectionViewModel};

const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; background: #f3f4f6; }
a { color: #2563eb; }
.dashboard { display: flex; }
.sidebar { position: fixed; width: 25%; height: 100vh; overflow-y: auto; padding: 1.5rem; background: #eff6ff; text-align: center; }
.sidebar h1 { font-size: 1.6rem; margin: 0 0 .5rem; }
.social { display: flex; gap: .5rem; justify-content: center; margin: 1rem 0 1.5rem; font-size: .9rem; }
.social a { text-decoration: none; }
.photo img { width: 100%; border-radius: .5rem; box-shadow: 0 20px 40px rgba(0,0,0,.25); margin-bottom: 1.5rem; }
.bio { text-align: justify; color: #4b5563; line-height: 1.6; }
.content { flex: 1; margin-left: 25%; padding: 2rem; min-height: 100vh; }
.tabs { display: flex; justify-content: center; align-items: center; gap: 2rem; margin-bottom: 2rem; }
.tabs h2 { margin: 0; font-size: 1.25rem; font-weight: normal; }
.tabs h2 a { color: #9ca3af; text-decoration: none; }
.tabs h2.active { font-size: 1.9rem; font-weight: bold; }
.tabs h2.active a { color: #2563eb; }
.two-pane { display: flex; gap: 2rem; }
.cards { list-style: none; margin: 0; padding: 0; width: 20rem; flex-shrink: 0; }
.cards.scroll { max-height: 80vh; overflow-y: auto; }
.card { border-radius: .5rem; background: #374151; margin-bottom: 1rem; }
.card:hover { background: #3b82f6; }
.card.selected { background: #2563eb; outline: 2px solid #93c5fd; }
.card a { display: flex; gap: .75rem; align-items: center; padding: 1rem; color: #fff; text-decoration: none; }
.card-title { font-weight: bold; font-size: .9rem; }
.card-sub, .card-dates { font-size: .8rem; color: #e5e7eb; margin: 0; }
.detail { flex: 1; background: #f9fafb; border-radius: .5rem; padding: 1.5rem; box-shadow: inset 15px 15px 115px -15px rgba(0,100,200,.3); }
.detail-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
.detail-head h3 { margin: 0; font-size: 1.5rem; }
.icon { font-size: 1.25rem; }
.icon.large { font-size: 2rem; color: #2563eb; }
.logo { width: 2.5rem; height: 2.5rem; border-radius: 50%; }
.logo.large { width: 4rem; height: 4rem; }
.logo.small { width: 2rem; height: 2rem; margin-right: .75rem; }
.company { font-size: 1.1rem; color: #4b5563; margin: .25rem 0; }
.dates { font-size: .9rem; color: #6b7280; margin: .25rem 0; }
.description { text-align: justify; line-height: 1.6; color: #4b5563; }
.bullets { margin: 0 0 0 1rem; padding-left: 1rem; }
.bullets li { margin-bottom: .5rem; color: #374151; }
.timeline { position: relative; padding: 0 1rem 1rem; }
.ticks { position: relative; height: 1.5rem; }
.tick { position: absolute; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; font-size: .75rem; color: #4b5563; }
.tick-mark { width: 1px; height: .75rem; background: #9ca3af; }
.axis { height: .5rem; background: #e5e7eb; border-radius: 9999px; }
.segments { position: relative; height: 5rem; margin-top: 1.5rem; }
.segment { position: absolute; height: 3.5rem; display: flex; align-items: center; padding: .5rem; border-radius: 9999px; background: #4b5563; color: #fff; text-decoration: none; overflow: hidden; }
.segment.selected { background: #3b82f6; }
.segment-label { font-weight: bold; font-size: .85rem; }
.segment-sub { font-size: .75rem; color: #e5e7eb; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.period { display: flex; align-items: flex-start; gap: 1.5rem; margin-top: 1rem; background: #fff; }
.period-body { flex: 1; }
.publication { background: #f9fafb; padding: 1rem; border-radius: .5rem; border: 1px solid #e5e7eb; margin-bottom: 1rem; }
.publication h5 { margin: 0; font-size: 1rem; }
.pub-meta { font-size: .85rem; color: #4b5563; margin: .25rem 0; }
.abstract summary { cursor: pointer; }
.read-more { color: #2563eb; margin-left: .25rem; }
.placeholder { border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1rem; background: #fff; text-align: center; color: #6b7280; }
"#;

/// Complete document for one dashboard state
pub struct HtmlPage<'a>(pub &'a DashboardViewModel);

impl fmt::Display for HtmlPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(f, "<title>{}</title>", Escaped(&vm.title))?;
        writeln!(f, "<style>{}</style>", STYLESHEET)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<div class="dashboard">"#)?;

        write!(f, "{}", SidebarHtml(&vm.sidebar))?;

        writeln!(f, r#"<main class="content">"#)?;
        writeln!(f, r#"<nav class="tabs">"#)?;
        for tab in &vm.tabs {
            writeln!(
                f,
                r#"<h2 class="{}"><a href="{}">{}</a></h2>"#,
                if tab.active { "tab active" } else { "tab" },
                section_page(tab.section),
                Escaped(&tab.title)
            )?;
        }
        writeln!(f, "</nav>")?;

        writeln!(
            f,
            r#"<section class="section-{}">"#,
            vm.content.section().slug()
        )?;
        match &vm.content {
            SectionViewModel::Skills(skills) => write!(f, "{}", SkillsHtml(skills))?,
            SectionViewModel::Employment(jobs) => write!(f, "{}", EmploymentHtml(jobs))?,
            SectionViewModel::Education(education) => {
                write!(f, "{}", EducationHtml(education))?
            }
        }
        writeln!(f, "</section>")?;

        writeln!(f, "</main>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
