//! Static site renderer
//!
//! Writes one HTML document per reachable dashboard state. Navigation links
//! in each page point at the page of the state a click would produce, so the
//! site behaves like the live dashboard without any script.

use anyhow::{Context, Result};
use folio_engine::{Carousel, Dashboard, Section};
use std::path::{Path, PathBuf};

use crate::presentation::presenters::present_dashboard;
use crate::presentation::views::html::{entry_page, section_page, HtmlPage, INDEX_PAGE};

pub struct SiteRenderer<'a> {
    out_dir: &'a Path,
    title: &'a str,
}

impl<'a> SiteRenderer<'a> {
    pub fn new(out_dir: &'a Path, title: &'a str) -> Self {
        Self { out_dir, title }
    }

    /// Write every page and return their paths in write order
    pub fn render(&self, base: &Dashboard) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(self.out_dir)
            .with_context(|| format!("failed to create {}", self.out_dir.display()))?;

        let mut pages = vec![self.write_page(INDEX_PAGE, base)?];

        for section in Section::ALL {
            let mut state = base.clone();
            state.carousel = Carousel::with_section(section);
            pages.push(self.write_page(&section_page(section), &state)?);

            for index in 0..state.entry_count(section) {
                let mut selected = state.clone();
                selected.select_in_active(index);
                pages.push(self.write_page(&entry_page(section, index), &selected)?);
            }
        }

        tracing::info!(
            pages = pages.len(),
            out = %self.out_dir.display(),
            "site written"
        );
        Ok(pages)
    }

    fn write_page(&self, name: &str, state: &Dashboard) -> Result<PathBuf> {
        let view_model = present_dashboard(state, self.title);
        let path = self.out_dir.join(name);
        std::fs::write(&path, HtmlPage(&view_model).to_string())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(page = name, "page written");
        Ok(path)
    }
}
