use anyhow::{bail, Result};
use folio_engine::Section;
use std::path::Path;

use super::load_dashboard;
use crate::config::Config;
use crate::presentation::presenters::present_section;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::{OutputFormat, SectionArg};

pub fn handle(
    config: &Config,
    config_path: &Path,
    section: SectionArg,
    select: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut dashboard = load_dashboard(config, config_path)?;
    let section = Section::from(section);

    if let Some(index) = select {
        let selection = dashboard.selection_mut(section);
        if !selection.select(index) {
            bail!(
                "--select {} is out of range: {} has {} entries",
                index,
                section,
                selection.len()
            );
        }
    }

    let view_model = present_section(&dashboard, section);
    ConsoleRenderer::new().render_section(&view_model, format)
}
