use anyhow::{bail, Result};
use folio_engine::Carousel;
use is_terminal::IsTerminal;
use std::path::Path;

use super::load_dashboard;
use crate::config::Config;
use crate::presentation::renderers::TuiRenderer;
use crate::types::SectionArg;

pub fn handle(config: &Config, config_path: &Path, section: Option<SectionArg>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("`folio view` needs an interactive terminal; use `folio show` instead");
    }

    let mut dashboard = load_dashboard(config, config_path)?;
    if let Some(section) = section {
        dashboard.carousel = Carousel::with_section(section.into());
    }
    TuiRenderer::new(dashboard, config.site_title()).run()
}
