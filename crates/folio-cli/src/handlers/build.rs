use anyhow::Result;
use std::path::Path;

use super::load_dashboard;
use crate::config::Config;
use crate::presentation::renderers::{ConsoleRenderer, SiteRenderer};

pub fn handle(config: &Config, config_path: &Path, out: &Path) -> Result<()> {
    let dashboard = load_dashboard(config, config_path)?;
    let pages = SiteRenderer::new(out, config.site_title()).render(&dashboard)?;
    ConsoleRenderer::new().render_build_report(out, &pages);
    Ok(())
}
