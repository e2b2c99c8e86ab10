pub mod build;
pub mod check;
pub mod init;
pub mod show;
pub mod view;

use anyhow::Result;
use folio_engine::Dashboard;
use std::path::Path;

use crate::config::Config;
use crate::loader::{block_on, load_datasets};

/// Load the datasets named in `config` and build the default dashboard state
pub(crate) fn load_dashboard(config: &Config, config_path: &Path) -> Result<Dashboard> {
    let paths = config.data_paths(config_path);
    tracing::debug!(
        skills = %paths.skills.display(),
        jobs = %paths.jobs.display(),
        education = %paths.education.display(),
        "dataset paths"
    );
    let data = block_on(load_datasets(&paths))?;
    Ok(Dashboard::new(config.profile.clone(), data))
}
