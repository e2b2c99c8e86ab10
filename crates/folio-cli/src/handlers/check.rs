use anyhow::{bail, Result};
use folio_engine::{validate, Datasets, Severity};
use folio_types::{EducationPeriod, Job, SkillArea};
use std::path::Path;

use crate::config::Config;
use crate::loader::{block_on, load_dataset};
use crate::presentation::renderers::ConsoleRenderer;

/// Unlike the renderers, a dataset that cannot be loaded is a failure here
pub fn handle(config: &Config, config_path: &Path) -> Result<()> {
    let paths = config.data_paths(config_path);
    let (skills, jobs, education) = block_on(async {
        tokio::join!(
            load_dataset::<SkillArea>(&paths.skills),
            load_dataset::<Job>(&paths.jobs),
            load_dataset::<EducationPeriod>(&paths.education),
        )
    })?;

    let mut load_errors = Vec::new();
    let data = Datasets {
        skills: collect(skills, &mut load_errors),
        jobs: collect(jobs, &mut load_errors),
        education: collect(education, &mut load_errors),
    };
    let issues = validate(&data);

    ConsoleRenderer::new().render_check(&load_errors, &issues);

    let errors = load_errors.len()
        + issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count();
    if errors > 0 {
        bail!("check failed with {} error(s)", errors);
    }
    Ok(())
}

fn collect<T>(result: Result<Vec<T>>, errors: &mut Vec<String>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        errors.push(format!("{:#}", err));
        Vec::new()
    })
}
