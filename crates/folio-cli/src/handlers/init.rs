use anyhow::{bail, Context, Result};
use folio_types::{DetailItem, LinkKind, ProfileLink};
use std::path::Path;

use crate::config::Config;
use crate::presentation::renderers::ConsoleRenderer;

const EMPTY_DATASET: &str = "[]\n";

pub fn handle(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            config_path.display()
        );
    }

    let config = starter_config();
    config
        .save_to(config_path)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    let paths = config.data_paths(config_path);
    let mut created = Vec::new();
    for path in [&paths.skills, &paths.jobs, &paths.education] {
        if path.exists() && !force {
            tracing::info!(path = %path.display(), "dataset exists, leaving it alone");
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, EMPTY_DATASET)
            .with_context(|| format!("failed to write {}", path.display()))?;
        created.push(path.clone());
    }

    ConsoleRenderer::new().render_init_report(config_path, &created);
    Ok(())
}

fn starter_config() -> Config {
    let mut config = Config::default();
    config.profile.name = "Your Name".to_string();
    config.profile.photo_alt = Some("Headshot".to_string());
    config.profile.links = vec![
        ProfileLink {
            label: "GitHub".to_string(),
            url: "https://github.com/".to_string(),
            kind: LinkKind::Github,
        },
        ProfileLink {
            label: "Email".to_string(),
            url: "you@example.com".to_string(),
            kind: LinkKind::Email,
        },
    ];
    config.profile.bio = vec![DetailItem::from("A short paragraph about yourself.")];
    config
}
