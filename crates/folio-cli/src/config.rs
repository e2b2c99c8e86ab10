use anyhow::{Context, Result};
use folio_types::Profile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the three datasets. Relative paths resolve against the
/// directory holding folio.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub skills: PathBuf,
    pub jobs: PathBuf,
    pub education: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            skills: PathBuf::from("data/my-skills.json"),
            jobs: PathBuf::from("data/my-jobs.json"),
            education: PathBuf::from("data/my-education-history.json"),
        }
    }
}

impl DataPaths {
    pub fn resolve(&self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Self {
            skills: join(&self.skills),
            jobs: join(&self.jobs),
            education: join(&self.education),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title; falls back to the profile name
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub site: SiteConfig,
    pub data: DataPaths,
}

impl Config {
    /// Load from `path`; a missing file yields the default config
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Dataset paths made absolute relative to the config file location
    pub fn data_paths(&self, config_path: &Path) -> DataPaths {
        let base = config_path.parent().unwrap_or_else(|| Path::new(""));
        self.data.resolve(base)
    }

    pub fn site_title(&self) -> &str {
        match self.site.title.as_deref() {
            Some(title) => title,
            None if !self.profile.name.is_empty() => &self.profile.name,
            None => "Portfolio",
        }
    }
}
