//! One-shot asynchronous dataset loading.
//!
//! Each dataset is read once. A missing or malformed file degrades to an
//! empty collection so the rest of the dashboard still renders.

use anyhow::{Context, Result};
use folio_engine::Datasets;
use folio_types::parse_dataset;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::config::DataPaths;

/// Read and parse one dataset
pub async fn load_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items = parse_dataset(&content).with_context(|| format!("invalid dataset {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = items.len(), "dataset loaded");
    Ok(items)
}

async fn load_or_empty<T: DeserializeOwned>(name: &str, path: &Path) -> Vec<T> {
    match load_dataset(path).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(dataset = name, error = %format!("{:#}", err), "dataset unavailable, showing it empty");
            Vec::new()
        }
    }
}

/// Load all three datasets concurrently
pub async fn load_datasets(paths: &DataPaths) -> Datasets {
    let (skills, jobs, education) = tokio::join!(
        load_or_empty("skills", &paths.skills),
        load_or_empty("jobs", &paths.jobs),
        load_or_empty("education", &paths.education),
    );
    Datasets {
        skills,
        jobs,
        education,
    }
}

/// Run a loader future to completion on a single-threaded runtime
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Job;
    use tempfile::TempDir;

    #[test]
    fn test_missing_datasets_load_empty() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::default().resolve(dir.path());
        let data = block_on(load_datasets(&paths)).unwrap();
        assert!(data.skills.is_empty());
        assert!(data.jobs.is_empty());
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_malformed_dataset_is_error_but_others_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("jobs.json"), "{ not json").unwrap();
        std::fs::write(
            dir.path().join("skills.json"),
            r#"[{"name": "Code", "iconName": "code"}]"#,
        )
        .unwrap();

        let paths = DataPaths {
            skills: dir.path().join("skills.json"),
            jobs: dir.path().join("jobs.json"),
            education: dir.path().join("education.json"),
        };

        let err = block_on(load_dataset::<Job>(&paths.jobs)).unwrap().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid dataset"));

        let data = block_on(load_datasets(&paths)).unwrap();
        assert_eq!(data.skills.len(), 1);
        assert!(data.jobs.is_empty());
    }
}
