//! Shared fixture for CLI integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)`.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONFIG: &str = r#"
[profile]
name = "Joshua Prettyman, Ph.D."
photo = "/images/headshot.jpg"
photo_alt = "Joshua Prettyman"
cv_document = "/cv_jprettyman.pdf"
bio = [
    "Data scientist & software developer.",
    [{ text = "Creator of " }, { text = "Macaroni", link = "https://www.macaroni.works" }],
]

[[profile.links]]
label = "LinkedIn"
url = "https://www.linkedin.com/in/drprettyman"
kind = "linkedin"

[[profile.links]]
label = "GitHub"
url = "https://github.com/drprettyman"
kind = "github"

[[profile.links]]
label = "Email"
url = "j.prettyman@icloud.com"
kind = "email"

[site]
title = "Joshua Prettyman - CV"
"#;

pub const SKILLS: &str = r#"[
  {
    "name": "Programming",
    "iconName": "code",
    "skills": ["Python", "Rust", "TypeScript"],
    "moreDetails": [
      "Ten years of Python.",
      [{ "text": "Maintainer of " }, { "text": "folio", "link": "https://example.org/folio" }]
    ]
  },
  {
    "name": "Data",
    "iconName": "database",
    "skills": ["PostgreSQL", "BigQuery"],
    "moreDetails": []
  }
]"#;

pub const JOBS: &str = r#"[
  {
    "role": "Data Scientist",
    "company": "Acme Analytics",
    "companyUrl": "https://acme.example",
    "startDate": "2020-01",
    "endDate": "2021-07",
    "description": "Forecasting demand.",
    "achievements": ["Cut forecast error by 30%"]
  },
  {
    "role": "Lead Engineer",
    "company": "Widgets <Ltd>",
    "startDate": "2021-08",
    "endDate": "2023-06",
    "achievements": []
  }
]"#;

pub const EDUCATION: &str = r#"[
  {
    "institution": "University of Nottingham",
    "institutionShort": "UoN",
    "degree": "MSci Mathematics",
    "startDate": "2012-09",
    "endDate": "2016-06",
    "grade": "First Class",
    "highlights": ["Dissertation on stochastic processes"],
    "publications": []
  },
  {
    "institution": "University of Nottingham",
    "degree": "Ph.D. Statistics",
    "startDate": "2016-10",
    "endDate": "2020-01",
    "highlights": [],
    "publications": [
      {
        "title": "Bayesian inference for epidemics",
        "publisher": "Journal of Statistics",
        "date": "2019-05",
        "abstract": "We present a method for fitting stochastic epidemic models to partially observed outbreak data, using data augmentation and reversible jump Markov chain Monte Carlo to handle the missing infection times."
      }
    ]
  }
]"#;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Empty working directory, no config
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Working directory with folio.toml and all three datasets
    pub fn populated() -> Self {
        let fixture = Self::new();
        fixture.write("folio.toml", CONFIG);
        fixture.write("data/my-skills.json", SKILLS);
        fixture.write("data/my-jobs.json", JOBS);
        fixture.write("data/my-education-history.json", EDUCATION);
        fixture
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read output file")
    }

    /// `folio` pointed at this fixture's config
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
        cmd.current_dir(&self.root)
            .arg("--config")
            .arg(self.path("folio.toml"))
            .env_remove("RUST_LOG");
        cmd
    }
}
