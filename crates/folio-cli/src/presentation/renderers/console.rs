use anyhow::Result;
use folio_engine::{Issue, Severity};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use crate::presentation::view_models::SectionViewModel;
use crate::presentation::views::console::SectionText;
use crate::types::OutputFormat;

/// Writes command results to stdout
pub struct ConsoleRenderer {
    color: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    /// JSON always carries the full view model; plain text is for reading
    pub fn render_section(&self, section: &SectionViewModel, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(section)?),
            OutputFormat::Plain => print!("{}", SectionText::new(section, self.color)),
        }
        Ok(())
    }

    pub fn render_build_report(&self, out_dir: &Path, pages: &[PathBuf]) {
        println!("Wrote {} pages to {}", pages.len(), out_dir.display());
        if let Some(index) = pages.first() {
            println!("Open {}", index.display());
        }
    }

    pub fn render_init_report(&self, config_path: &Path, datasets: &[PathBuf]) {
        println!("Created {}", config_path.display());
        for path in datasets {
            println!("Created {}", path.display());
        }
        println!("\nNext steps:");
        println!("  edit {} to fill in your profile", config_path.display());
        println!("  folio build                       # write the static site");
        println!("  folio view                        # browse in the terminal");
    }

    /// Load failures first, then validation issues
    pub fn render_check(&self, load_errors: &[String], issues: &[Issue]) {
        if load_errors.is_empty() && issues.is_empty() {
            let ok = "✓ config and datasets are valid";
            if self.color {
                println!("{}", ok.green());
            } else {
                println!("{}", ok);
            }
            return;
        }

        for error in load_errors {
            println!("{} {}", self.label(Severity::Error), error);
        }
        for issue in issues {
            println!("{} {}", self.label(issue.severity), issue);
        }
    }

    fn label(&self, severity: Severity) -> String {
        match (severity, self.color) {
            (Severity::Error, true) => "error:".red().bold().to_string(),
            (Severity::Warning, true) => "warning:".yellow().bold().to_string(),
            (Severity::Error, false) => "error:".to_string(),
            (Severity::Warning, false) => "warning:".to_string(),
        }
    }

    pub fn render_guidance(&self, config_path: &Path, config_exists: bool) {
        println!("folio - personal portfolio dashboard\n");

        if !config_exists {
            println!("No {} found. Get started:", config_path.display());
            println!("  folio init\n");
        } else {
            println!("Quick commands:");
            println!("  folio build --out dist            # Write the static site");
            println!("  folio view                        # Browse in the terminal");
            println!("  folio show employment --select 0  # Print one section");
            println!("  folio check                       # Validate datasets\n");
        }

        println!("For more commands:");
        println!("  folio --help");
    }
}
