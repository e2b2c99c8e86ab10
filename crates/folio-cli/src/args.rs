use crate::types::{LogLevel, OutputFormat, SectionArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render a personal portfolio from JSON datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "folio.toml", global = true)]
    pub config: PathBuf,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter folio.toml and empty datasets
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Write the static site: one page per tab and list selection
    Build {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },

    /// Browse the dashboard in the terminal
    View {
        #[arg(long)]
        section: Option<SectionArg>,
    },

    /// Print one section
    Show {
        section: SectionArg,

        #[arg(long, help = "Entry to show in the detail panel (0-based)")]
        select: Option<usize>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Validate folio.toml and the datasets it points to
    Check,
}
