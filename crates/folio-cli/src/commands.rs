use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::logging;
use crate::presentation::renderers::ConsoleRenderer;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        ConsoleRenderer::new().render_guidance(&cli.config, cli.config.exists());
        return Ok(());
    };

    let load_config = || Config::load_from(&cli.config);

    match command {
        Commands::Init { force } => handlers::init::handle(&cli.config, force),
        Commands::Build { out } => handlers::build::handle(&load_config()?, &cli.config, &out),
        Commands::View { section } => {
            handlers::view::handle(&load_config()?, &cli.config, section)
        }
        Commands::Show {
            section,
            select,
            format,
        } => handlers::show::handle(&load_config()?, &cli.config, section, select, format),
        Commands::Check => handlers::check::handle(&load_config()?, &cli.config),
    }
}
