use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report { file, statistic } => {
            let base_dir = Config::resolve_base_dir(cli.base_dir.as_deref())?;
            handlers::report::handle(&base_dir, &file, &statistic, cli.format)
        }
        Commands::Statistics => handlers::statistics::handle(),
    }
}
