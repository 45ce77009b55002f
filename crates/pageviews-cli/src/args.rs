use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pageviews")]
#[command(about = "Compute per-page visit statistics from access logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base directory for resolving relative log paths
    #[arg(long, global = true)]
    pub base_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a statistic over a log file and print one line per page
    Report {
        /// Log file of whitespace-delimited `page visitor-id` lines
        file: String,

        /// Statistic to compile
        #[arg(long, default_value = "total")]
        statistic: String,
    },

    /// List the supported statistics
    Statistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
