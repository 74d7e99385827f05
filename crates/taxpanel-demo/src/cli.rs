use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taxpanel_core::ScreenMode;

#[derive(Parser, Debug)]
#[command(name = "taxpanel-demo")]
#[command(
    author,
    version,
    about = "Replay completion-of-processing panel scenarios"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a scenario file and print the resulting declaration as JSON
    Run {
        /// Scenario file path
        #[arg(short, long)]
        scenario: PathBuf,

        /// Engine configuration file, overriding the scenario's config section
        #[arg(short, long, env = "TAXPANEL_CONFIG")]
        config: Option<PathBuf>,

        /// Initial screen mode, overriding the scenario (standard, historization, display, correction)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<ScreenMode>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the bundled example scenario
    Sample,
}

fn parse_mode(s: &str) -> Result<ScreenMode, String> {
    s.parse()
}
