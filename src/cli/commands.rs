use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the kaipo-meter application
/// Uses clap's derive macros for automatic CLI generation
#[derive(Parser)]
#[command(author = "Kaipo Chen")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Data Meter CLI Tool - Drive a combined bandwidth estimator and transfer observer")]
#[command(long_about = "Kaipo Meter pairs a bandwidth estimator with a transfer observer behind a single \
data meter. The CLI replays scripted transfers through the meter and reports the resulting bookkeeping. \
Configuration is read from an optional file and KMETER_* environment variables.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for the kaipo-meter application
#[derive(Subcommand)]
pub enum Commands {
    /// Replay the configured transfers through a data meter
    #[command(about = "Replay scripted transfers through a data meter")]
    #[command(long_about = "Builds a data meter from a manual estimator and a transfer tally, sends every \
scripted transfer through it as start, per-chunk byte counts and end notifications, then prints the \
estimate and a summary of each completed transfer.\n\n\
Examples:\n  \
km replay --config meter.toml            # Replay transfers from a file\n  \
km replay --config meter.toml --json     # Emit the report as JSON\n  \
KMETER_ESTIMATE_BPS=500000 km replay     # Override the estimate")]
    Replay {
        /// Configuration file (TOML, JSON, YAML, ...)
        #[arg(short, long, help = "Path to a meter configuration file")]
        config: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long, help = "Emit the replay report as JSON")]
        json: bool,
    },

    /// Print the effective configuration after all layers are applied
    #[command(about = "Show the effective meter configuration")]
    Config {
        #[arg(short, long, help = "Path to a meter configuration file")]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["km", "replay", "--config", "meter.toml", "--json"]);
        match cli.command {
            Commands::Replay { config, json } => {
                assert_eq!(config, Some(PathBuf::from("meter.toml")));
                assert!(json);
            }
            _ => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_parse_config_without_file() {
        let cli = Cli::parse_from(["km", "config"]);
        assert!(matches!(cli.command, Commands::Config { config: None }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
