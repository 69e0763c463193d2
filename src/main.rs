use anyhow::{Context, Result};
use clap::Parser;
use kaipo_meter::cli::{Cli, Commands, print_report, replay};
use kaipo_meter::settings::MeterConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { config, json } => {
            let settings = MeterConfig::load(config.as_deref())
                .context("Failed to load meter configuration")?;
            let report = replay(&settings)?;
            print_report(&report, json)?;
        }
        Commands::Config { config } => {
            let settings = MeterConfig::load(config.as_deref())
                .context("Failed to load meter configuration")?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
