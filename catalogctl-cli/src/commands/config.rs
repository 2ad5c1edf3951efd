use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use catalogctl_core::{Catalog, CatalogConfig};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration (password masked)
    Show,
    /// Show default config file path
    Path,
    /// Validate table and key-column names without connecting
    Validate,
}

pub fn run_config(args: ConfigArgs, config: &CatalogConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let rendered = config
                .to_redacted_toml()
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
        ConfigCommands::Path => println!("{}", CatalogConfig::config_path().display()),
        ConfigCommands::Validate => {
            Catalog::validate(config).context("Configuration is invalid")?;
            println!("✅ Configuration is valid");
        }
    }
    Ok(())
}
