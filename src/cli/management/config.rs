use clap::{Args, Subcommand};

use crate::config::{Config as AppConfig, CONFIG_KEYS};
use crate::error::Result;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// List all available configuration keys
    Keys,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig, config_path: Option<&str>) -> Result<()> {
    let config_file = AppConfig::resolve_path(config_path)?;

    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            for (key, _) in CONFIG_KEYS {
                println!("  {}: {}", key, config.get_value(key)?);
            }
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config.clone();
            config.set_value(&key, &value)?;
            config.save(&config_file)?;
            println!("Configuration updated: {} = {}", key, value);
        }

        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(&key)?);
        }

        ConfigCommands::Path => {
            println!("{}", config_file.display());
        }

        ConfigCommands::Reset => {
            AppConfig::default().save(&config_file)?;
            println!("✅ Configuration reset to defaults");
            println!("📁 Config file: {}", config_file.display());
        }

        ConfigCommands::Keys => {
            println!("Available configuration keys:");
            for (key, description) in CONFIG_KEYS {
                println!("  {:<20} - {}", key, description);
            }
        }
    }

    Ok(())
}
