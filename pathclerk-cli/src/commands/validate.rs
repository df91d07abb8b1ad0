//! Command to validate a pathclerk configuration file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathclerk::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a pathclerk configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate; defaults to the one in the data directory
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Print the effective configuration after validating
    #[arg(long)]
    pub show: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let explicit = self.config_path.is_some();
        let config_path = match self.config_path {
            Some(path) => path,
            None => ConfigLoader::config_path(global.data_dir.as_deref())?,
        };

        if config_path.exists() {
            let config = ConfigLoader::load_file(&config_path).map_err(|e| {
                eprintln!("Parse error: {e}");
                CliError::SemanticFailure("Configuration file is invalid".to_string())
            })?;
            ConfigValidator::validate(&config).map_err(|e| {
                eprintln!("Validation error: {e}");
                CliError::SemanticFailure("Configuration validation failed".to_string())
            })?;
            if !global.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
        } else if explicit {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                config_path.display()
            )));
        } else if !global.quiet {
            println!("No configuration file at {}; defaults apply", config_path.display());
        }

        if self.show {
            let effective = load_configuration(global)?;
            let yaml = serde_yaml::to_string(&effective)
                .map_err(|e| CliError::Config(e.to_string()))?;
            print!("{yaml}");
        }
        Ok(())
    }
}
