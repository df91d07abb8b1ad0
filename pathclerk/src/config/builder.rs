//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds the effective configuration.
///
/// Layers apply from lowest to highest precedence: built-in defaults, the
/// user configuration file, `PATHCLERK_*` environment variables, then any
/// programmatic overrides. The merged result is validated.
///
/// # Examples
///
/// ```
/// use pathclerk::config::{Config, ConfigBuilder};
/// use pathclerk::fs::ConflictMode;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         conflict_mode: Some(ConflictMode::Overwrite),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.effective_conflict_mode(), ConflictMode::Overwrite);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// A builder that loads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `config.yaml` from `dir` instead of `~/.pathclerk`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read the configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHCLERK_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge the layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// an environment variable is invalid, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{CONFLICT_MODE_VAR, INCLUDE_HIDDEN_VAR};
    use crate::error::Error;
    use crate::fs::ConflictMode;
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    fn data_dir_with(yaml: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), yaml).unwrap();
        temp
    }

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_layer() {
        let temp = data_dir_with("conflict_mode: append\n");
        let config = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.conflict_mode, Some(ConflictMode::Append));
    }

    #[test]
    fn test_skip_files_ignores_file() {
        let temp = data_dir_with("conflict_mode: append\n");
        let config = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .skip_files()
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.conflict_mode, None);
    }

    #[test]
    #[serial]
    fn test_env_beats_file_and_overrides_beat_env() {
        let temp = data_dir_with("conflict_mode: append\ninclude_hidden: true\n");
        env::set_var(CONFLICT_MODE_VAR, "o");
        env::set_var(INCLUDE_HIDDEN_VAR, "false");

        let from_env = ConfigBuilder::new().with_data_dir(temp.path()).build();
        let overridden = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .with_config(Config {
                conflict_mode: Some(ConflictMode::Exclusive),
                ..Default::default()
            })
            .build();

        env::remove_var(CONFLICT_MODE_VAR);
        env::remove_var(INCLUDE_HIDDEN_VAR);

        let from_env = from_env.unwrap();
        assert_eq!(from_env.conflict_mode, Some(ConflictMode::Overwrite));
        assert_eq!(from_env.include_hidden, Some(false));

        let overridden = overridden.unwrap();
        assert_eq!(overridden.conflict_mode, Some(ConflictMode::Exclusive));
        assert_eq!(overridden.include_hidden, Some(false));
    }

    #[test]
    fn test_build_validates() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                forbidden_chars: Some(vec!['/']),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_bad_file_fails() {
        let temp = data_dir_with("include_hidden: perhaps\n");
        let result = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .skip_env()
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
