//! Configuration file discovery and loading.
//!
//! pathclerk reads a single YAML file, `config.yaml`, from its data
//! directory. The directory defaults to `~/.pathclerk` and can be moved with
//! `--data-dir` or `PATHCLERK_DATA_DIR`.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the default data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".pathclerk";

/// A configuration file that was found and parsed.
///
/// # Examples
///
/// ```
/// use pathclerk::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("/home/me/.pathclerk/config.yaml"),
///     config: Default::default(),
/// };
/// assert!(source.config.conflict_mode.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was read from.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathclerk::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration, if there is one.
    ///
    /// With `data_dir` the file is `{data_dir}/config.yaml`; otherwise the
    /// default data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if no data directory was given and the home directory is unknown.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let path = Self::config_path(data_dir)?;
        if !path.exists() {
            log::debug!("no configuration at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the file cannot be read, or `Validation` if
    /// its contents are not a valid configuration.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Where the configuration file lives for the given data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_dir` is `None` and the home directory
    /// cannot be determined.
    pub fn config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir()?,
        };
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

/// The default data directory, `~/.pathclerk`.
///
/// # Errors
///
/// Returns `InvalidPath` if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Could not determine home directory".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_unknown_field() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "project: nope\n").unwrap();

        assert!(ConfigLoader::load_file(&config_path).is_err());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "include_hidden: false\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.include_hidden, Some(false));
    }

    #[test]
    fn test_load_user_config_from_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_user_config(Some(temp_dir.path()))
            .unwrap()
            .is_none());

        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "conflict_mode: append\n").unwrap();
        let source = ConfigLoader::load_user_config(Some(temp_dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(source.path, temp_dir.path().join("config.yaml"));
        assert!(source.config.conflict_mode.is_some());
    }

    #[test]
    fn test_config_path() {
        let path = ConfigLoader::config_path(Some(Path::new("/data"))).unwrap();
        assert_eq!(path, PathBuf::from("/data/config.yaml"));
    }
}
