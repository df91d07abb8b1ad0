//! Configuration for pathclerk.
//!
//! Configuration is layered, from highest to lowest precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHCLERK_*`)
//! 3. User config (`~/.pathclerk/config.yaml`, or `config.yaml` in the
//!    directory given by `--data-dir`)
//! 4. Built-in defaults, which depend on the [`Platform`]
//!
//! # Examples
//!
//! ```no_run
//! use pathclerk::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("forbidden: {:?}", config.effective_forbidden_chars());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathclerk::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     forbidden_chars: Some(vec![':', '?']),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.effective_forbidden_chars(), vec![':', '?']);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod platform;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use platform::{Platform, Shortcuts};
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
