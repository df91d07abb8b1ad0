//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathclerk::config::{Config, ConfigMerger};
///
/// let low = Config { include_hidden: Some(true), ..Default::default() };
/// let high = Config { include_hidden: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.include_hidden, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    ///
    /// The forbidden character list is replaced as a whole, never unioned,
    /// so a layer can relax the platform table.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.forbidden_chars.is_some() {
            target.forbidden_chars.clone_from(&source.forbidden_chars);
        }

        if source.conflict_mode.is_some() {
            target.conflict_mode = source.conflict_mode;
        }

        if source.include_hidden.is_some() {
            target.include_hidden = source.include_hidden;
        }

        if source.trash_dir.is_some() {
            target.trash_dir.clone_from(&source.trash_dir);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
