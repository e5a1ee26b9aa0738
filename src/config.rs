//! Configuration management for the name scanner
//!
//! Defaults are registered on a `config::Config` builder and command line
//! values are layered on top as overrides. No file or environment source is
//! consulted.

use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::naming::contains_invalid_chars;

/// Default string substituted for each forbidden character
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Options for a single scan
#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// Root of the tree to scan. Kept out of the `config` layers so that
    /// non UTF-8 paths survive untouched.
    #[serde(skip)]
    pub base_path: PathBuf,

    /// Substituted for every forbidden character
    pub replacement: String,

    /// Perform renames. When false the scan only lists findings.
    pub rename: bool,

    /// Suppress console output of scan events
    pub quiet: bool,
}

impl ScanConfig {
    /// Build configuration from parsed command line arguments
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?
            .set_override("rename", cli.rename)?
            .set_override("quiet", cli.quiet)?;

        if let Some(replacement) = &cli.sub_string {
            builder = builder.set_override("replacement", replacement.as_str())?;
        }

        Self::finish(builder, &cli.base_path)
    }

    /// Default configuration for scanning `base_path` (dry-run)
    pub fn for_path(base_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::finish(Self::defaults()?, base_path.as_ref())
    }

    /// Replace the substitution string, re-running validation
    pub fn with_replacement(mut self, replacement: &str) -> Result<Self, ConfigError> {
        self.replacement = replacement.to_string();
        self.validate()?;
        Ok(self)
    }

    /// Enable or disable renaming
    pub fn with_rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    /// True when no filesystem mutation may happen
    pub fn dry_run(&self) -> bool {
        !self.rename
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("replacement", DEFAULT_REPLACEMENT)?
            .set_default("rename", false)?
            .set_default("quiet", false)?)
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
        base_path: &Path,
    ) -> Result<Self, ConfigError> {
        let mut config: ScanConfig = builder.build()?.try_deserialize()?;
        config.base_path = base_path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_path.as_os_str().is_empty() {
            return Err(ConfigError::Message("base path cannot be empty".into()));
        }

        if contains_invalid_chars(&self.replacement) {
            return Err(ConfigError::Message(format!(
                "replacement {:?} contains characters that are invalid in names",
                self.replacement
            )));
        }

        Ok(())
    }
}
