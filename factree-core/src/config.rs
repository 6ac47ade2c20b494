//! Configuration loading for factorization defaults
//!
//! Bootstrap configuration lives in a TOML file. Resolution follows a
//! priority order:
//! 1. Explicit path argument (highest priority)
//! 2. `FACTREE_CONFIG` environment variable
//! 3. Platform config directory (`~/.config/factree/config.toml` on Linux)
//! 4. Compiled defaults (fallback)
//!
//! A missing or unreadable file never aborts startup: resolution logs a
//! warning and degrades to the compiled defaults. Every field is optional in
//! the file, so a partial or empty file parses.

use crate::error::{Error, Result};
use crate::factor::{FactorLimits, FactorOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Platform default config file location, when the platform exposes one.
static DEFAULT_CONFIG_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|d| d.join("factree").join("config.toml")));

/// Bootstrap configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Factorization defaults
    #[serde(default)]
    pub factoring: FactoringConfig,

    /// Logging configuration, consumed by applications embedding this library
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Factorization defaults: search bound policy and recursion guards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoringConfig {
    /// Bound divisor search by the integer square root
    #[serde(default = "default_use_threshold")]
    pub use_threshold: bool,

    /// Maximum recursion depth during tree construction
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum total node count per tree
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_use_threshold() -> bool {
    true
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FactoringConfig {
    fn default() -> Self {
        Self {
            use_threshold: default_use_threshold(),
            max_depth: default_max_depth(),
            max_nodes: default_max_nodes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl FactoringConfig {
    /// Convert into construction options for [`crate::FactorNode`].
    pub fn into_options(self) -> FactorOptions {
        FactorOptions {
            use_threshold: self.use_threshold,
            limits: FactorLimits {
                max_depth: self.max_depth,
                max_nodes: self.max_nodes,
            },
        }
    }
}

/// Load and parse a TOML configuration file.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Resolve configuration following the priority order above.
///
/// Never fails: any missing or unreadable candidate degrades to the compiled
/// defaults with a warning.
pub fn resolve_config(explicit_path: Option<&Path>) -> TomlConfig {
    let candidate = explicit_path
        .map(PathBuf::from)
        .or_else(|| std::env::var("FACTREE_CONFIG").ok().map(PathBuf::from))
        .or_else(|| DEFAULT_CONFIG_PATH.clone());

    match candidate {
        Some(path) if path.exists() => match load_toml_config(&path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load {} ({}), using compiled defaults",
                    path.display(),
                    e
                );
                TomlConfig::default()
            }
        },
        Some(path) => {
            warn!(
                "Config file {} not found, using compiled defaults",
                path.display()
            );
            TomlConfig::default()
        }
        None => TomlConfig::default(),
    }
}

/// Write configuration atomically (temp file + rename).
///
/// The rename replaces any existing file in one step, so readers never see a
/// partially written config.
pub fn write_toml_config(config: &TomlConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("serialize config: {}", e)))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_defaults() {
        let config = TomlConfig::default();
        assert!(config.factoring.use_threshold);
        assert_eq!(config.factoring.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.factoring.max_nodes, DEFAULT_MAX_NODES);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TomlConfig = toml::from_str("[factoring]\nuse_threshold = false\n").unwrap();
        assert!(!config.factoring.use_threshold);
        assert_eq!(config.factoring.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn test_into_options() {
        let factoring = FactoringConfig {
            use_threshold: false,
            max_depth: 10,
            max_nodes: 99,
        };
        let options = factoring.into_options();
        assert!(!options.use_threshold);
        assert_eq!(options.limits.max_depth, 10);
        assert_eq!(options.limits.max_nodes, 99);
    }
}
