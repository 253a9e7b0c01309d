//! Configuration for kfix hosts: logging and quick-fix settings.
//!
//! Configuration is read from `kfix.toml` (or `.kfix.toml`) at the workspace
//! root. Every field has a default, so an empty file and a missing file mean
//! the same thing.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! json = false
//!
//! [quick_fixes]
//! enabled = true
//! max_signature_candidates = 5
//! disabled = ["remove-modifier"]
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Once;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

/// File names probed by [`discover_config_path`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["kfix.toml", ".kfix.toml"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KfixConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub quick_fixes: QuickFixConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// A level (`info`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,

    /// Write logs to stderr. When disabled, logs are discarded.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            _ => trimmed.to_owned(),
        }
    }

    fn config_env_filter(&self) -> tracing_subscriber::EnvFilter {
        let directives = Self::normalize_level_directives(&self.level);
        tracing_subscriber::EnvFilter::try_new(directives).unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        })
    }

    /// The effective filter: the configured level, followed by `RUST_LOG`
    /// directives when that variable is set.
    pub fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        let env_directives = std::env::var("RUST_LOG")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        match env_directives {
            Some(env_directives) => {
                let combined = format!(
                    "{},{env_directives}",
                    Self::normalize_level_directives(&self.level)
                );
                tracing_subscriber::EnvFilter::try_new(combined)
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new(env_directives))
                    .unwrap_or_else(|_| self.config_env_filter())
            }
            None => self.config_env_filter(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickFixConfig {
    /// Master switch for all quick fixes.
    #[serde(default = "QuickFixConfig::default_enabled")]
    pub enabled: bool,

    /// Upper bound on "change function signature" actions offered for one
    /// diagnostic. Must be at least 1.
    #[serde(default = "QuickFixConfig::default_max_signature_candidates")]
    pub max_signature_candidates: usize,

    /// Fix families to suppress, by family id (e.g. `change-function-signature`).
    #[serde(default)]
    pub disabled: BTreeSet<String>,
}

impl QuickFixConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_max_signature_candidates() -> usize {
        5
    }

    pub fn is_family_enabled(&self, family: &str) -> bool {
        self.enabled && !self.disabled.contains(family)
    }
}

impl Default for QuickFixConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            max_signature_candidates: Self::default_max_signature_candidates(),
            disabled: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep only the message: the default `Display` quotes the offending source.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl KfixConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config: KfixConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quick_fixes.max_signature_candidates == 0 {
            return Err(ConfigError::Invalid(
                "quick_fixes.max_signature_candidates must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Find the config file for a workspace root, if there is one.
pub fn discover_config_path(workspace_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| workspace_root.join(name))
        .find(|path| path.is_file())
}

/// Load the workspace config, or the defaults when no config file exists.
pub fn load_for_workspace(workspace_root: &Path) -> Result<KfixConfig, ConfigError> {
    match discover_config_path(workspace_root) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            KfixConfig::load_from_path(path)
        }
        None => Ok(KfixConfig::default()),
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber described by `config`.
///
/// Only the first call in a process has an effect. Returns whether this call
/// installed the subscriber.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let filter = config.env_filter();

        let make_writer = if !config.stderr {
            BoxMakeWriter::new(std::io::sink)
        } else if cfg!(debug_assertions) {
            // Routes through the test harness's output capture under `cargo test`.
            BoxMakeWriter::new(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
        } else {
            BoxMakeWriter::new(std::io::stderr)
        };

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(make_writer),
                )
                .try_init()
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(make_writer))
                .try_init()
        };
        installed = result.is_ok();
    });
    installed
}
