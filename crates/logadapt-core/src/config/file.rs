//! File-based logger configuration (YAML or JSON)
//!
//! The user-level file lives at `~/.config/logadapt/logging.yaml` (or the
//! platform equivalent).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::logging::{ConsolePrinter, ConsoleTarget, PrinterLogger, SharedLogger, StreamLogger};
use crate::registry::create_logger;

/// Logger configuration
///
/// ```yaml
/// sink: file
/// path: /var/log/app.log
/// append: true
/// ```
///
/// `sink` is `file`, `console`, or the name of any registered logger
/// (`stdout`, `stderr`, `noop`, or a custom registration). `path` is only
/// accepted with `file`, and `prefix` / `target` only with `console`;
/// `build` rejects them on any other sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Sink name
    pub sink: String,

    /// Output file, required for the `file` sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Line prefix for the `console` sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Stream for the `console` sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ConsoleTarget>,

    /// Append to an existing file instead of truncating it
    pub append: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            sink: "stderr".to_string(),
            path: None,
            prefix: None,
            target: None,
            append: true,
        }
    }
}

impl LoggerConfig {
    /// Configuration for a file sink
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: "file".to_string(),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Configuration for a named sink
    pub fn named(sink: impl Into<String>) -> Self {
        Self {
            sink: sink.into(),
            ..Self::default()
        }
    }

    /// Default location of the user-level config file
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("logadapt").join("logging.yaml")
    }

    /// Parse from YAML; blank input gives the default configuration
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse YAML: {}", e)))
    }

    /// Parse from JSON
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Other(format!("Failed to serialize YAML: {}", e)))
    }

    /// Load from a YAML file; a missing file gives the default configuration
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            crate::diag_debug!("no logger config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save as YAML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Build the logger this configuration describes
    ///
    /// ```
    /// use logadapt_core::config::LoggerConfig;
    /// use logadapt_core::logging::Logger;
    ///
    /// let logger = LoggerConfig::named("noop").build().unwrap();
    /// logger.log(&[&"discarded"]);
    /// ```
    pub fn build(&self) -> ConfigResult<SharedLogger> {
        self.validate()?;

        match self.sink.as_str() {
            "file" => {
                let path = self.path.as_ref().ok_or(ConfigError::MissingPath)?;
                create_parent_dir(path)?;

                let mut options = OpenOptions::new();
                options.create(true);
                if self.append {
                    options.append(true);
                } else {
                    options.write(true).truncate(true);
                }
                let file = options.open(path)?;
                crate::diag_debug!("file sink opened at {}", path.display());
                Ok(Arc::new(StreamLogger::new(file)))
            }
            "console" => {
                let mut printer = match &self.prefix {
                    Some(prefix) => ConsolePrinter::with_prefix(prefix.clone()),
                    None => ConsolePrinter::new(),
                };
                if let Some(target) = self.target {
                    printer = printer.with_target(target);
                }
                Ok(Arc::new(PrinterLogger::new(printer)))
            }
            name => create_logger(name).ok_or_else(|| ConfigError::UnknownSink(name.to_string())),
        }
    }

    /// Reject settings that the selected sink would not use
    fn validate(&self) -> ConfigResult<()> {
        let sink = self.sink.as_str();
        if sink != "file" && self.path.is_some() {
            return Err(ConfigError::Other(format!(
                "'path' is only valid for sink 'file', not '{}'",
                sink
            )));
        }
        if sink != "console" {
            if self.prefix.is_some() {
                return Err(ConfigError::Other(format!(
                    "'prefix' is only valid for sink 'console', not '{}'",
                    sink
                )));
            }
            if self.target.is_some() {
                return Err(ConfigError::Other(format!(
                    "'target' is only valid for sink 'console', not '{}'",
                    sink
                )));
            }
        }
        Ok(())
    }
}

fn create_parent_dir(path: &Path) -> ConfigResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}
