//! Tracing subscriber setup.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where diagnostics go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Batch mode: stdout carries the result, logs go to stderr.
    Stderr,
    /// Interactive mode: the terminal belongs to the UI.
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Pick the target for the interactive UI from config.
    pub fn for_interactive(config: &LoggingConfig) -> Self {
        match &config.file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Disabled,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingConfig, target: LogTarget) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| LoggingError::OpenLog {
                    path: path.clone(),
                    source,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| LoggingError::OpenLog {
                    path: path.clone(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|err| LoggingError::Install(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_without_file_is_disabled() {
        let config = LoggingConfig::default();
        assert_eq!(LogTarget::for_interactive(&config), LogTarget::Disabled);
    }

    #[test]
    fn interactive_with_file_logs_to_file() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/keycalc.log")),
        };
        assert_eq!(
            LogTarget::for_interactive(&config),
            LogTarget::File(PathBuf::from("/tmp/keycalc.log"))
        );
    }

    #[test]
    fn disabled_target_installs_nothing() {
        assert!(init_tracing(&LoggingConfig::default(), LogTarget::Disabled).is_ok());
    }
}
