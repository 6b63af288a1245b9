//! Tracing initialization.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::engine::config::{Config, ENV_LOG};

static INIT: Once = Once::new();

/// Initialize logging to `config.log_file`.
///
/// The filter comes from `config.log_filter`; an invalid filter falls back to
/// `vocabmeter=info`. When the log file cannot be opened logging stays off.
/// Calling this more than once has no further effect.
pub fn init_tracing(config: &Config) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new("vocabmeter=info"));

        let Some(file) = open_log_file(&config.log_file) else {
            return;
        };

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .try_init();

        tracing::info!(
            log_file = %config.log_file.display(),
            env = ENV_LOG,
            "logging initialised"
        );
    });
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_missing_directory() {
        assert!(open_log_file(Path::new("/nonexistent/dir/vocabmeter.log")).is_none());
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: dir.path().join("test.log"),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&config);
    }
}
