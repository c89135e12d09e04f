//! Logging setup
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.
//! `RUST_LOG` wins over the flags when set.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How the subscriber should be built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOptions {
    /// `gradpath=debug` instead of `gradpath=info`
    pub verbose: bool,
    /// JSON lines instead of human-readable output
    pub json: bool,
    /// Append a copy of every line to this file
    pub file_path: Option<PathBuf>,
}

impl LoggingOptions {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "gradpath=debug"
        } else {
            "gradpath=info"
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or the log file cannot be
/// opened.
///
/// # Examples
///
/// ```no_run
/// use gradpath::logging::{init_logging, LoggingOptions};
///
/// init_logging(&LoggingOptions { verbose: true, ..Default::default() }).unwrap();
/// ```
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(options.default_filter()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &options.file_path {
        Some(path) => Some(Arc::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    if options.json {
        let stderr_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr);

        if let Some(file) = file {
            let file_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(file);
            registry.with(stderr_layer).with(file_layer).init();
        } else {
            registry.with(stderr_layer).init();
        }
    } else {
        let stderr_layer = fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr);

        if let Some(file) = file {
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file);
            registry.with(stderr_layer).with(file_layer).init();
        } else {
            registry.with(stderr_layer).init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbose() {
        assert_eq!(LoggingOptions::default().default_filter(), "gradpath=info");
        let verbose = LoggingOptions {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(verbose.default_filter(), "gradpath=debug");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(LoggingOptions::default().default_filter()).is_ok());
    }
}
