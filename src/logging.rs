use anyhow::Context;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

pub const LOG_FILE_NAME: &str = "liquid_catalog.log";

/// Installs the global subscriber from `[logging]`: stdout always, plus a
/// daily-rolling file under `log_dir` unless that is empty.
pub fn init() -> anyhow::Result<()> {
    let cfg = &CONFIG.logging;

    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_filter(parse_level(&cfg.stdout_level, "stdout_level")?);

    let file_layer = match file_output_dir(cfg) {
        Some(dir) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_NAME))
                .with_filter(parse_level(&cfg.file_level, "file_level")?),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!(
        stdout_level = %cfg.stdout_level,
        log_dir = file_output_dir(cfg).unwrap_or("-"),
        "Logging initialized"
    );
    Ok(())
}

pub(crate) fn parse_level(value: &str, key: &str) -> anyhow::Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid logging.{key}: '{value}'"))
}

pub(crate) fn file_output_dir(cfg: &LoggingConfig) -> Option<&str> {
    let dir = cfg.log_dir.trim();
    (!dir.is_empty()).then_some(dir)
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("liquid_catalog=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;
