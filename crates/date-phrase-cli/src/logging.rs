//! Severity-split file logging.
//!
//! INFO events land in an append-only `dphrase_info.log`; ERROR events land
//! in a daily-rotated `dphrase_error.log`. Each destination is filtered on
//! level equality, not a threshold, so neither file ever sees the other's
//! events. Both files are created in the current working directory.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

const LOG_DIR: &str = ".";

/// Install the global subscriber with the two file layers.
pub fn init() -> Result<()> {
    let info_appender = tracing_appender::rolling::never(LOG_DIR, "dphrase_info.log");
    let info_layer = fmt::layer()
        .with_writer(info_appender)
        .with_ansi(false)
        .with_filter(filter_fn(|meta| *meta.level() == Level::INFO));

    let error_appender = tracing_appender::rolling::daily(LOG_DIR, "dphrase_error.log");
    let error_layer = fmt::layer()
        .with_writer(error_appender)
        .with_ansi(false)
        .with_filter(filter_fn(|meta| *meta.level() == Level::ERROR));

    tracing_subscriber::registry()
        .with(info_layer)
        .with(error_layer)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(())
}
