//! The reporting channel consumed by the resolver.
//!
//! The resolver never touches files or stdout itself — every user-visible
//! event goes through a [`Reporter`], and the embedding application decides
//! where each severity lands (log files, a channel, a test capture buffer).

use std::fmt;

/// Severity of a reported event.
///
/// Successful resolutions report at [`Severity::Info`]; malformed input and
/// "no such date" outcomes report at [`Severity::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Sink for resolution events.
///
/// Implementations must route each severity to its own destination without
/// duplicating or dropping events; concurrent-append safety is the
/// implementation's concern, not the resolver's.
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);
}

/// [`Reporter`] that forwards events to the `tracing` macros.
///
/// Pairs with a subscriber that splits INFO and ERROR events into separate
/// writers, such as the one the `dphrase` binary installs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}
