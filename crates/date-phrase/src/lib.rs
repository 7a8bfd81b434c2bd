//! # date-phrase
//!
//! Resolve a Russian phrase of the form "<ordinal> <weekday> <month>"
//! (`"1-й понедельник января"`) to the concrete calendar date of the Nth
//! occurrence of that weekday within the month.
//!
//! The resolver is pure apart from two injected collaborators: the year to
//! search in (defaulted to the current local year by [`resolve`]) and a
//! [`Reporter`] that receives an INFO event for every resolved date and an
//! ERROR event for every rejected phrase or non-existent date.
//!
//! ## Modules
//!
//! - [`resolve`](mod@resolve) — phrase validation and the day-by-day search
//! - [`tokens`] — static Russian month-prefix and weekday tables
//! - [`report`] — the severity/reporter seam between core and log routing
//! - [`error`] — error types

pub mod error;
pub mod report;
pub mod resolve;
pub mod tokens;

pub use error::ResolveError;
pub use report::{Reporter, Severity, TracingReporter};
pub use resolve::{resolve, resolve_in_year, ResolvedDate};
