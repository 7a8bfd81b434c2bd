//! Phrase validation and the Nth-weekday-of-month search.
//!
//! A phrase is three whitespace-separated tokens: an ordinal ("1-й",
//! "3-е"), a full lowercase Russian weekday name, and a month name in any
//! case form that contains one of the known prefixes. Resolution walks the
//! target month day by day from the 1st until it has seen the requested
//! number of matching weekdays.
//!
//! The resolver reports every outcome through an injected [`Reporter`] and
//! never performs I/O itself. The year is an explicit parameter on
//! [`resolve_in_year`]; [`resolve`] defaults it to the current local year.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::error::{ResolveError, Result};
use crate::report::{Reporter, Severity};
use crate::tokens;

// ── Result type ─────────────────────────────────────────────────────────────

/// A successfully resolved phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    /// The calendar date of the Nth matching weekday. Midnight-implied;
    /// the phrase carries no time-of-day meaning.
    pub date: NaiveDate,
    /// The requested occurrence count (1 = first).
    pub ordinal: u32,
    /// The requested weekday, Monday = 0 .. Sunday = 6.
    pub weekday: u32,
    /// The resolved month number (1-12).
    pub month: u32,
}

// ── Public entry points ─────────────────────────────────────────────────────

/// Resolve a phrase against the current local year.
///
/// Convenience wrapper over [`resolve_in_year`]; see there for the contract.
///
/// # Errors
///
/// Same as [`resolve_in_year`].
pub fn resolve(phrase: &str, reporter: &dyn Reporter) -> Result<Option<ResolvedDate>> {
    resolve_in_year(phrase, Local::now().year(), reporter)
}

/// Resolve a phrase of the form `"<ordinal> <weekday> <month>"` within
/// `year`.
///
/// # Arguments
///
/// * `phrase` — e.g. `"1-й понедельник января"`, `"3-й четверг мая"`
/// * `year` — the calendar year to search in
/// * `reporter` — sink for the outcome event (INFO on success, ERROR
///   otherwise)
///
/// # Returns
///
/// `Ok(Some(..))` with the date of the Nth requested weekday, or `Ok(None)`
/// when the month has fewer than N such weekdays ("5-е воскресенье
/// февраля"). The not-found case is a normal outcome, reported at error
/// severity but never returned as `Err`.
///
/// # Errors
///
/// Returns [`ResolveError::Format`] when the phrase does not split into
/// exactly three tokens, the first token does not start with a digit, or
/// its numeric prefix is not a number; [`ResolveError::UnknownWeekday`] /
/// [`ResolveError::UnknownMonth`] / [`ResolveError::AmbiguousMonth`] when a
/// token is not in the lookup tables. Every error is reported before being
/// returned.
///
/// # Examples
///
/// ```
/// use date_phrase::{resolve_in_year, Reporter, Severity};
///
/// struct Quiet;
/// impl Reporter for Quiet {
///     fn report(&self, _: Severity, _: &str) {}
/// }
///
/// let resolved = resolve_in_year("1-й понедельник января", 2024, &Quiet)
///     .unwrap()
///     .unwrap();
/// assert_eq!(resolved.date.to_string(), "2024-01-01");
/// ```
pub fn resolve_in_year(
    phrase: &str,
    year: i32,
    reporter: &dyn Reporter,
) -> Result<Option<ResolvedDate>> {
    let (ordinal_token, weekday_token, month_token) = validate(phrase, reporter)?;

    let ordinal = parse_ordinal(ordinal_token)
        .ok_or_else(|| ResolveError::Format(format!("ordinal is not a number: '{ordinal_token}'")))
        .map_err(|e| report_err(reporter, e))?;

    let weekday = tokens::weekday_index(weekday_token)
        .ok_or_else(|| ResolveError::UnknownWeekday(weekday_token.to_string()))
        .map_err(|e| report_err(reporter, e))?;

    let month = tokens::month_index(month_token).map_err(|e| report_err(reporter, e))?;

    match nth_weekday_in_month(year, month, weekday, ordinal) {
        Some(date) => {
            reporter.report(Severity::Info, &format!("{phrase} -> {date}"));
            Ok(Some(ResolvedDate {
                date,
                ordinal,
                weekday,
                month,
            }))
        }
        None => {
            reporter.report(Severity::Error, &format!("{phrase} - not exist"));
            Ok(None)
        }
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

const FORMAT_HINT: &str = "format should be: ordinal weekday month";

/// Check the phrase shape and split it into its three tokens.
fn validate<'a>(
    phrase: &'a str,
    reporter: &dyn Reporter,
) -> Result<(&'a str, &'a str, &'a str)> {
    let parts: Vec<&str> = phrase.split_whitespace().collect();

    let (ordinal_token, weekday_token, month_token) = match parts[..] {
        [ordinal, weekday, month] => (ordinal, weekday, month),
        _ => {
            return Err(report_err(
                reporter,
                ResolveError::Format(format!(
                    "expected 3 tokens, got {}; {FORMAT_HINT}",
                    parts.len()
                )),
            ));
        }
    };

    if !ordinal_token.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(report_err(
            reporter,
            ResolveError::Format(format!("first char must be a digit; {FORMAT_HINT}")),
        ));
    }

    Ok((ordinal_token, weekday_token, month_token))
}

/// Parse the numeric prefix of an ordinal token: the text before the first
/// `-` ("3-й" → 3, bare "3" → 3).
fn parse_ordinal(token: &str) -> Option<u32> {
    let number = token.split_once('-').map_or(token, |(n, _)| n);
    number.parse().ok()
}

/// Report an error-severity event and pass the error through.
fn report_err(reporter: &dyn Reporter, err: ResolveError) -> ResolveError {
    reporter.report(Severity::Error, &err.to_string());
    err
}

// ── Search ──────────────────────────────────────────────────────────────────

/// Scan forward from the 1st of the month counting days whose weekday
/// matches; the `ordinal`-th match is the result.
///
/// The scan is bounded by `7 × ordinal` days, which always covers the Nth
/// occurrence when it exists; the month guard stops the count once the
/// scan rolls into the next month. An ordinal of 0 can never be reached by
/// the counter and falls out as `None`.
fn nth_weekday_in_month(year: i32, month: u32, weekday: u32, ordinal: u32) -> Option<NaiveDate> {
    let mut day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut count = 0u32;

    for _ in 0..7u64 * u64::from(ordinal) {
        if day.month() != month {
            break;
        }
        if day.weekday().num_days_from_monday() == weekday {
            count += 1;
            if count == ordinal {
                return Some(day);
            }
        }
        day = day.succ_opt()?;
    }
    None
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    /// Reporter that records every event for assertion.
    #[derive(Default)]
    struct Capture {
        events: RefCell<Vec<(Severity, String)>>,
    }

    impl Reporter for Capture {
        fn report(&self, severity: Severity, message: &str) {
            self.events.borrow_mut().push((severity, message.to_string()));
        }
    }

    impl Capture {
        fn only(&self, severity: Severity) -> bool {
            let events = self.events.borrow();
            !events.is_empty() && events.iter().all(|(s, _)| *s == severity)
        }
    }

    const YEAR: i32 = 2024;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── concrete resolutions ────────────────────────────────────────────

    #[test]
    fn test_first_monday_of_january() {
        let capture = Capture::default();
        let resolved = resolve_in_year("1-й понедельник января", YEAR, &capture)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.date, date(2024, 1, 1));
        assert_eq!(resolved.ordinal, 1);
        assert_eq!(resolved.weekday, 0);
        assert_eq!(resolved.month, 1);
        assert!(capture.only(Severity::Info));
    }

    #[test]
    fn test_third_thursday_of_may() {
        let capture = Capture::default();
        let resolved = resolve_in_year("3-й четверг мая", YEAR, &capture)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.date, date(2024, 5, 16));
    }

    #[test]
    fn test_first_monday_of_march_prefix_disambiguation() {
        // "марта" contains both the May and March prefixes; March must win
        let capture = Capture::default();
        let resolved = resolve_in_year("1-й понедельник марта", YEAR, &capture)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.date, date(2024, 3, 4));
        assert_eq!(resolved.month, 3);
    }

    #[test]
    fn test_fifth_friday_of_march() {
        // 5th Friday of March 2024 is March 29, the last possible slot
        let capture = Capture::default();
        let resolved = resolve_in_year("5-я пятница марта", YEAR, &capture)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.date, date(2024, 3, 29));
    }

    // ── not-found outcomes ──────────────────────────────────────────────

    #[test]
    fn test_fifth_sunday_of_february_not_exist() {
        // February 2024 has four Sundays
        let capture = Capture::default();
        let resolved = resolve_in_year("5-е воскресенье февраля", YEAR, &capture).unwrap();
        assert_eq!(resolved, None);
        assert!(capture.only(Severity::Error));
        let events = capture.events.borrow();
        assert!(events[0].1.contains("not exist"), "got: {}", events[0].1);
    }

    #[test]
    fn test_zeroth_occurrence_not_exist() {
        let capture = Capture::default();
        let resolved = resolve_in_year("0-й понедельник января", YEAR, &capture).unwrap();
        assert_eq!(resolved, None);
        assert!(capture.only(Severity::Error));
    }

    #[test]
    fn test_idempotent_within_a_year() {
        let capture = Capture::default();
        let a = resolve_in_year("2-я среда октября", YEAR, &capture).unwrap();
        let b = resolve_in_year("2-я среда октября", YEAR, &capture).unwrap();
        assert_eq!(a, b);
    }

    // ── validation errors ───────────────────────────────────────────────

    #[test]
    fn test_word_ordinal_is_format_error() {
        let capture = Capture::default();
        let err = resolve_in_year("второй понедельник января", YEAR, &capture).unwrap_err();
        assert!(matches!(err, ResolveError::Format(_)));
        assert!(capture.only(Severity::Error));
    }

    #[test]
    fn test_two_tokens_is_format_error() {
        let capture = Capture::default();
        let err = resolve_in_year("1-й января", YEAR, &capture).unwrap_err();
        assert!(matches!(err, ResolveError::Format(_)));
    }

    #[test]
    fn test_garbage_ordinal_digits_is_format_error() {
        let capture = Capture::default();
        let err = resolve_in_year("1x-й понедельник января", YEAR, &capture).unwrap_err();
        assert!(matches!(err, ResolveError::Format(_)));
    }

    #[test]
    fn test_weekday_abbreviation_rejected_up_front() {
        let capture = Capture::default();
        let err = resolve_in_year("1-й пн января", YEAR, &capture).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownWeekday(_)));
        assert!(capture.only(Severity::Error));
    }

    #[test]
    fn test_unknown_month_rejected() {
        let capture = Capture::default();
        let err = resolve_in_year("1-й понедельник тыквеня", YEAR, &capture).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownMonth(_)));
        assert!(capture.only(Severity::Error));
    }

    // ── property: Nth occurrence is correct when it exists ──────────────

    const WEEKDAY_NAMES: [&str; 7] = [
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
        "воскресенье",
    ];

    const MONTH_NAMES: [&str; 12] = [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ];

    /// Count occurrences of `weekday` in the month by brute force.
    fn occurrences(year: i32, month: u32, weekday: u32) -> u32 {
        let mut day = date(year, month, 1);
        let mut count = 0;
        while day.month() == month {
            if day.weekday().num_days_from_monday() == weekday {
                count += 1;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        count
    }

    proptest! {
        #[test]
        fn prop_nth_weekday_matches_request(
            month in 1u32..=12,
            weekday in 0u32..=6,
            n in 1u32..=5,
        ) {
            let capture = Capture::default();
            let phrase = format!(
                "{n}-й {} {}",
                WEEKDAY_NAMES[weekday as usize],
                MONTH_NAMES[(month - 1) as usize],
            );
            let resolved = resolve_in_year(&phrase, YEAR, &capture).unwrap();

            if occurrences(YEAR, month, weekday) >= n {
                let resolved = resolved.unwrap();
                prop_assert_eq!(resolved.date.month(), month);
                prop_assert_eq!(resolved.date.weekday().num_days_from_monday(), weekday);
                // it is the Nth: exactly n-1 earlier days share the weekday
                let earlier = (1..resolved.date.day())
                    .filter(|&d| {
                        date(YEAR, month, d).weekday().num_days_from_monday() == weekday
                    })
                    .count() as u32;
                prop_assert_eq!(earlier, n - 1);
            } else {
                prop_assert_eq!(resolved, None);
            }
        }
    }
}
