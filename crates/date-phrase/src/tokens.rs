//! Static lookup tables for Russian month and weekday tokens.

use crate::error::ResolveError;

/// Month-name prefixes to month numbers (1-12).
///
/// Three letters each, except the two-letter "ма" for May — "май"/"мая"
/// share no three-letter prefix across their case forms. Matching is
/// case-sensitive substring containment against the supplied token.
const MONTH_PREFIXES: &[(&str, u32)] = &[
    ("янв", 1),
    ("фев", 2),
    ("мар", 3),
    ("апр", 4),
    ("ма", 5),
    ("июн", 6),
    ("июл", 7),
    ("авг", 8),
    ("сен", 9),
    ("окт", 10),
    ("ноя", 11),
    ("дек", 12),
];

/// Look up a full lowercase Russian weekday name (Monday = 0 .. Sunday = 6).
pub fn weekday_index(token: &str) -> Option<u32> {
    match token {
        "понедельник" => Some(0),
        "вторник" => Some(1),
        "среда" => Some(2),
        "четверг" => Some(3),
        "пятница" => Some(4),
        "суббота" => Some(5),
        "воскресенье" => Some(6),
        _ => None,
    }
}

/// Resolve a month token to a month number via prefix containment.
///
/// When several prefixes match ("марта" contains both "ма" and "мар"),
/// the unique longest one wins. Zero matches or a length tie between two
/// different months is an error.
pub fn month_index(token: &str) -> Result<u32, ResolveError> {
    let mut best: Option<(&str, u32)> = None;
    let mut tied = false;

    for &(prefix, month) in MONTH_PREFIXES {
        if !token.contains(prefix) {
            continue;
        }
        match best {
            None => best = Some((prefix, month)),
            Some((best_prefix, best_month)) => {
                if prefix.len() > best_prefix.len() {
                    best = Some((prefix, month));
                    tied = false;
                } else if prefix.len() == best_prefix.len() && month != best_month {
                    tied = true;
                }
            }
        }
    }

    match best {
        Some((_, month)) if !tied => Ok(month),
        Some(_) => Err(ResolveError::AmbiguousMonth(token.to_string())),
        None => Err(ResolveError::UnknownMonth(token.to_string())),
    }
}
