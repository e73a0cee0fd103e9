//! Booking-form input validation
//!
//! Pure predicate and extraction functions used by form-handling code
//! to validate user-submitted booking data. Every function is total:
//! malformed input degrades to a conservative `false`/missing answer
//! instead of an error.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Permissive email shape: local part, "@", domain, ".", alphabetic
    /// TLD of at least two characters. Case-insensitive; the anchored
    /// character classes reject any embedded whitespace.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[a-z]{2,}$").unwrap();
}

/// Checks whether a value looks like an email address
///
/// Uses a permissive format check, not full RFC 5322 parsing: the form
/// only needs to catch obvious typos before submission.
///
/// # Arguments
/// - `value` - The candidate email, `None` when the field is absent
///
/// # Returns
/// `true` if the value matches `<local>@<domain>.<tld>` with a TLD of
/// at least two letters. Absent, empty, or whitespace-only input is
/// never a valid email.
pub fn is_email(value: Option<&str>) -> bool {
    match value {
        Some(s) if !s.trim().is_empty() => EMAIL_REGEX.is_match(s),
        _ => false,
    }
}

/// Checks whether two email inputs refer to the same address
///
/// Used for "confirm your email" fields. Each side is trimmed and
/// lower-cased before comparison, so case and surrounding whitespace
/// differences do not count as a mismatch.
///
/// # Arguments
/// - `a` - First email input, `None` when the field is absent
/// - `b` - Second email input, `None` when the field is absent
///
/// # Returns
/// `true` if both sides normalize to the same string. Absent values
/// normalize to the empty string, so two absent fields are considered
/// matching. Callers that need "both present and equal" should gate on
/// [`is_email`] first.
pub fn emails_match(a: Option<&str>, b: Option<&str>) -> bool {
    let normalize = |v: Option<&str>| v.unwrap_or("").trim().to_lowercase();
    normalize(a) == normalize(b)
}

/// Checks whether a birth date meets a minimum age as of today
///
/// Thin wrapper over [`min_age_on`] using the local wall-clock date.
/// The result changes as the calendar advances; tests should call
/// [`min_age_on`] with a fixed date instead.
///
/// # Arguments
/// - `date_str` - Birth date as an ISO 8601 date (`YYYY-MM-DD`)
/// - `years` - Minimum age in whole years
///
/// # Returns
/// `true` iff the date parses and the computed age is at least `years`.
/// Absent, empty, or unparseable input returns `false`.
pub fn min_age(date_str: Option<&str>, years: u32) -> bool {
    min_age_on(date_str, years, Local::now().date_naive())
}

/// Checks whether a birth date meets a minimum age on a given day
///
/// Computes calendar age with the day-of-year correction: if `today`'s
/// month and day precede the birth month and day, the naive year
/// difference is reduced by one. The exact anniversary day already
/// satisfies the minimum.
///
/// # Arguments
/// - `date_str` - Birth date as an ISO 8601 date (`YYYY-MM-DD`)
/// - `years` - Minimum age in whole years
/// - `today` - The date to compute the age against
///
/// # Returns
/// `true` iff the date parses and the age on `today` is at least
/// `years`; `false` for absent, empty, or unparseable input.
pub fn min_age_on(date_str: Option<&str>, years: u32, today: NaiveDate) -> bool {
    let birth = match date_str.map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<NaiveDate>() {
            Ok(date) => date,
            Err(_) => return false,
        },
        _ => return false,
    };

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    // Compare in a wide type: a u32 minimum above i32::MAX must never
    // wrap into a negative threshold.
    i64::from(age) >= i64::from(years)
}

/// Resolves a dot-delimited field path within a JSON value
///
/// Descends through nested objects one key at a time. Any step that is
/// not an object, or lacks the key, resolves the whole path to `None`.
///
/// # Arguments
/// - `obj` - The value to descend into
/// - `path` - Dot-delimited path such as `"guest.contact.email"`
///
/// # Returns
/// The value at the path, or `None` if any step is absent.
pub fn lookup_path<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(obj, |current, key| current.get(key))
}

/// Collects the field paths that are missing from a form payload
///
/// A field counts as missing if its path does not resolve, resolves to
/// JSON null, or resolves to a string that is empty after trimming.
/// Numbers, booleans, arrays, and objects all count as present — an
/// empty array is deliberately present, since emptiness only disqualifies
/// string values here.
///
/// # Arguments
/// - `obj` - The form payload; never mutated
/// - `fields` - Dot-delimited field paths, in presentation order
///
/// # Returns
/// The subsequence of `fields` that are missing, preserving input
/// order. Malformed paths resolve to missing rather than erroring.
pub fn required_fields(obj: &Value, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .copied()
        .filter(|path| is_missing(lookup_path(obj, path)))
        .map(str::to_string)
        .collect()
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
