// Release date extraction from a version string

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static RELEASE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" (20\d\d-[0-1]\d-[0-3]\d) ").expect("release date pattern compiles")
});

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Last space-delimited `20YY-MM-DD` in the string, if it is a real date.
pub fn find_release_date(version: &str) -> Option<NaiveDate> {
    let caps = RELEASE_DATE_RE.captures_iter(version).last()?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

/// Release date at midnight UTC, or the current time when the string has no
/// date. The fallback makes the release look zero days old.
pub fn parse_release_date(version: &str) -> DateTime<Utc> {
    find_release_date(version)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now)
}

/// Fractional days between `release` and `now`.
pub fn days_since(release: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - release).num_milliseconds() as f64 / MILLIS_PER_DAY
}
