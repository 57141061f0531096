#![forbid(unsafe_code)]

//! Date formatting and truncation helpers.
//!
//! Thin conveniences over [`chrono`]: a small set of shared format
//! patterns, absent-tolerant formatting, and the two truncations used
//! for comparisons (drop the time of day, or drop the date). Date
//! arithmetic beyond that belongs to `chrono` itself.
//!
//! # Example
//! ```
//! use braid_time::{DATE_LONG, format, start_of_day};
//! use chrono::NaiveDate;
//!
//! let dt = NaiveDate::from_ymd_opt(2016, 3, 14)
//!     .and_then(|d| d.and_hms_opt(15, 9, 26))
//!     .unwrap();
//! assert_eq!(format(Some(dt), DATE_LONG), "2016-03-14");
//! assert_eq!(format(None, DATE_LONG), "");
//! assert_eq!(start_of_day(Some(dt)).to_string(), "2016-03-14 00:00:00");
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// `2016-03-14 15:09:26`
pub const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
/// `2016-03-14`
pub const DATE_LONG: &str = "%Y-%m-%d";
/// `20160314`
pub const DATE_COMPACT: &str = "%Y%m%d";
/// `201603`
pub const MONTH_COMPACT: &str = "%Y%m";
/// `2016`
pub const YEAR: &str = "%Y";

/// The date [`time_only`] pins truncated times to.
const EPOCH_YMD: (i32, u32, u32) = (1900, 1, 1);

/// Format with a strftime pattern. Absent input yields `""`.
///
/// Use the pattern constants in this crate; an invalid pattern panics
/// at render time, per `chrono`'s formatting contract.
pub fn format(dt: Option<NaiveDateTime>, pattern: &str) -> String {
    match dt {
        None => String::new(),
        Some(dt) => dt.format(pattern).to_string(),
    }
}

/// Format as [`DATE_COMPACT`] (`yyyymmdd`). Absent input yields `""`.
pub fn format_compact(dt: Option<NaiveDateTime>) -> String {
    format(dt, DATE_COMPACT)
}

/// Format the current local time. An absent or empty pattern defaults
/// to [`DATE_TIME`].
pub fn now_string(pattern: Option<&str>) -> String {
    let pattern = match pattern {
        Some(p) if !p.is_empty() => p,
        _ => DATE_TIME,
    };
    format(Some(Local::now().naive_local()), pattern)
}

/// Truncate to the start of the day: the date is kept and the time of
/// day zeroed. Absent input means the current local time.
///
/// The usual prelude to date-granularity comparison.
pub fn start_of_day(dt: Option<NaiveDateTime>) -> NaiveDateTime {
    let dt = dt.unwrap_or_else(|| Local::now().naive_local());
    dt.date().and_time(NaiveTime::MIN)
}

/// Truncate to the time of day at second precision: the date is pinned
/// to 1900-01-01 and sub-second digits are zeroed. Absent input means
/// the current local time.
///
/// The time-granularity counterpart to [`start_of_day`].
pub fn time_only(dt: Option<NaiveDateTime>) -> NaiveDateTime {
    let dt = dt.unwrap_or_else(|| Local::now().naive_local());
    let (year, month, day) = EPOCH_YMD;
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
    let time = NaiveTime::from_hms_opt(dt.hour(), dt.minute(), dt.second())
        .unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

/// Number of days in a calendar month. `None` for a month outside
/// 1..=12 (out-of-range input is rejected, not wrapped).
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
