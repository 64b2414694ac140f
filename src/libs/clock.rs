//! Twelve-hour clock normalization.
//!
//! Turns raw, possibly garbage, text from an input widget into canonical
//! clock fields and converts canonical `(hour, minute, period)` triples into
//! minutes since midnight. Nothing in here ever fails: unparseable input
//! becomes "unset" and out-of-range input is clamped into range.
//!
//! ## Ranges
//!
//! - **Hour**: `1..=12`, unset when the input is not a number
//! - **Minute**: `0..=59`, unset when the input is not a number (`0` is a real value)
//! - **Break**: `0..=480` minutes, `0` when the input is not a number
//!
//! ## Examples
//!
//! ```rust
//! use timesheet::libs::clock::{normalize_field, to_minutes_since_midnight, FieldKind, Period};
//!
//! let hour = normalize_field("15", FieldKind::Hour);
//! assert_eq!(hour.value, Some(12));
//!
//! let minute = normalize_field("5", FieldKind::Minute);
//! assert_eq!(minute.display, "05");
//!
//! assert_eq!(to_minutes_since_midnight(Some(12), Some(0), Period::Am), Some(0));
//! assert_eq!(to_minutes_since_midnight(Some(1), None, Period::Pm), Some(780));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_HOUR: u32 = 1;
pub const MAX_HOUR: u32 = 12;
pub const MAX_MINUTE: u32 = 59;
pub const MAX_BREAK_MINUTES: u32 = 480;
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Half of the twelve-hour clock.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            _ => Err(()),
        }
    }
}

/// Which kind of clock field a raw value belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Hour,
    Minute,
}

/// A clock field after clamping.
///
/// `value` is what the engine computes with, `display` is what the input
/// widget should show after the edit so clamping is reflected back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: Option<u32>,
    pub display: String,
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and a sign are accepted, trailing characters are
/// ignored (`"7.5"` is 7). Returns `None` when no digit follows. Huge
/// magnitudes saturate instead of overflowing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen = true;
        value = value.saturating_mul(10).saturating_add(d as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Validates and clamps a raw hour or minute value.
///
/// Hours clamp to `1..=12` and minutes to `0..=59`. Input that is not a
/// number yields an unset field with an empty display. Minutes always
/// redisplay with two digits (`"0"` shows as `"00"`, not just `"5"` as `"05"`).
pub fn normalize_field(raw: &str, kind: FieldKind) -> Normalized {
    let Some(parsed) = parse_leading_int(raw) else {
        return Normalized {
            value: None,
            display: String::new(),
        };
    };

    match kind {
        FieldKind::Hour => {
            let hour = parsed.clamp(MIN_HOUR as i64, MAX_HOUR as i64) as u32;
            Normalized {
                value: Some(hour),
                display: hour.to_string(),
            }
        }
        FieldKind::Minute => {
            let minute = parsed.clamp(0, MAX_MINUTE as i64) as u32;
            Normalized {
                value: Some(minute),
                display: format!("{:02}", minute),
            }
        }
    }
}

/// Clamps a raw break length to `0..=480` minutes; non-numbers become `0`.
pub fn normalize_break(raw: &str) -> u32 {
    parse_leading_int(raw).map_or(0, |m| m.clamp(0, MAX_BREAK_MINUTES as i64) as u32)
}

/// Parses a period, falling back to `default` for anything but AM/PM.
pub fn normalize_period(raw: &str, default: Period) -> Period {
    raw.parse().unwrap_or(default)
}

/// Converts a twelve-hour time into minutes since midnight.
///
/// Returns `None` when no hour is entered or when the hour is outside
/// `1..=12` or the minute above `59`. A missing minute counts as `0`.
/// 12 AM is midnight and 12 PM is noon, so the result is always in `0..1440`.
pub fn to_minutes_since_midnight(hour: Option<u32>, minute: Option<u32>, period: Period) -> Option<u32> {
    let hour = hour.filter(|h| (MIN_HOUR..=MAX_HOUR).contains(h))?;
    let minute = match minute {
        Some(m) if m > MAX_MINUTE => return None,
        Some(m) => m,
        None => 0,
    };

    let hour24 = match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Am, h) => h,
        (Period::Pm, 12) => 12,
        (Period::Pm, h) => h + 12,
    };

    Some(hour24 * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_ignores_trailing_garbage() {
        assert_eq!(parse_leading_int(" 42xyz"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn noon_and_midnight() {
        assert_eq!(to_minutes_since_midnight(Some(12), Some(30), Period::Am), Some(30));
        assert_eq!(to_minutes_since_midnight(Some(12), Some(30), Period::Pm), Some(750));
        assert_eq!(to_minutes_since_midnight(Some(11), Some(59), Period::Pm), Some(1439));
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        assert_eq!(to_minutes_since_midnight(Some(u32::MAX), None, Period::Pm), None);
        assert_eq!(to_minutes_since_midnight(Some(0), None, Period::Am), None);
        assert_eq!(to_minutes_since_midnight(Some(9), Some(u32::MAX), Period::Am), None);
    }
}
