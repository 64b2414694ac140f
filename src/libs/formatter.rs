//! Hours formatting for day and week totals.
//!
//! Totals are kept as fractional hours and shown as `H:MM`:
//!
//! - Hours are not zero-padded and not wrapped at 24, so a week can read `42:15`
//! - Minutes are rounded to the nearest minute and always two digits
//! - A remainder that rounds up to 60 minutes carries into the hour
//! - Negative or non-finite input is shown as `0:00`
//!
//! ## Examples
//!
//! ```rust
//! use timesheet::libs::formatter::format_hours;
//!
//! assert_eq!(format_hours(1.5), "1:30");
//! assert_eq!(format_hours(40.0), "40:00");
//! assert_eq!(format_hours(1.999), "2:00");
//! ```

/// Formats fractional hours as `H:MM`.
pub fn format_hours(decimal_hours: f64) -> String {
    if !decimal_hours.is_finite() || decimal_hours <= 0.0 {
        return "0:00".to_string();
    }

    let mut hours = decimal_hours.floor() as u64;
    let mut minutes = ((decimal_hours - hours as f64) * 60.0).round() as u64;
    if minutes >= 60 {
        hours += 1;
        minutes -= 60;
    }

    format!("{}:{:02}", hours, minutes)
}
