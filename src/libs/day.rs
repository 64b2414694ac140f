//! A single weekday's time entry and its worked-hours calculation.

use crate::libs::clock::{to_minutes_since_midnight, Period, MINUTES_PER_DAY};
use chrono::{Datelike, Local, Weekday};
use serde::Serialize;

/// Weekdays in store order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday, as shown in day headers.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Maps a store index (0 = Monday) to its weekday.
pub fn weekday_from_index(index: usize) -> Option<Weekday> {
    WEEKDAYS.get(index).copied()
}

/// One day's entry: shift boundaries, break and the derived total.
///
/// Fields are only written through [`Week`](crate::libs::week::Week) and
/// the snapshot loader, both of which normalize first, so hours stay in
/// `1..=12`, minutes in `0..=59` and the break in `0..=480`.
///
/// `total_hours` is only ever written from [`DayRecord::worked_hours`]; it is
/// serialized for convenience but never trusted on load.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub(crate) name: String,
    pub(crate) start_hour: Option<u32>,
    pub(crate) start_min: Option<u32>,
    pub(crate) start_period: Period,
    pub(crate) end_hour: Option<u32>,
    pub(crate) end_min: Option<u32>,
    pub(crate) end_period: Period,
    pub(crate) break_minutes: u32,
    pub(crate) total_hours: f64,
}

impl DayRecord {
    pub const DEFAULT_START_PERIOD: Period = Period::Am;
    pub const DEFAULT_END_PERIOD: Period = Period::Pm;

    /// An empty record for `day`: no shift entered, no break.
    pub fn new(day: Weekday) -> Self {
        Self {
            name: weekday_name(day).to_string(),
            start_hour: None,
            start_min: None,
            start_period: Self::DEFAULT_START_PERIOD,
            end_hour: None,
            end_min: None,
            end_period: Self::DEFAULT_END_PERIOD,
            break_minutes: 0,
            total_hours: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_hour(&self) -> Option<u32> {
        self.start_hour
    }

    pub fn start_min(&self) -> Option<u32> {
        self.start_min
    }

    pub fn start_period(&self) -> Period {
        self.start_period
    }

    pub fn end_hour(&self) -> Option<u32> {
        self.end_hour
    }

    pub fn end_min(&self) -> Option<u32> {
        self.end_min
    }

    pub fn end_period(&self) -> Period {
        self.end_period
    }

    /// Break length in minutes.
    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Last computed worked hours.
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// Worked minutes for this day's shift.
    ///
    /// Zero when either boundary hour is unset. An end earlier than the
    /// start wraps past midnight once. The break is subtracted and the
    /// result never goes below zero.
    pub fn worked_minutes(&self) -> u32 {
        let start = to_minutes_since_midnight(self.start_hour, self.start_min, self.start_period);
        let end = to_minutes_since_midnight(self.end_hour, self.end_min, self.end_period);
        let (Some(start), Some(end)) = (start, end) else {
            return 0;
        };

        let mut minutes = end as i64 - start as i64;
        if minutes < 0 {
            minutes += MINUTES_PER_DAY as i64;
        }
        minutes -= self.break_minutes as i64;

        minutes.max(0) as u32
    }

    /// Worked time in fractional hours, unrounded.
    pub fn worked_hours(&self) -> f64 {
        self.worked_minutes() as f64 / 60.0
    }

    /// Raw input fields are equal, ignoring the derived total.
    pub fn same_entry(&self, other: &DayRecord) -> bool {
        self.start_hour == other.start_hour
            && self.start_min == other.start_min
            && self.start_period == other.start_period
            && self.end_hour == other.end_hour
            && self.end_min == other.end_min
            && self.end_period == other.end_period
            && self.break_minutes == other.break_minutes
    }
}

/// Computes worked hours for a day without touching its stored total.
pub fn compute_worked_hours(day: &DayRecord) -> f64 {
    day.worked_hours()
}

/// Parses a day argument: a store index `0..=6`, an English weekday name or
/// abbreviation (`mon`, `Monday`), or `today`.
pub fn parse_day(raw: &str) -> Option<Weekday> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("today") {
        return Some(Local::now().weekday());
    }
    if let Ok(index) = raw.parse::<usize>() {
        return weekday_from_index(index);
    }
    raw.parse::<Weekday>().ok()
}
