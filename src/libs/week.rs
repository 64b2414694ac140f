//! The week's seven day records and the weekly total.
//!
//! [`Week`] is a plain data holder: setting a field normalizes the raw input
//! but never recomputes totals. Callers decide when to run
//! [`Week::recompute_day`] (the [`Timesheet`](crate::libs::timesheet::Timesheet)
//! engine does it after every edit).
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Weekday;
//! use timesheet::libs::field::Field;
//! use timesheet::libs::week::Week;
//!
//! let mut week = Week::new();
//! week.set_field(Weekday::Mon, Field::StartHour, "9");
//! week.set_field(Weekday::Mon, Field::EndHour, "5");
//! week.recompute_day(Weekday::Mon);
//! assert_eq!(week.weekly_total(), 8.0);
//! ```

use crate::libs::clock::{normalize_break, normalize_field, normalize_period, FieldKind};
use crate::libs::day::{DayRecord, WEEKDAYS};
use crate::libs::field::Field;
use chrono::Weekday;
use tracing::debug;

/// Exactly seven day records, Monday through Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    days: [DayRecord; 7],
}

impl Default for Week {
    fn default() -> Self {
        Self::new()
    }
}

impl Week {
    /// Seven empty records.
    pub fn new() -> Self {
        Self {
            days: WEEKDAYS.map(DayRecord::new),
        }
    }

    fn slot(day: Weekday) -> usize {
        day.num_days_from_monday() as usize
    }

    pub fn get(&self, day: Weekday) -> &DayRecord {
        &self.days[Self::slot(day)]
    }

    /// Record by store index, `0` being Monday.
    pub fn get_index(&self, index: usize) -> Option<&DayRecord> {
        self.days.get(index)
    }

    pub fn days(&self) -> &[DayRecord; 7] {
        &self.days
    }

    /// Writes one field from raw input and returns its normalized display.
    ///
    /// Hours and minutes go through the clock normalizer, the break is
    /// clamped to `0..=480`, and periods fall back to the field default when
    /// they are not AM/PM. Totals are left untouched.
    pub fn set_field(&mut self, day: Weekday, field: Field, raw: &str) -> String {
        let record = &mut self.days[Self::slot(day)];

        match field {
            Field::StartHour => set_clock(&mut record.start_hour, raw, FieldKind::Hour),
            Field::StartMin => set_clock(&mut record.start_min, raw, FieldKind::Minute),
            Field::EndHour => set_clock(&mut record.end_hour, raw, FieldKind::Hour),
            Field::EndMin => set_clock(&mut record.end_min, raw, FieldKind::Minute),
            Field::StartPeriod => {
                record.start_period = normalize_period(raw, DayRecord::DEFAULT_START_PERIOD);
                record.start_period.to_string()
            }
            Field::EndPeriod => {
                record.end_period = normalize_period(raw, DayRecord::DEFAULT_END_PERIOD);
                record.end_period.to_string()
            }
            Field::BreakMinutes => {
                record.break_minutes = normalize_break(raw);
                record.break_minutes.to_string()
            }
        }
    }

    /// Replaces a whole record, keeping the fixed day name.
    pub(crate) fn replace(&mut self, day: Weekday, mut record: DayRecord) {
        let slot = Self::slot(day);
        record.name = self.days[slot].name.clone();
        self.days[slot] = record;
    }

    /// Stores a computed total for `day`.
    pub fn set_total_hours(&mut self, day: Weekday, hours: f64) {
        self.days[Self::slot(day)].total_hours = hours.max(0.0);
    }

    /// Recomputes `day`'s total from its fields and returns it.
    pub fn recompute_day(&mut self, day: Weekday) -> f64 {
        let hours = self.get(day).worked_hours();
        debug!(day = ?day, hours, "recomputed day total");
        self.set_total_hours(day, hours);
        hours
    }

    pub fn recompute_all(&mut self) {
        for day in WEEKDAYS {
            self.recompute_day(day);
        }
    }

    /// Sum of all seven day totals, in hours.
    pub fn weekly_total(&self) -> f64 {
        weekly_total(self)
    }
}

fn set_clock(target: &mut Option<u32>, raw: &str, kind: FieldKind) -> String {
    let normalized = normalize_field(raw, kind);
    *target = normalized.value;
    normalized.display
}

/// Sum of the stored day totals.
pub fn weekly_total(week: &Week) -> f64 {
    week.days.iter().map(DayRecord::total_hours).sum()
}
