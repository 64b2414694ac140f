//! The timesheet engine.
//!
//! Owns the week and the slot it is persisted to, and runs the whole
//! pipeline for every edit:
//!
//! ```text
//! FieldUpdate ──▶ normalize field ──▶ recompute day ──▶ weekly total ──▶ save ──▶ UpdateOutcome
//! ```
//!
//! Each step finishes before the next edit is handled. No step can fail from
//! the caller's point of view: bad input is clamped and storage problems are
//! logged while the in-memory week stays authoritative.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Weekday;
//! use timesheet::db::slots::MemorySlots;
//! use timesheet::libs::field::{Field, FieldUpdate};
//! use timesheet::libs::timesheet::Timesheet;
//!
//! let mut sheet = Timesheet::open(MemorySlots::new());
//! sheet.apply(FieldUpdate::new(Weekday::Fri, Field::StartHour, "9"));
//! sheet.apply(FieldUpdate::new(Weekday::Fri, Field::StartPeriod, "PM"));
//! sheet.apply(FieldUpdate::new(Weekday::Fri, Field::EndHour, "5"));
//! let outcome = sheet.apply(FieldUpdate::new(Weekday::Fri, Field::EndPeriod, "AM"));
//!
//! assert_eq!(outcome.day_total, "8:00");
//! assert_eq!(outcome.weekly_total, "8:00");
//! ```

use crate::db::slots::SlotStorage;
use crate::libs::field::{FieldUpdate, UpdateOutcome};
use crate::libs::formatter::format_hours;
use crate::libs::snapshot::{self, SLOT_KEY};
use crate::libs::week::Week;
use chrono::Weekday;
use tracing::{debug, info};

pub struct Timesheet<S: SlotStorage> {
    week: Week,
    storage: S,
    key: String,
}

impl<S: SlotStorage> Timesheet<S> {
    /// Opens the week saved under the default slot key.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, SLOT_KEY)
    }

    /// Opens the week saved under `key`, or an empty week when nothing
    /// usable is stored there.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let week = match snapshot::load(&storage, &key) {
            Some(week) => {
                info!(key = %key, "restored saved week");
                week
            }
            None => Week::new(),
        };
        Self { week, storage, key }
    }

    /// Applies one edit and returns what the caller should redraw.
    pub fn apply(&mut self, update: FieldUpdate) -> UpdateOutcome {
        let FieldUpdate { day, field, raw } = update;
        debug!(day = ?day, field = %field, raw = %raw, "applying field update");

        let display_value = self.week.set_field(day, field, &raw);
        let day_hours = self.week.recompute_day(day);
        let week_hours = self.week.weekly_total();
        let saved = self.persist();

        UpdateOutcome {
            day,
            field,
            display_value,
            day_total: format_hours(day_hours),
            weekly_total: format_hours(week_hours),
            saved,
        }
    }

    /// Saves the week now. Failures are logged, never returned.
    pub fn persist(&mut self) -> bool {
        snapshot::save(&self.week, &mut self.storage, &self.key)
    }

    pub fn week(&self) -> &Week {
        &self.week
    }

    /// Day total as `H:MM`.
    pub fn day_total(&self, day: Weekday) -> String {
        format_hours(self.week.get(day).total_hours())
    }

    /// Week total as `H:MM`.
    pub fn weekly_total(&self) -> String {
        format_hours(self.week.weekly_total())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
