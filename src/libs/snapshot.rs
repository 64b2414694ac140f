//! Saving and restoring the week through a durable slot.
//!
//! The week is written as a JSON array of seven day objects under a single
//! key. Loading is deliberately forgiving: every field is read on its own,
//! re-clamped through the clock normalizer, and replaced by its default when
//! missing or not understood. Stored totals are ignored and recomputed.
//!
//! Snapshots written by the older browser build (empty strings for unset
//! fields, numbers or numeric strings elsewhere) load the same way.
//!
//! ## Failure Handling
//!
//! - **Write failure**: logged at `error` level and swallowed; memory stays authoritative
//! - **Unreadable slot or invalid JSON**: logged at `warn` level, treated as no saved week
//! - **Missing or malformed day**: that day gets full defaults
//!
//! ## Examples
//!
//! ```rust
//! use timesheet::db::slots::MemorySlots;
//! use timesheet::libs::snapshot::{load, save, SLOT_KEY};
//! use timesheet::libs::week::Week;
//!
//! let mut slots = MemorySlots::new();
//! assert!(load(&slots, SLOT_KEY).is_none());
//!
//! save(&Week::new(), &mut slots, SLOT_KEY);
//! assert!(load(&slots, SLOT_KEY).is_some());
//! ```

use crate::db::error::StorageResult;
use crate::db::slots::SlotStorage;
use crate::libs::clock::{normalize_break, normalize_field, normalize_period, FieldKind, Period};
use crate::libs::day::{DayRecord, WEEKDAYS};
use crate::libs::field::Field;
use crate::libs::week::Week;
use chrono::Weekday;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

/// Default key of the durable slot holding the week.
pub const SLOT_KEY: &str = "timesheetData";

/// Serializes the week to its JSON snapshot.
pub fn encode(week: &Week) -> StorageResult<String> {
    Ok(serde_json::to_string(week.days())?)
}

/// Writes the week under `key`, propagating storage errors.
pub fn try_save<S: SlotStorage + ?Sized>(week: &Week, storage: &mut S, key: &str) -> StorageResult<()> {
    let snapshot = encode(week)?;
    storage.write_slot(key, &snapshot)?;
    debug!(key, bytes = snapshot.len(), "saved week snapshot");
    Ok(())
}

/// Writes the week under `key`.
///
/// Failures are logged and swallowed. Returns whether the write went through.
pub fn save<S: SlotStorage + ?Sized>(week: &Week, storage: &mut S, key: &str) -> bool {
    match try_save(week, storage, key) {
        Ok(()) => true,
        Err(e) => {
            error!(key, error = %e, "failed to save week snapshot");
            false
        }
    }
}

/// Reads the week stored under `key`.
///
/// Returns `None` when nothing usable is stored; the caller keeps its
/// defaults. Totals of the returned week are already recomputed.
pub fn load<S: SlotStorage + ?Sized>(storage: &S, key: &str) -> Option<Week> {
    let snapshot = match storage.read_slot(key) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read week snapshot");
            return None;
        }
    };
    decode(&snapshot)
}

/// Rebuilds a week from snapshot text, defaulting whatever is unusable.
pub fn decode(snapshot: &str) -> Option<Week> {
    let parsed: Value = match serde_json::from_str(snapshot) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "saved week is not valid JSON, starting empty");
            return None;
        }
    };
    let Some(entries) = parsed.as_array() else {
        warn!("saved week is not a list of days, starting empty");
        return None;
    };
    if entries.len() != WEEKDAYS.len() {
        warn!(found = entries.len(), "saved week has the wrong number of days");
    }

    let mut week = Week::new();
    for (index, day) in WEEKDAYS.into_iter().enumerate() {
        if let Some(record) = entries.get(index).and_then(Value::as_object).map(|obj| merge_day(day, obj)) {
            week.replace(day, record);
        }
    }
    week.recompute_all();
    Some(week)
}

fn merge_day(day: Weekday, obj: &Map<String, Value>) -> DayRecord {
    let field = |f: Field| raw_text(obj.get(f.name()));

    let mut record = DayRecord::new(day);
    record.start_hour = field(Field::StartHour).and_then(|raw| normalize_field(&raw, FieldKind::Hour).value);
    record.start_min = field(Field::StartMin).and_then(|raw| normalize_field(&raw, FieldKind::Minute).value);
    record.start_period = period(field(Field::StartPeriod), DayRecord::DEFAULT_START_PERIOD);
    record.end_hour = field(Field::EndHour).and_then(|raw| normalize_field(&raw, FieldKind::Hour).value);
    record.end_min = field(Field::EndMin).and_then(|raw| normalize_field(&raw, FieldKind::Minute).value);
    record.end_period = period(field(Field::EndPeriod), DayRecord::DEFAULT_END_PERIOD);
    record.break_minutes = field(Field::BreakMinutes).map_or(0, |raw| normalize_break(&raw));
    record
}

fn period(raw: Option<String>, default: Period) -> Period {
    raw.map_or(default, |raw| normalize_period(&raw, default))
}

/// Numbers and strings as text; anything else counts as missing.
fn raw_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
