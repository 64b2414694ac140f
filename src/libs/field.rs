//! Typed field-update commands sent from the presentation layer.
//!
//! Every edit in a day card becomes one [`FieldUpdate`]: which day, which
//! field, and the raw text the user typed. The engine answers with an
//! [`UpdateOutcome`] carrying everything the caller needs to redraw.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// The editable fields of a day record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    StartHour,
    StartMin,
    StartPeriod,
    EndHour,
    EndMin,
    EndPeriod,
    BreakMinutes,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::StartHour,
        Field::StartMin,
        Field::StartPeriod,
        Field::EndHour,
        Field::EndMin,
        Field::EndPeriod,
        Field::BreakMinutes,
    ];

    /// Wire name used in the persisted snapshot.
    pub fn name(&self) -> &'static str {
        match self {
            Field::StartHour => "startHour",
            Field::StartMin => "startMin",
            Field::StartPeriod => "startPeriod",
            Field::EndHour => "endHour",
            Field::EndMin => "endMin",
            Field::EndPeriod => "endPeriod",
            Field::BreakMinutes => "breakMinutes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name is not one of the seven editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the wire names (`startHour`) as well as kebab/snake case
    /// (`start-hour`, `start_hour`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Field::ALL
            .into_iter()
            .find(|f| f.name().to_ascii_lowercase() == key)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// One raw edit to one field of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub day: Weekday,
    pub field: Field,
    pub raw: String,
}

impl FieldUpdate {
    pub fn new(day: Weekday, field: Field, raw: impl Into<String>) -> Self {
        Self {
            day,
            field,
            raw: raw.into(),
        }
    }
}

/// Result of applying a [`FieldUpdate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub day: Weekday,
    pub field: Field,
    /// Normalized value to write back into the originating input.
    pub display_value: String,
    /// Day total as `H:MM`.
    pub day_total: String,
    /// Week total as `H:MM`.
    pub weekly_total: String,
    /// Whether the week reached durable storage.
    pub saved: bool,
}
