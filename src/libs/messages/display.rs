//! Display implementation for timesheet application messages.
//!
//! All user-facing text lives here so commands only ever name a
//! [`Message`] variant and the wording stays consistent.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::ConfigModuleStorage => "Storage settings".to_string(),

            // === TIMESHEET MESSAGES ===
            Message::FieldUpdated { day, field, value } => {
                if value.is_empty() {
                    format!("{} {} cleared", day, field)
                } else {
                    format!("{} {} set to {}", day, field, value)
                }
            }
            Message::DayTotal(day, total) => format!("{} total: {}", day, total),
            Message::WeeklyTotal(total) => format!("Weekly total: {}", total),
            Message::WeekHeader => "Timesheet for the week".to_string(),
            Message::InvalidDay(day) => format!(
                "Unknown day '{}': use 0-6, a weekday name or 'today'",
                day
            ),
            Message::InvalidField(field) => format!(
                "Unknown field '{}': use startHour, startMin, startPeriod, endHour, endMin, endPeriod or breakMinutes",
                field
            ),

            // === STORAGE MESSAGES ===
            Message::StorageOpenFailed(error) => format!("Failed to open timesheet database: {}", error),
            Message::WeekNotSaved => "The week could not be saved; changes are kept for this session only".to_string(),

            // === PROMPTS ===
            Message::PromptDbFileName => "Database file name".to_string(),
            Message::PromptSlotKey => "Storage key for the week".to_string(),
        };
        write!(f, "{}", text)
    }
}
