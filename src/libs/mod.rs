//! Core library modules for the timesheet application.
//!
//! ## Features
//!
//! - **Time Calculation**: Clock normalization, per-day worked hours, weekly totals
//! - **Persistence**: Snapshotting the week into a durable slot and restoring it
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **User Interface**: Console tables and hour formatting
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Weekday;
//! use timesheet::libs::field::Field;
//! use timesheet::libs::formatter::format_hours;
//! use timesheet::libs::week::Week;
//!
//! let mut week = Week::new();
//! week.set_field(Weekday::Tue, Field::StartHour, "8");
//! week.set_field(Weekday::Tue, Field::EndHour, "4");
//! week.set_field(Weekday::Tue, Field::BreakMinutes, "30");
//! week.recompute_day(Weekday::Tue);
//! assert_eq!(format_hours(week.weekly_total()), "7:30");
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod field;
pub mod formatter;
pub mod messages;
pub mod snapshot;
pub mod timesheet;
pub mod view;
pub mod week;
