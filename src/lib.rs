//! # Timesheet - weekly worked-hours calculator
//!
//! Enter start and end times and break minutes for each day of a week; get
//! per-day and weekly worked-hours totals that survive across sessions.
//!
//! ## Features
//!
//! - **Forgiving Input**: Raw field text is clamped into range, never rejected
//! - **Overnight Shifts**: An end time before the start wraps past midnight
//! - **Break Deduction**: Breaks are subtracted and totals never go negative
//! - **Persistence**: The week is kept in a durable slot and restored on start
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Weekday;
//! use timesheet::db::slots::MemorySlots;
//! use timesheet::libs::field::{Field, FieldUpdate};
//! use timesheet::libs::timesheet::Timesheet;
//!
//! let mut sheet = Timesheet::open(MemorySlots::new());
//! sheet.apply(FieldUpdate::new(Weekday::Mon, Field::StartHour, "9"));
//! let outcome = sheet.apply(FieldUpdate::new(Weekday::Mon, Field::EndHour, "5"));
//! assert_eq!(outcome.day_total, "8:00");
//! ```

pub mod commands;
pub mod db;
pub mod libs;
