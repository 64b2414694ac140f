//! Persistence layer for the timesheet application.
//!
//! The week is stored as a single serialized value in a key-value slot.
//! [`slots::SlotStorage`] is the seam: [`slots::Slots`] keeps the slots in
//! SQLite, [`slots::MemorySlots`] keeps them in memory for embedding and tests.
//!
//! ## Usage
//!
//! ```rust
//! use timesheet::db::{db::Db, slots::{SlotStorage, Slots}};
//!
//! let mut slots = Slots::new(Db::open_in_memory()?)?;
//! slots.write_slot("timesheetData", "[]")?;
//! assert_eq!(slots.read_slot("timesheetData")?, Some("[]".to_string()));
//! # Ok::<(), timesheet::db::error::StorageError>(())
//! ```

/// SQLite connection management.
pub mod db;

/// Storage-layer errors.
pub mod error;

/// Durable key-value slots.
pub mod slots;
