//! Set one field of one day.
//!
//! The command is one input event: the raw value is normalized, the day and
//! weekly totals are recomputed, and the week is saved before anything is
//! printed.

use crate::commands::open_timesheet;
use crate::libs::day::{parse_day, weekday_name};
use crate::libs::field::{Field, FieldUpdate};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Day to edit: 0-6 (0 is Monday), a weekday name such as `mon`, or `today`
    day: String,

    /// Field to edit
    ///
    /// One of startHour, startMin, startPeriod, endHour, endMin, endPeriod,
    /// breakMinutes. Kebab case (`start-hour`) works too.
    field: String,

    /// Raw value; out-of-range numbers are clamped, anything else clears the field
    #[arg(default_value = "", allow_hyphen_values = true)]
    value: String,
}

pub fn cmd(args: SetArgs) -> Result<()> {
    let Some(day) = parse_day(&args.day) else {
        msg_bail_anyhow!(Message::InvalidDay(args.day));
    };
    let Ok(field) = args.field.parse::<Field>() else {
        msg_bail_anyhow!(Message::InvalidField(args.field));
    };

    let mut sheet = open_timesheet()?;
    let outcome = sheet.apply(FieldUpdate::new(day, field, args.value));

    let day_name = weekday_name(outcome.day).to_string();
    msg_print!(Message::FieldUpdated {
        day: day_name.clone(),
        field: outcome.field.to_string(),
        value: outcome.display_value,
    });
    msg_print!(Message::DayTotal(day_name, outcome.day_total));
    msg_print!(Message::WeeklyTotal(outcome.weekly_total));
    if !outcome.saved {
        msg_warning!(Message::WeekNotSaved);
    }

    Ok(())
}
