use crate::commands::open_timesheet;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let sheet = open_timesheet()?;

    msg_print!(Message::WeekHeader, true);
    View::week(sheet.week());

    Ok(())
}
