use crate::libs::day::{DayRecord, WEEKDAYS};
use crate::libs::formatter::format_hours;
use crate::libs::week::Week;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the week as a table with day totals and the weekly total.
    pub fn week(week: &Week) {
        Self::week_table(week).printstd();
    }

    pub fn week_table(week: &Week) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "DAY", "START", "END", "BREAK", "TOTAL"]);
        for (index, day) in WEEKDAYS.iter().enumerate() {
            let record = week.get(*day);
            table.add_row(row![
                index,
                record.name,
                Self::start(record),
                Self::end(record),
                format!("{} min", record.break_minutes),
                format_hours(record.total_hours())
            ]);
        }
        table.add_row(row!["", "WEEK", "", "", "", format_hours(week.weekly_total())]);

        table
    }

    fn start(record: &DayRecord) -> String {
        Self::clock(record.start_hour, record.start_min, &record.start_period.to_string())
    }

    fn end(record: &DayRecord) -> String {
        Self::clock(record.end_hour, record.end_min, &record.end_period.to_string())
    }

    fn clock(hour: Option<u32>, minute: Option<u32>, period: &str) -> String {
        match hour {
            Some(hour) => format!("{}:{:02} {}", hour, minute.unwrap_or(0), period),
            None => "--:--".to_string(),
        }
    }
}
