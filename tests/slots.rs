#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timesheet::db::db::Db;
    use timesheet::db::slots::{SlotStorage, Slots};
    use timesheet::libs::field::{Field, FieldUpdate};
    use timesheet::libs::timesheet::Timesheet;

    struct SlotsTestContext {
        temp_dir: TempDir,
    }

    impl SlotsTestContext {
        fn slots(&self) -> Slots {
            let db = Db::open(self.temp_dir.path().join("timesheet.db")).unwrap();
            Slots::new(db).unwrap()
        }
    }

    impl TestContext for SlotsTestContext {
        fn setup() -> Self {
            SlotsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(SlotsTestContext)]
    #[test]
    fn test_read_missing_slot(ctx: &mut SlotsTestContext) {
        let slots = ctx.slots();
        assert_eq!(slots.read_slot("timesheetData").unwrap(), None);
    }

    #[test_context(SlotsTestContext)]
    #[test]
    fn test_last_write_wins(ctx: &mut SlotsTestContext) {
        let mut slots = ctx.slots();
        slots.write_slot("timesheetData", "first").unwrap();
        slots.write_slot("timesheetData", "second").unwrap();
        assert_eq!(slots.read_slot("timesheetData").unwrap(), Some("second".to_string()));
    }

    #[test_context(SlotsTestContext)]
    #[test]
    fn test_slots_are_independent(ctx: &mut SlotsTestContext) {
        let mut slots = ctx.slots();
        slots.write_slot("a", "1").unwrap();
        slots.write_slot("b", "2").unwrap();
        assert_eq!(slots.read_slot("a").unwrap(), Some("1".to_string()));
        assert_eq!(slots.read_slot("b").unwrap(), Some("2".to_string()));
    }

    #[test_context(SlotsTestContext)]
    #[test]
    fn test_week_survives_reopening_the_database(ctx: &mut SlotsTestContext) {
        let mut sheet = Timesheet::open(ctx.slots());
        sheet.apply(FieldUpdate::new(Weekday::Mon, Field::StartHour, "8"));
        sheet.apply(FieldUpdate::new(Weekday::Mon, Field::StartMin, "30"));
        sheet.apply(FieldUpdate::new(Weekday::Mon, Field::EndHour, "5"));
        sheet.apply(FieldUpdate::new(Weekday::Mon, Field::BreakMinutes, "30"));
        drop(sheet);

        let reopened = Timesheet::open(ctx.slots());
        let monday = reopened.week().get(Weekday::Mon);
        assert_eq!(monday.start_hour(), Some(8));
        assert_eq!(monday.start_min(), Some(30));
        assert_eq!(monday.break_minutes(), 30);
        assert_eq!(reopened.day_total(Weekday::Mon), "8:00");
    }

    #[test]
    fn test_in_memory_database() {
        let mut slots = Slots::new(Db::open_in_memory().unwrap()).unwrap();
        slots.write_slot("timesheetData", "[]").unwrap();
        assert_eq!(slots.read_slot("timesheetData").unwrap(), Some("[]".to_string()));
    }
}
