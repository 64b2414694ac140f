#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use timesheet::libs::clock::Period;
    use timesheet::libs::day::{compute_worked_hours, parse_day, weekday_from_index, DayRecord};
    use timesheet::libs::field::Field;
    use timesheet::libs::week::Week;

    fn shift_week(start: (u32, u32, Period), end: (u32, u32, Period), break_minutes: u32) -> Week {
        let mut week = Week::new();
        let fields = [
            (Field::StartHour, start.0.to_string()),
            (Field::StartMin, start.1.to_string()),
            (Field::StartPeriod, start.2.to_string()),
            (Field::EndHour, end.0.to_string()),
            (Field::EndMin, end.1.to_string()),
            (Field::EndPeriod, end.2.to_string()),
            (Field::BreakMinutes, break_minutes.to_string()),
        ];
        for (field, raw) in fields {
            week.set_field(Weekday::Mon, field, &raw);
        }
        week
    }

    fn shift(start: (u32, u32, Period), end: (u32, u32, Period), break_minutes: u32) -> DayRecord {
        shift_week(start, end, break_minutes).get(Weekday::Mon).clone()
    }

    #[test]
    fn test_new_day_defaults() {
        let day = DayRecord::new(Weekday::Wed);
        assert_eq!(day.name(), "Wednesday");
        assert_eq!(day.start_hour(), None);
        assert_eq!(day.start_min(), None);
        assert_eq!(day.start_period(), Period::Am);
        assert_eq!(day.end_hour(), None);
        assert_eq!(day.end_min(), None);
        assert_eq!(day.end_period(), Period::Pm);
        assert_eq!(day.break_minutes(), 0);
        assert_eq!(day.total_hours(), 0.0);
    }

    #[test]
    fn test_regular_day_shift() {
        let day = shift((9, 0, Period::Am), (5, 30, Period::Pm), 30);
        assert_eq!(day.worked_minutes(), 8 * 60);
        assert_eq!(compute_worked_hours(&day), 8.0);
    }

    #[test]
    fn test_overnight_shift_wraps_past_midnight() {
        let day = shift((9, 0, Period::Pm), (5, 0, Period::Am), 0);
        assert_eq!(day.worked_minutes(), 480);
        assert_eq!(compute_worked_hours(&day), 8.0);
    }

    #[test]
    fn test_same_start_and_end_is_zero() {
        let day = shift((9, 0, Period::Am), (9, 0, Period::Am), 0);
        assert_eq!(compute_worked_hours(&day), 0.0);
    }

    #[test]
    fn test_break_longer_than_shift_is_zero() {
        let day = shift((9, 0, Period::Am), (10, 0, Period::Am), 90);
        assert_eq!(day.worked_minutes(), 0);
        assert_eq!(compute_worked_hours(&day), 0.0);
    }

    #[test]
    fn test_unset_boundary_is_zero() {
        let mut week = shift_week((9, 0, Period::Am), (5, 0, Period::Pm), 0);
        week.set_field(Weekday::Mon, Field::StartHour, "");
        assert_eq!(compute_worked_hours(week.get(Weekday::Mon)), 0.0);

        let mut week = shift_week((9, 0, Period::Am), (5, 0, Period::Pm), 0);
        week.set_field(Weekday::Mon, Field::EndHour, "");
        assert_eq!(compute_worked_hours(week.get(Weekday::Mon)), 0.0);
    }

    #[test]
    fn test_unset_minutes_count_as_zero() {
        let mut week = shift_week((8, 0, Period::Am), (4, 0, Period::Pm), 0);
        week.set_field(Weekday::Mon, Field::StartMin, "");
        week.set_field(Weekday::Mon, Field::EndMin, "");
        assert_eq!(week.get(Weekday::Mon).start_min(), None);
        assert_eq!(compute_worked_hours(week.get(Weekday::Mon)), 8.0);
    }

    #[test]
    fn test_fractional_hours_are_not_rounded() {
        let day = shift((9, 0, Period::Am), (9, 20, Period::Am), 0);
        assert!((compute_worked_hours(&day) - 20.0 / 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_hours_are_clamped_before_computing() {
        let day = shift((9, 0, Period::Am), (40, 75, Period::Am), 0);
        assert_eq!(day.end_hour(), Some(12));
        assert_eq!(day.end_min(), Some(59));
        assert!(compute_worked_hours(&day) < 24.0);
    }

    #[test]
    fn test_weekday_index_mapping() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Mon));
        assert_eq!(weekday_from_index(6), Some(Weekday::Sun));
        assert_eq!(weekday_from_index(7), None);
    }

    #[test]
    fn test_parse_day_argument() {
        assert_eq!(parse_day("0"), Some(Weekday::Mon));
        assert_eq!(parse_day("4"), Some(Weekday::Fri));
        assert_eq!(parse_day("7"), None);
        assert_eq!(parse_day("sat"), Some(Weekday::Sat));
        assert_eq!(parse_day("Sunday"), Some(Weekday::Sun));
        assert!(parse_day("today").is_some());
        assert_eq!(parse_day("someday"), None);
    }
}
