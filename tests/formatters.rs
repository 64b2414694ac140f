#[cfg(test)]
mod tests {
    use timesheet::libs::formatter::format_hours;

    #[test]
    fn test_format_hours_zero() {
        assert_eq!(format_hours(0.0), "0:00");
    }

    #[test]
    fn test_format_hours_minutes_only() {
        assert_eq!(format_hours(0.5), "0:30");
        assert_eq!(format_hours(0.25), "0:15");
        assert_eq!(format_hours(1.0 / 60.0), "0:01");
    }

    #[test]
    fn test_format_hours_hours_and_minutes() {
        assert_eq!(format_hours(1.5), "1:30");
        assert_eq!(format_hours(7.75), "7:45");
        assert_eq!(format_hours(8.0), "8:00");
    }

    #[test]
    fn test_format_hours_not_clock_wrapped() {
        assert_eq!(format_hours(24.0), "24:00");
        assert_eq!(format_hours(40.0), "40:00");
        assert_eq!(format_hours(167.5), "167:30");
    }

    #[test]
    fn test_format_hours_rounds_to_nearest_minute() {
        // 20 minutes as a fraction is not exact in binary
        assert_eq!(format_hours(20.0 / 60.0), "0:20");
        assert_eq!(format_hours(1.0 + 29.6 / 60.0), "1:30");
        assert_eq!(format_hours(1.0 + 29.4 / 60.0), "1:29");
    }

    #[test]
    fn test_format_hours_carries_sixty_minutes() {
        assert_eq!(format_hours(1.999), "2:00");
        assert_eq!(format_hours(0.9999), "1:00");
        assert_eq!(format_hours(39.9999), "40:00");
    }

    #[test]
    fn test_format_hours_negative_and_non_finite() {
        assert_eq!(format_hours(-1.5), "0:00");
        assert_eq!(format_hours(f64::NAN), "0:00");
        assert_eq!(format_hours(f64::INFINITY), "0:00");
    }
}
