mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, HOURS_PER_DAY, SECONDS_PER_HOUR};

    #[test]
    fn test_time_conversions() {
        let hour = Time::from_hours(1.0);
        assert_relative_eq!(hour.to_seconds(), SECONDS_PER_HOUR);

        let time_seconds = Time::from_seconds(SECONDS_PER_HOUR);
        assert_relative_eq!(time_seconds.to_hours(), 1.0);

        let days = 3.5;
        let time_days = Time::from_days(days);
        assert_relative_eq!(time_days.to_hours(), days * HOURS_PER_DAY);
        assert_relative_eq!(time_days.to_days(), days);

        let a = Time::from_hours(10.0);
        let b = Time::from_hours(5.0);
        assert_relative_eq!((a + b).to_hours(), 15.0);
        assert_relative_eq!((a - b).to_hours(), 5.0);
        assert_relative_eq!(a / b, 2.0);
        assert_relative_eq!((0.5 * a).to_hours(), 5.0);
    }

    #[test]
    fn test_time_finiteness() {
        assert!(Time::from_hours(2.0).is_finite());
        assert!(!Time::from_hours(f64::NAN).is_finite());
        assert!(!(Time::from_hours(1.0) / 0.0).is_finite());
    }
}
