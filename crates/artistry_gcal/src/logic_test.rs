#[cfg(test)]
mod tests {
    use crate::logic::*;
    use artistry_common::services::CalendarEvent;
    use artistry_config::SlotFormat;
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn event(start: &str, end: &str, label: &str) -> CalendarEvent {
        CalendarEvent::new(utc(start), utc(end), label)
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn utc_rules() -> AvailabilityRules {
        AvailabilityRules::new(chrono_tz::UTC)
    }

    #[test]
    fn test_busy_hour_is_removed_from_window() {
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T12:00:00Z", "Available"),
            event("2025-03-07T10:00:00Z", "2025-03-07T11:00:00Z", "Jane Doe - Lashes"),
        ];
        assert_eq!(
            available_slot_strings(&events, &utc_rules()),
            vec!["09:00", "11:00"]
        );
    }

    #[test]
    fn test_overlapping_windows_are_unioned() {
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T11:00:00Z", "Available"),
            event("2025-03-07T10:00:00Z", "2025-03-07T13:00:00Z", "Available"),
        ];
        assert_eq!(
            available_slot_strings(&events, &utc_rules()),
            vec!["09:00", "10:00", "11:00", "12:00"]
        );
    }

    #[test]
    fn test_window_minute_offset_is_kept() {
        let events = vec![event(
            "2025-03-07T09:15:00Z",
            "2025-03-07T11:15:00Z",
            "Available",
        )];
        assert_eq!(
            available_slot_strings(&events, &utc_rules()),
            vec!["09:15", "10:15"]
        );
    }

    #[test]
    fn test_no_events_no_slots() {
        assert!(calculate_available_slots(&[], &utc_rules()).is_empty());
    }

    #[test]
    fn test_only_busy_events_no_slots() {
        let events = vec![event(
            "2025-03-07T09:00:00Z",
            "2025-03-07T17:00:00Z",
            "Closed",
        )];
        assert!(calculate_available_slots(&events, &utc_rules()).is_empty());
    }

    #[test]
    fn test_inverted_and_empty_windows_contribute_nothing() {
        let events = vec![
            event("2025-03-07T12:00:00Z", "2025-03-07T09:00:00Z", "Available"),
            event("2025-03-07T14:00:00Z", "2025-03-07T14:00:00Z", "Available"),
        ];
        assert!(calculate_available_slots(&events, &utc_rules()).is_empty());
    }

    #[test]
    fn test_no_slot_at_window_end() {
        let events = vec![event(
            "2025-03-07T09:00:00Z",
            "2025-03-07T10:00:00Z",
            "Available",
        )];
        assert_eq!(calculate_available_slots(&events, &utc_rules()), vec![hm(9, 0)]);
    }

    #[test]
    fn test_busy_end_is_exclusive() {
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T12:00:00Z", "Available"),
            event("2025-03-07T09:00:00Z", "2025-03-07T10:00:00Z", "Break"),
        ];
        assert_eq!(
            calculate_available_slots(&events, &utc_rules()),
            vec![hm(10, 0), hm(11, 0)]
        );
    }

    #[test]
    fn test_busy_interval_removes_slots_from_every_window() {
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T11:00:00Z", "Available"),
            event("2025-03-07T09:30:00Z", "2025-03-07T11:30:00Z", "Available"),
            event("2025-03-07T09:45:00Z", "2025-03-07T10:45:00Z", "Client"),
        ];
        assert_eq!(
            calculate_available_slots(&events, &utc_rules()),
            vec![hm(9, 0), hm(9, 30)]
        );
    }

    #[test]
    fn test_label_match_is_exact() {
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T11:00:00Z", "available"),
            event("2025-03-07T12:00:00Z", "2025-03-07T13:00:00Z", "Available"),
        ];
        assert_eq!(calculate_available_slots(&events, &utc_rules()), vec![hm(12, 0)]);
    }

    #[test]
    fn test_custom_availability_label() {
        let rules = AvailabilityRules {
            availability_label: "Open".to_string(),
            ..utc_rules()
        };
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T10:00:00Z", "Open"),
            event("2025-03-07T11:00:00Z", "2025-03-07T12:00:00Z", "Available"),
        ];
        assert_eq!(calculate_available_slots(&events, &rules), vec![hm(9, 0)]);
    }

    #[test]
    fn test_seconds_are_truncated() {
        let events = vec![event(
            "2025-03-07T09:00:30Z",
            "2025-03-07T10:30:00Z",
            "Available",
        )];
        assert_eq!(
            available_slot_strings(&events, &utc_rules()),
            vec!["09:00", "10:00"]
        );
    }

    #[test]
    fn test_twelve_hour_output_sorted_by_value() {
        let rules = utc_rules().with_format(SlotFormat::TwelveHour);
        let events = vec![
            event("2025-03-07T09:00:00Z", "2025-03-07T11:00:00Z", "Available"),
            event("2025-03-07T12:30:00Z", "2025-03-07T14:00:00Z", "Available"),
        ];
        assert_eq!(
            available_slot_strings(&events, &rules),
            vec!["9 AM", "10 AM", "12:30 PM", "1:30 PM"]
        );
    }

    #[test]
    fn test_format_slot() {
        assert_eq!(format_slot(hm(9, 0), SlotFormat::TwentyFourHour), "09:00");
        assert_eq!(format_slot(hm(17, 45), SlotFormat::TwentyFourHour), "17:45");
        assert_eq!(format_slot(hm(9, 0), SlotFormat::TwelveHour), "9 AM");
        assert_eq!(format_slot(hm(9, 15), SlotFormat::TwelveHour), "9:15 AM");
        assert_eq!(format_slot(hm(0, 0), SlotFormat::TwelveHour), "12 AM");
        assert_eq!(format_slot(hm(12, 0), SlotFormat::TwelveHour), "12 PM");
    }

    #[test]
    fn test_parse_slot_accepts_both_formats() {
        assert_eq!(parse_slot("09:00"), Some(hm(9, 0)));
        assert_eq!(parse_slot("9:00"), Some(hm(9, 0)));
        assert_eq!(parse_slot("17:30"), Some(hm(17, 30)));
        assert_eq!(parse_slot("9 AM"), Some(hm(9, 0)));
        assert_eq!(parse_slot("9:15 am"), Some(hm(9, 15)));
        assert_eq!(parse_slot("1:30 PM"), Some(hm(13, 30)));
        assert_eq!(parse_slot("12 AM"), Some(hm(0, 0)));
        assert_eq!(parse_slot("12 PM"), Some(hm(12, 0)));
        assert_eq!(parse_slot(" 10 pm "), Some(hm(22, 0)));
    }

    #[test]
    fn test_parse_slot_rejects_garbage() {
        assert_eq!(parse_slot(""), None);
        assert_eq!(parse_slot("9"), None);
        assert_eq!(parse_slot("25:00"), None);
        assert_eq!(parse_slot("13 PM"), None);
        assert_eq!(parse_slot("0 AM"), None);
        assert_eq!(parse_slot("9:75 AM"), None);
        assert_eq!(parse_slot("noon"), None);
    }

    #[test]
    fn test_parse_slot_requires_plain_digits() {
        assert_eq!(parse_slot("+9:00"), None);
        assert_eq!(parse_slot("+9 PM"), None);
        assert_eq!(parse_slot("9:+5"), None);
        assert_eq!(parse_slot("9:5"), None);
        assert_eq!(parse_slot("009:00"), None);
        assert_eq!(parse_slot("-1:00"), None);
    }

    #[test]
    fn test_parse_date_accepts_unpadded_components() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(parse_date("2025-03-07").unwrap(), expected);
        assert_eq!(parse_date("2025-3-7").unwrap(), expected);
        assert!(matches!(parse_date("07/03/2025"), Err(GcalError::InvalidDate(_))));
        assert!(matches!(parse_date("2025-02-30"), Err(GcalError::InvalidDate(_))));
    }

    #[test]
    fn test_rules_from_config() {
        let config = artistry_config::GcalConfig {
            time_zone: Some("Europe/Zurich".to_string()),
            slot_format: SlotFormat::TwelveHour,
            ..Default::default()
        };
        let rules = AvailabilityRules::from_config(&config).unwrap();
        assert_eq!(rules.time_zone, chrono_tz::Europe::Zurich);
        assert_eq!(rules.availability_label, DEFAULT_AVAILABILITY_LABEL);
        assert_eq!(rules.format, SlotFormat::TwelveHour);

        let defaults = AvailabilityRules::from_config(&Default::default()).unwrap();
        assert_eq!(defaults.time_zone, DEFAULT_TIME_ZONE);

        let bad = artistry_config::GcalConfig {
            time_zone: Some("Mars/Olympus".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            AvailabilityRules::from_config(&bad),
            Err(GcalError::InvalidTimeZone(_))
        ));
    }
}
