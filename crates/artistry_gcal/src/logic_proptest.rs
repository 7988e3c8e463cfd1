#[cfg(test)]
mod tests {
    use crate::logic::{calculate_available_slots, AvailabilityRules};
    use artistry_common::services::CalendarEvent;
    use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
    use proptest::prelude::*;

    const DAY_MINUTES: i64 = 24 * 60;

    fn day_start() -> DateTime<Utc> {
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
    }

    // (start minute, length in minutes), kept inside one UTC day
    fn interval() -> impl Strategy<Value = (i64, i64)> {
        (0..DAY_MINUTES).prop_flat_map(|start| (Just(start), 0..=(DAY_MINUTES - start)))
    }

    fn to_event((start, len): (i64, i64), label: &str) -> CalendarEvent {
        let base = day_start();
        CalendarEvent::new(
            base + Duration::minutes(start),
            base + Duration::minutes(start + len),
            label,
        )
    }

    fn points(window: &CalendarEvent) -> Vec<DateTime<Utc>> {
        let mut out = Vec::new();
        let mut t = window.start;
        while t < window.end {
            out.push(t);
            t += Duration::hours(1);
        }
        out
    }

    fn time_of_day(t: DateTime<Utc>) -> NaiveTime {
        t.time()
    }

    proptest! {
        #[test]
        fn output_is_strictly_ascending(
            windows in prop::collection::vec(interval(), 0..6),
            busy in prop::collection::vec(interval(), 0..6),
        ) {
            let mut events: Vec<_> = windows.into_iter().map(|w| to_event(w, "Available")).collect();
            events.extend(busy.into_iter().map(|b| to_event(b, "Busy")));

            let slots = calculate_available_slots(&events, &AvailabilityRules::new(chrono_tz::UTC));
            prop_assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn every_point_outside_busy_time_is_offered(
            windows in prop::collection::vec(interval(), 1..6),
            busy in prop::collection::vec(interval(), 0..6),
        ) {
            let windows: Vec<_> = windows.into_iter().map(|w| to_event(w, "Available")).collect();
            let busy: Vec<_> = busy.into_iter().map(|b| to_event(b, "Busy")).collect();
            let events: Vec<_> = windows.iter().chain(busy.iter()).cloned().collect();

            let slots = calculate_available_slots(&events, &AvailabilityRules::new(chrono_tz::UTC));

            for window in &windows {
                for t in points(window) {
                    let inside_busy = busy.iter().any(|b| t >= b.start && t < b.end);
                    let offered = slots.contains(&time_of_day(t));
                    prop_assert_eq!(offered, !inside_busy, "point {} busy={}", t, inside_busy);
                }
            }
        }

        #[test]
        fn every_slot_comes_from_a_window(
            windows in prop::collection::vec(interval(), 0..6),
            busy in prop::collection::vec(interval(), 0..6),
        ) {
            let windows: Vec<_> = windows.into_iter().map(|w| to_event(w, "Available")).collect();
            let mut events = windows.clone();
            events.extend(busy.into_iter().map(|b| to_event(b, "Busy")));

            let slots = calculate_available_slots(&events, &AvailabilityRules::new(chrono_tz::UTC));
            for slot in slots {
                prop_assert!(windows
                    .iter()
                    .any(|w| points(w).into_iter().any(|t| time_of_day(t) == slot)));
            }
        }

        #[test]
        fn inverted_windows_contribute_nothing(
            (start, len) in interval(),
        ) {
            let base = day_start();
            let window = CalendarEvent::new(
                base + Duration::minutes(start + len),
                base + Duration::minutes(start),
                "Available",
            );
            let slots = calculate_available_slots(&[window], &AvailabilityRules::new(chrono_tz::UTC));
            prop_assert!(slots.is_empty());
        }
    }
}
