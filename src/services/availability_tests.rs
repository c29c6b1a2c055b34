#[cfg(test)]
mod tests {
    use crate::models::entities::DayOfWeek;
    use crate::services::availability::{
        action, classify, popular_slot_badge, spots_badge, AvailabilityInput,
        AvailabilitySnapshot, SessionAction, SpotsBadge, UrgencyTier,
    };

    fn input(capacity: u32, enrolled: u32) -> AvailabilityInput {
        AvailabilityInput {
            capacity,
            enrolled_count: enrolled,
            fill_rate_percent: None,
            urgency_level: None,
        }
    }

    #[test]
    fn test_spots_remaining_never_negative() {
        for (capacity, enrolled) in [(12u32, 0u32), (12, 12), (12, 15), (1, 100)] {
            let snap = AvailabilitySnapshot::derive(&input(capacity, enrolled));
            assert_eq!(
                snap.spots_remaining,
                capacity.saturating_sub(enrolled),
                "capacity={capacity} enrolled={enrolled}"
            );
        }
    }

    #[test]
    fn test_classify_boundaries_belong_to_higher_tier() {
        assert_eq!(classify(0.0), UrgencyTier::Available);
        assert_eq!(classify(49.9), UrgencyTier::Available);
        assert_eq!(classify(50.0), UrgencyTier::Moderate);
        assert_eq!(classify(74.9), UrgencyTier::Moderate);
        assert_eq!(classify(75.0), UrgencyTier::FillingFast);
        assert_eq!(classify(99.9), UrgencyTier::FillingFast);
        assert_eq!(classify(100.0), UrgencyTier::Full);
        assert_eq!(classify(130.0), UrgencyTier::Full);
    }

    #[test]
    fn test_backend_fill_rate_wins_over_local_computation() {
        // Raw counts say 50%, but the backend says 80% (manual holds).
        let snap = AvailabilitySnapshot::derive(&AvailabilityInput {
            capacity: 12,
            enrolled_count: 6,
            fill_rate_percent: Some(80.0),
            urgency_level: None,
        });
        assert_eq!(snap.fill_rate_percent, 80.0);
        assert_eq!(snap.urgency, UrgencyTier::FillingFast);
    }

    #[test]
    fn test_backend_urgency_wins_over_classification() {
        let snap = AvailabilitySnapshot::derive(&AvailabilityInput {
            capacity: 12,
            enrolled_count: 2,
            fill_rate_percent: None,
            urgency_level: Some(UrgencyTier::Full),
        });
        assert_eq!(snap.urgency, UrgencyTier::Full);
        assert!(snap.is_full);
    }

    #[test]
    fn test_full_by_counts_even_when_tier_lags() {
        // Backend tier lags behind the counts: still full by count.
        let snap = AvailabilitySnapshot::derive(&AvailabilityInput {
            capacity: 12,
            enrolled_count: 12,
            fill_rate_percent: None,
            urgency_level: Some(UrgencyTier::Moderate),
        });
        assert!(snap.is_full);
        assert_eq!(snap.urgency, UrgencyTier::Moderate);
    }

    #[test]
    fn test_display_fill_rate_is_clamped_raw_rate_is_not() {
        let snap = AvailabilitySnapshot::derive(&input(10, 13));
        assert!(snap.fill_rate_percent > 100.0);
        assert_eq!(snap.display_fill_rate(), 100.0);
    }

    #[test]
    fn test_spec_scenario_full_session() {
        // capacity=12, enrolled=12 => full, 0 spots, waitlist only.
        let snap = AvailabilitySnapshot::derive(&input(12, 12));
        assert!(snap.is_full);
        assert_eq!(snap.spots_remaining, 0);
        assert_eq!(action(&snap), SessionAction::JoinWaitlist);
        assert_eq!(
            spots_badge(&snap, DayOfWeek::Tuesday),
            Some(SpotsBadge::Full)
        );
    }

    #[test]
    fn test_spec_scenario_filling_fast_weekday_shows_count() {
        // capacity=12, enrolled=9 => exactly 75% => filling fast, and a
        // non-Saturday badge carries the numeric count.
        let snap = AvailabilitySnapshot::derive(&input(12, 9));
        assert_eq!(snap.urgency, UrgencyTier::FillingFast);
        let badge = spots_badge(&snap, DayOfWeek::Wednesday).unwrap();
        assert_eq!(badge.label(), "Only 3 left");
        assert_eq!(action(&snap), SessionAction::Select);
    }

    #[test]
    fn test_saturday_filling_fast_is_qualitative() {
        let snap = AvailabilitySnapshot::derive(&input(12, 9));
        let badge = spots_badge(&snap, DayOfWeek::Saturday).unwrap();
        assert_eq!(badge, SpotsBadge::FillingFast);
        assert_eq!(badge.label(), "Filling Fast!");
        // The presentation rule never alters the underlying count.
        assert_eq!(snap.spots_remaining, 3);
    }

    #[test]
    fn test_no_badge_below_filling_fast() {
        let snap = AvailabilitySnapshot::derive(&input(12, 6));
        assert_eq!(spots_badge(&snap, DayOfWeek::Monday), None);
        assert_eq!(spots_badge(&snap, DayOfWeek::Saturday), None);
    }

    #[test]
    fn test_popular_slot_is_weekend_and_not_full() {
        let open = AvailabilitySnapshot::derive(&input(12, 3));
        assert!(popular_slot_badge(&open, DayOfWeek::Saturday));
        assert!(popular_slot_badge(&open, DayOfWeek::Sunday));
        assert!(!popular_slot_badge(&open, DayOfWeek::Monday));

        let full = AvailabilitySnapshot::derive(&input(12, 12));
        assert!(!popular_slot_badge(&full, DayOfWeek::Saturday));
    }

    #[test]
    fn test_affordances_are_mutually_exclusive() {
        for enrolled in 0..=15u32 {
            let snap = AvailabilitySnapshot::derive(&input(12, enrolled));
            match action(&snap) {
                SessionAction::JoinWaitlist => assert!(snap.is_full),
                SessionAction::Select => assert!(!snap.is_full),
            }
        }
    }

    #[test]
    fn test_zero_capacity_reads_as_full() {
        let snap = AvailabilitySnapshot::derive(&input(0, 0));
        assert!(snap.is_full);
        assert_eq!(snap.spots_remaining, 0);
    }
}
