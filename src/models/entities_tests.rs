#[cfg(test)]
mod tests {
    use crate::models::display::{format_dollars, format_whole_dollars, schedule_label};
    use crate::models::entities::{DayOfWeek, EntityKind, EntityRef};
    use chrono::NaiveTime;
    use std::str::FromStr;

    #[test]
    fn test_day_ordinals_are_sunday_first() {
        assert_eq!(DayOfWeek::Sunday.ordinal(), 0);
        assert_eq!(DayOfWeek::Monday.ordinal(), 1);
        assert_eq!(DayOfWeek::Saturday.ordinal(), 6);
    }

    #[test]
    fn test_day_ordering_follows_ordinals() {
        assert!(DayOfWeek::Sunday < DayOfWeek::Monday);
        assert!(DayOfWeek::Friday < DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_from_str_case_insensitive() {
        assert_eq!(DayOfWeek::from_str("Saturday").unwrap(), DayOfWeek::Saturday);
        assert_eq!(DayOfWeek::from_str("monday").unwrap(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from_str("  TUESDAY ").unwrap(), DayOfWeek::Tuesday);
        assert!(DayOfWeek::from_str("someday").is_err());
    }

    #[test]
    fn test_weekend_days() {
        assert!(DayOfWeek::Saturday.is_weekend());
        assert!(DayOfWeek::Sunday.is_weekend());
        assert!(!DayOfWeek::Wednesday.is_weekend());
    }

    #[test]
    fn test_day_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DayOfWeek::Thursday).unwrap();
        assert_eq!(json, "\"thursday\"");
        let back: DayOfWeek = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(back, DayOfWeek::Sunday);
    }

    #[test]
    fn test_entity_ref_navigability() {
        let linked = EntityRef::new(EntityKind::Coach, "c-1").with_fallback_name("Coach Dana");
        assert!(linked.is_navigable());

        let unlinked = EntityRef::unlinked(EntityKind::Coach, "TBD");
        assert!(!unlinked.is_navigable());
        assert_eq!(unlinked.fallback_name.as_deref(), Some("TBD"));
    }

    #[test]
    fn test_format_whole_dollars_rounds_half_up() {
        assert_eq!(format_whole_dollars(16900.0), "$169");
        assert_eq!(format_whole_dollars(5633.33), "$56");
        assert_eq!(format_whole_dollars(5650.0), "$57");
    }

    #[test]
    fn test_format_dollars_keeps_cents() {
        assert_eq!(format_dollars(16900), "$169.00");
        assert_eq!(format_dollars(16905), "$169.05");
        assert_eq!(format_dollars(-250), "-$2.50");
    }

    #[test]
    fn test_schedule_label() {
        let time = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        assert_eq!(schedule_label(DayOfWeek::Monday, time), "Monday 4:00 PM");

        let morning = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(schedule_label(DayOfWeek::Saturday, morning), "Saturday 9:30 AM");
    }
}
