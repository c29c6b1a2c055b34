#[cfg(test)]
mod tests {
    use crate::api::{OrganizationId, SessionId};
    use crate::models::entities::{DayOfWeek, EntityKind, SessionStatus};
    use crate::models::view_rows::SessionViewRow;
    use crate::services::availability::{SessionAction, SpotsBadge};
    use crate::view::actions::{confirm_sign_up, dispatch_card_action, RegistrationHooks};
    use crate::view::card::SessionCardModel;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Mutex;

    fn test_row(id: &str, capacity: u32, enrolled: u32) -> SessionViewRow {
        SessionViewRow {
            id: SessionId::new(id),
            organization_id: OrganizationId::new("org-1"),
            day_of_week: DayOfWeek::Monday,
            start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            end_date: None,
            status: SessionStatus::Active,
            capacity,
            enrolled_count: enrolled,
            fill_rate_percent: None,
            urgency_level: None,
            program_id: "p-1".into(),
            program_name: "Soccer Stars".to_string(),
            program_description: String::new(),
            age_label: Some("Ages 3-5".to_string()),
            price_cents: 16900,
            duration_weeks: 9,
            location_id: Some("l-1".into()),
            location_name: "Riverside Park".to_string(),
            location_address: String::new(),
            coach_id: Some("c-1".into()),
            coach_name: "Coach Dana".to_string(),
            coach_rating: Some(4.8),
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        calls: Mutex<Vec<String>>,
    }

    impl RegistrationHooks for RecordingHooks {
        fn on_select(&self, session_id: &SessionId) {
            self.calls.lock().unwrap().push(format!("select:{session_id}"));
        }

        fn on_join_waitlist(&self, session_id: &SessionId, program_name: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("waitlist:{session_id}:{program_name}"));
        }

        fn on_sign_up(&self, session_id: &SessionId, program_name: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("signup:{session_id}:{program_name}"));
        }
    }

    #[test]
    fn test_card_for_open_session() {
        let card = SessionCardModel::build(&test_row("s-1", 12, 4));
        assert_eq!(card.action, SessionAction::Select);
        assert_eq!(card.spots_badge, None);
        assert_eq!(card.snapshot.spots_remaining, 8);
        assert_eq!(card.plans.len(), 3);
        assert_eq!(card.recommended_plan, 1, "$169 is above the $150 threshold");
        assert_eq!(card.price_line, "$169 or $56/mo");
        assert_eq!(card.schedule_label, "Monday 4:00 PM");
        assert_eq!(card.age_label.as_deref(), Some("Ages 3-5"));
    }

    #[test]
    fn test_card_for_full_session_offers_waitlist_only() {
        let card = SessionCardModel::build(&test_row("s-1", 12, 12));
        assert_eq!(card.action, SessionAction::JoinWaitlist);
        assert_eq!(card.spots_badge, Some(SpotsBadge::Full));
        assert_eq!(card.snapshot.spots_remaining, 0);
    }

    #[test]
    fn test_card_filling_fast_weekday() {
        let card = SessionCardModel::build(&test_row("s-1", 12, 9));
        assert_eq!(
            card.spots_badge.as_ref().map(|b| b.label().to_string()),
            Some("Only 3 left".to_string())
        );
        assert!(!card.popular_slot);
    }

    #[test]
    fn test_card_saturday_popular_and_qualitative() {
        let mut row = test_row("s-1", 12, 9);
        row.day_of_week = DayOfWeek::Saturday;
        let card = SessionCardModel::build(&row);
        assert_eq!(card.spots_badge, Some(SpotsBadge::FillingFast));
        assert!(card.popular_slot);
    }

    #[test]
    fn test_dispatch_routes_open_session_to_select() {
        let hooks = RecordingHooks::default();
        let action = dispatch_card_action(&hooks, &test_row("s-1", 12, 4));
        assert_eq!(action, SessionAction::Select);
        assert_eq!(hooks.calls.lock().unwrap().as_slice(), ["select:s-1"]);
    }

    #[test]
    fn test_dispatch_routes_full_session_to_waitlist() {
        let hooks = RecordingHooks::default();
        let action = dispatch_card_action(&hooks, &test_row("s-1", 12, 12));
        assert_eq!(action, SessionAction::JoinWaitlist);
        assert_eq!(
            hooks.calls.lock().unwrap().as_slice(),
            ["waitlist:s-1:Soccer Stars"]
        );
    }

    #[test]
    fn test_sign_up_forwards_verbatim() {
        let hooks = RecordingHooks::default();
        confirm_sign_up(&hooks, &test_row("s-1", 12, 4));
        assert_eq!(
            hooks.calls.lock().unwrap().as_slice(),
            ["signup:s-1:Soccer Stars"]
        );
    }

    #[test]
    fn test_row_refs_for_navigation() {
        let row = test_row("s-1", 12, 4);
        assert!(row.session_ref().is_navigable());
        assert!(row.location_ref().is_navigable());
        assert!(row.coach_ref().is_navigable());
        assert_eq!(row.program_ref().id.as_deref(), Some("Soccer Stars"));

        let mut unassigned = test_row("s-2", 12, 4);
        unassigned.coach_id = None;
        unassigned.coach_name = "TBD".to_string();
        let coach_ref = unassigned.coach_ref();
        assert_eq!(coach_ref.kind, EntityKind::Coach);
        assert!(!coach_ref.is_navigable());
        assert_eq!(coach_ref.fallback_name.as_deref(), Some("TBD"));
    }
}
