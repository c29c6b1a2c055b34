#[cfg(test)]
mod tests {
    use crate::api::{CoachId, LocationId, OrganizationId, ProgramId, SessionId};

    #[test]
    fn test_session_id_new() {
        let id = SessionId::new("sess-42");
        assert_eq!(id.value(), "sess-42");
    }

    #[test]
    fn test_session_id_equality() {
        let id1 = SessionId::new("s-100");
        let id2 = SessionId::new("s-100");
        let id3 = SessionId::new("s-101");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_session_id_ordering() {
        let id1 = SessionId::new("a");
        let id2 = SessionId::new("b");

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("s-7");
        assert_eq!(id.to_string(), "s-7");
    }

    #[test]
    fn test_session_id_from_str() {
        let id: SessionId = "s-9".into();
        assert_eq!(id.value(), "s-9");
    }

    #[test]
    fn test_program_id_equality() {
        let id1 = ProgramId::new("p-200");
        let id2 = ProgramId::new("p-200");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_location_id_equality() {
        let id1 = LocationId::new("l-300");
        let id2 = LocationId::new("l-300");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_coach_id_equality() {
        let id1 = CoachId::new("c-400");
        let id2 = CoachId::new("c-400");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_organization_id_serde_round_trip() {
        let id = OrganizationId::new("org-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"org-1\"");
        let back: OrganizationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
