//! In-memory directory implementation.
//!
//! Backs unit tests and local development. Joins are resolved at read time
//! from the seeded collections, so a session whose coach was removed simply
//! comes back with a `None` join, exactly like a broken foreign key in the
//! real service.

use crate::api::{CoachId, LocationId, OrganizationId, ProgramId, SessionId};
use crate::db::repository::{DirectoryError, DirectoryResult, SessionDirectory};
use crate::models::entities::{Coach, CoachReview, Location, Program, Session};
use crate::models::view_rows::JoinedSessionRow;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct Store {
    sessions: Vec<Session>,
    programs: HashMap<ProgramId, Program>,
    locations: HashMap<LocationId, Location>,
    coaches: HashMap<CoachId, Coach>,
    reviews: Vec<CoachReview>,
    /// Remaining number of queries to fail (fault injection for tests).
    fail_next: u32,
    /// When set, only review queries fail; session queries still succeed.
    fail_reviews: bool,
    /// When set, organization scoping at the query level is skipped,
    /// simulating a buggy upstream that leaks cross-tenant rows. The fetch
    /// pipeline must still filter them out.
    leak_cross_tenant: bool,
}

/// In-memory `SessionDirectory` backend.
#[derive(Default)]
pub struct LocalDirectory {
    store: RwLock<Store>,
}

impl LocalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_session(&self, session: Session) {
        self.store.write().sessions.push(session);
    }

    pub fn insert_program(&self, program: Program) {
        self.store
            .write()
            .programs
            .insert(program.id.clone(), program);
    }

    pub fn insert_location(&self, location: Location) {
        self.store
            .write()
            .locations
            .insert(location.id.clone(), location);
    }

    pub fn insert_coach(&self, coach: Coach) {
        self.store.write().coaches.insert(coach.id.clone(), coach);
    }

    pub fn insert_review(&self, review: CoachReview) {
        self.store.write().reviews.push(review);
    }

    /// Make the next `count` queries fail with a connection error.
    pub fn fail_next(&self, count: u32) {
        self.store.write().fail_next = count;
    }

    /// Make review queries fail while session queries succeed.
    pub fn fail_reviews(&self, fail: bool) {
        self.store.write().fail_reviews = fail;
    }

    /// Disable query-level organization scoping. Test-only knob used to
    /// prove the fetch pipeline enforces tenant isolation on its own.
    pub fn leak_cross_tenant(&self, leak: bool) {
        self.store.write().leak_cross_tenant = leak;
    }

    fn check_fault(&self) -> DirectoryResult<()> {
        let mut store = self.store.write();
        if store.fail_next > 0 {
            store.fail_next -= 1;
            return Err(DirectoryError::connection(
                "injected fault: directory unavailable",
            ));
        }
        Ok(())
    }

    fn join(store: &Store, session: &Session) -> JoinedSessionRow {
        JoinedSessionRow {
            session: session.clone(),
            program: store.programs.get(&session.program_id).cloned(),
            location: session
                .location_id
                .as_ref()
                .and_then(|id| store.locations.get(id))
                .cloned(),
            coach: session
                .coach_id
                .as_ref()
                .and_then(|id| store.coaches.get(id))
                .cloned(),
        }
    }

    fn collect_rows<F>(&self, organization_id: &OrganizationId, matches: F) -> Vec<JoinedSessionRow>
    where
        F: Fn(&Store, &Session) -> bool,
    {
        let store = self.store.read();
        store
            .sessions
            .iter()
            .filter(|s| store.leak_cross_tenant || &s.organization_id == organization_id)
            .filter(|s| matches(&store, s))
            .map(|s| Self::join(&store, s))
            .collect()
    }
}

#[async_trait]
impl SessionDirectory for LocalDirectory {
    async fn sessions_by_coach(
        &self,
        organization_id: &OrganizationId,
        coach_id: &CoachId,
    ) -> DirectoryResult<Vec<JoinedSessionRow>> {
        self.check_fault()?;
        Ok(self.collect_rows(organization_id, |_, s| {
            s.coach_id.as_ref() == Some(coach_id)
        }))
    }

    async fn sessions_by_location(
        &self,
        organization_id: &OrganizationId,
        location_id: &LocationId,
    ) -> DirectoryResult<Vec<JoinedSessionRow>> {
        self.check_fault()?;
        Ok(self.collect_rows(organization_id, |_, s| {
            s.location_id.as_ref() == Some(location_id)
        }))
    }

    async fn sessions_by_program(
        &self,
        organization_id: &OrganizationId,
        program_name: &str,
    ) -> DirectoryResult<Vec<JoinedSessionRow>> {
        self.check_fault()?;
        Ok(self.collect_rows(organization_id, |store, s| {
            store
                .programs
                .get(&s.program_id)
                .is_some_and(|p| p.name == program_name)
        }))
    }

    async fn session_by_id(
        &self,
        organization_id: &OrganizationId,
        session_id: &SessionId,
    ) -> DirectoryResult<Option<JoinedSessionRow>> {
        self.check_fault()?;
        let store = self.store.read();
        Ok(store
            .sessions
            .iter()
            .find(|s| {
                &s.id == session_id
                    && (store.leak_cross_tenant || &s.organization_id == organization_id)
            })
            .map(|s| Self::join(&store, s)))
    }

    async fn programs_by_name(
        &self,
        organization_id: &OrganizationId,
        program_name: &str,
    ) -> DirectoryResult<Vec<Program>> {
        self.check_fault()?;
        let store = self.store.read();
        Ok(store
            .programs
            .values()
            .filter(|p| {
                (store.leak_cross_tenant || &p.organization_id == organization_id)
                    && p.name == program_name
            })
            .cloned()
            .collect())
    }

    async fn coach_reviews(
        &self,
        _organization_id: &OrganizationId,
        coach_id: &CoachId,
    ) -> DirectoryResult<Vec<CoachReview>> {
        self.check_fault()?;
        let store = self.store.read();
        if store.fail_reviews {
            return Err(DirectoryError::query("injected fault: reviews unavailable"));
        }
        Ok(store
            .reviews
            .iter()
            .filter(|r| &r.coach_id == coach_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> DirectoryResult<()> {
        self.check_fault()
    }
}
