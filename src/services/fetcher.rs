//! Entity fetch pipeline: scope, filter, sort, map.
//!
//! One fetcher serves all four drill-down surfaces (sessions by coach, by
//! location, by program, and reviews by coach). Every listing goes through
//! the same pipeline:
//!
//! 1. Tenant isolation: rows from another organization are dropped even if
//!    the directory leaked them. Hard invariant.
//! 2. Future active sessions only: `status == Active`, `start_date >=
//!    today`.
//! 3. Full sessions are excluded from drill-down listings (they stay
//!    reachable by id through their own detail).
//! 4. Deterministic order: day-of-week asc (Sunday first), then start
//!    time, then session id as the tiebreak.
//! 5. Denormalized mapping with `Unknown`/`TBD` defaults for missing
//!    joins.
//!
//! Directory failures are logged and returned as errors; the view layer
//! maps them to an explicit error state. Nothing here panics.

use crate::api::{CoachId, LocationId, OrganizationId, SessionId};
use crate::db::repository::{DirectoryResult, SessionDirectory};
use crate::models::entities::{CoachReview, Program};
use crate::models::view_rows::{JoinedSessionRow, SessionViewRow};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Per-entity-type lazy loader over the session directory.
#[derive(Clone)]
pub struct EntityFetcher {
    directory: Arc<dyn SessionDirectory>,
    organization_id: OrganizationId,
}

impl EntityFetcher {
    pub fn new(directory: Arc<dyn SessionDirectory>, organization_id: OrganizationId) -> Self {
        Self {
            directory,
            organization_id,
        }
    }

    pub fn organization(&self) -> &OrganizationId {
        &self.organization_id
    }

    /// Upcoming, non-full sessions assigned to a coach.
    pub async fn sessions_by_coach(
        &self,
        coach_id: &CoachId,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        self.sessions_by_coach_as_of(coach_id, Local::now().date_naive())
            .await
    }

    /// Same as [`Self::sessions_by_coach`] with an explicit "today", for
    /// deterministic callers and tests.
    pub async fn sessions_by_coach_as_of(
        &self,
        coach_id: &CoachId,
        today: NaiveDate,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        let rows = self
            .directory
            .sessions_by_coach(&self.organization_id, coach_id)
            .await
            .map_err(|e| {
                let e = e.with_operation("sessions_by_coach");
                log::error!("session fetch failed: {e}");
                e
            })?;
        Ok(self.pipeline(rows, today))
    }

    /// Upcoming, non-full sessions running at a location.
    pub async fn sessions_by_location(
        &self,
        location_id: &LocationId,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        self.sessions_by_location_as_of(location_id, Local::now().date_naive())
            .await
    }

    pub async fn sessions_by_location_as_of(
        &self,
        location_id: &LocationId,
        today: NaiveDate,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        let rows = self
            .directory
            .sessions_by_location(&self.organization_id, location_id)
            .await
            .map_err(|e| {
                let e = e.with_operation("sessions_by_location");
                log::error!("session fetch failed: {e}");
                e
            })?;
        Ok(self.pipeline(rows, today))
    }

    /// Upcoming, non-full sessions of a program, looked up by name.
    pub async fn sessions_by_program(
        &self,
        program_name: &str,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        self.sessions_by_program_as_of(program_name, Local::now().date_naive())
            .await
    }

    pub async fn sessions_by_program_as_of(
        &self,
        program_name: &str,
        today: NaiveDate,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        let rows = self
            .directory
            .sessions_by_program(&self.organization_id, program_name)
            .await
            .map_err(|e| {
                let e = e.with_operation("sessions_by_program");
                log::error!("session fetch failed: {e}");
                e
            })?;
        Ok(self.pipeline(rows, today))
    }

    /// Sessions related to a known session: the other upcoming sessions of
    /// its program. The anchor session itself is excluded from the list.
    pub async fn sessions_related_to(
        &self,
        session_id: &SessionId,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        self.sessions_related_to_as_of(session_id, Local::now().date_naive())
            .await
    }

    pub async fn sessions_related_to_as_of(
        &self,
        session_id: &SessionId,
        today: NaiveDate,
    ) -> DirectoryResult<Vec<SessionViewRow>> {
        let anchor = self
            .directory
            .session_by_id(&self.organization_id, session_id)
            .await
            .map_err(|e| {
                let e = e.with_operation("sessions_related_to");
                log::error!("session lookup failed: {e}");
                e
            })?;

        // Tenant check applies to the by-id path too.
        let anchor = anchor.filter(|row| row.session.organization_id == self.organization_id);
        let Some(anchor) = anchor else {
            // Unknown anchor degrades to an empty related list; the detail
            // view still renders from its fallback fields.
            return Ok(Vec::new());
        };

        let program_name = anchor
            .program
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default();
        if program_name.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = self.sessions_by_program_as_of(&program_name, today).await?;
        rows.retain(|r| &r.id != session_id);
        Ok(rows)
    }

    /// A session's own joined row, by id. Does not hide full sessions.
    pub async fn session_by_id(
        &self,
        session_id: &SessionId,
    ) -> DirectoryResult<Option<SessionViewRow>> {
        let row = self
            .directory
            .session_by_id(&self.organization_id, session_id)
            .await
            .map_err(|e| {
                let e = e.with_operation("session_by_id");
                log::error!("session lookup failed: {e}");
                e
            })?;
        Ok(row
            .filter(|r| r.session.organization_id == self.organization_id)
            .map(|r| SessionViewRow::from_joined(&r)))
    }

    /// Program rows matching a display name within the organization. Used
    /// by the program detail header; one name may span multiple rows.
    pub async fn programs_by_name(&self, program_name: &str) -> DirectoryResult<Vec<Program>> {
        let mut programs = self
            .directory
            .programs_by_name(&self.organization_id, program_name)
            .await
            .map_err(|e| {
                let e = e.with_operation("programs_by_name");
                log::error!("program lookup failed: {e}");
                e
            })?;
        programs.retain(|p| p.organization_id == self.organization_id);
        Ok(programs)
    }

    /// Reviews for a coach. Static list in the current instantiation.
    pub async fn reviews_by_coach(&self, coach_id: &CoachId) -> DirectoryResult<Vec<CoachReview>> {
        self.directory
            .coach_reviews(&self.organization_id, coach_id)
            .await
            .map_err(|e| {
                let e = e.with_operation("reviews_by_coach");
                log::error!("review fetch failed: {e}");
                e
            })
    }

    /// The shared listing pipeline: isolate, filter, sort, map.
    fn pipeline(&self, rows: Vec<JoinedSessionRow>, today: NaiveDate) -> Vec<SessionViewRow> {
        let mut rows: Vec<SessionViewRow> = rows
            .iter()
            .filter(|r| r.session.organization_id == self.organization_id)
            .filter(|r| r.session.status == crate::models::entities::SessionStatus::Active)
            .filter(|r| r.session.start_date >= today)
            .filter(|r| r.session.enrolled_count < r.session.capacity)
            .map(SessionViewRow::from_joined)
            .collect();

        rows.sort_by(|a, b| {
            a.day_of_week
                .ordinal()
                .cmp(&b.day_of_week.ordinal())
                .then_with(|| a.start_time.cmp(&b.start_time))
                .then_with(|| a.id.cmp(&b.id))
        });
        rows
    }
}
