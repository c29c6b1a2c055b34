//! Directory trait: the read-only interface to the remote data service.
//!
//! The remote service owns the schema and query execution; this layer only
//! consumes joined, organization-scoped reads. Implementations must be
//! `Send + Sync` to work with async Rust.

pub mod error;

pub use error::{DirectoryError, DirectoryResult, ErrorContext};

use crate::api::{CoachId, LocationId, OrganizationId, SessionId};
use crate::models::entities::{CoachReview, Program};
use crate::models::view_rows::JoinedSessionRow;
use async_trait::async_trait;

/// Read-only directory over sessions and their joins.
///
/// All queries are scoped to an organization: a row belonging to another
/// tenant must never appear in a result (the fetch pipeline re-checks this
/// invariant defensively, but implementations should enforce it at the
/// query level).
///
/// No method here mutates enrollment counts, ratings, or capacity.
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// Fetch sessions assigned to a coach, joins attached.
    ///
    /// # Returns
    /// * `Ok(Vec<JoinedSessionRow>)` - All matching rows, unfiltered and
    ///   unsorted; filtering and ordering happen in the fetch pipeline
    /// * `Err(DirectoryError)` - If the query fails
    async fn sessions_by_coach(
        &self,
        organization_id: &OrganizationId,
        coach_id: &CoachId,
    ) -> DirectoryResult<Vec<JoinedSessionRow>>;

    /// Fetch sessions running at a location, joins attached.
    async fn sessions_by_location(
        &self,
        organization_id: &OrganizationId,
        location_id: &LocationId,
    ) -> DirectoryResult<Vec<JoinedSessionRow>>;

    /// Fetch sessions belonging to a program, looked up by program *name*.
    ///
    /// Program drill-down is name-scoped because one program name may span
    /// multiple underlying program rows.
    async fn sessions_by_program(
        &self,
        organization_id: &OrganizationId,
        program_name: &str,
    ) -> DirectoryResult<Vec<JoinedSessionRow>>;

    /// Look up a single session by id, joins attached.
    ///
    /// Unlike the listing queries, this path does not hide full sessions: a
    /// session already known by id stays reachable through its own detail.
    async fn session_by_id(
        &self,
        organization_id: &OrganizationId,
        session_id: &SessionId,
    ) -> DirectoryResult<Option<JoinedSessionRow>>;

    /// Look up program rows by name within an organization.
    async fn programs_by_name(
        &self,
        organization_id: &OrganizationId,
        program_name: &str,
    ) -> DirectoryResult<Vec<Program>>;

    /// Reviews for a coach. A static list in the current instantiation.
    async fn coach_reviews(
        &self,
        organization_id: &OrganizationId,
        coach_id: &CoachId,
    ) -> DirectoryResult<Vec<CoachReview>>;

    /// Cheap liveness probe.
    async fn health_check(&self) -> DirectoryResult<()>;
}
