//! Joined rows from the data service and their view-ready mapping.
//!
//! The directory returns sessions with their program/location/coach joins
//! attached as options: a deleted coach must not fail the whole fetch, so a
//! missing join degrades to a display default (`"Unknown Program"`, `"TBD"`)
//! during mapping.

use crate::api::{CoachId, LocationId, OrganizationId, ProgramId, SessionId};
use crate::models::age_range::AgeRange;
use crate::models::display::schedule_label;
use crate::models::entities::{
    Coach, DayOfWeek, EntityKind, EntityRef, Location, Program, Session, SessionStatus,
};
use crate::services::availability::UrgencyTier;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A session row as returned by the directory, joins included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedSessionRow {
    pub session: Session,
    #[serde(default)]
    pub program: Option<Program>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub coach: Option<Coach>,
}

/// Denormalized, view-ready session row.
///
/// Carries everything the card and detail surfaces render, so no further
/// joins happen downstream of the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionViewRow {
    pub id: SessionId,
    pub organization_id: OrganizationId,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: SessionStatus,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub fill_rate_percent: Option<f64>,
    pub urgency_level: Option<UrgencyTier>,

    // Program join (display defaults when missing)
    pub program_id: ProgramId,
    pub program_name: String,
    pub program_description: String,
    /// `None` when the program's age interval is absent or malformed.
    pub age_label: Option<String>,
    pub price_cents: i64,
    pub duration_weeks: u32,

    // Location join
    pub location_id: Option<LocationId>,
    pub location_name: String,
    pub location_address: String,

    // Coach join
    pub coach_id: Option<CoachId>,
    pub coach_name: String,
    pub coach_rating: Option<f64>,
}

impl SessionViewRow {
    /// Default program duration used when the join is missing; matches the
    /// standard 9-week season.
    pub const DEFAULT_DURATION_WEEKS: u32 = 9;

    /// Map a joined row into its denormalized display shape, substituting
    /// defaults for missing joins.
    pub fn from_joined(row: &JoinedSessionRow) -> Self {
        let session = &row.session;

        let (program_name, program_description, age_label, price_cents, duration_weeks) =
            match &row.program {
                Some(p) => (
                    p.name.clone(),
                    p.description.clone(),
                    AgeRange::label_for(&p.age_range),
                    p.price_cents,
                    p.duration_weeks,
                ),
                None => (
                    "Unknown Program".to_string(),
                    String::new(),
                    None,
                    0,
                    Self::DEFAULT_DURATION_WEEKS,
                ),
            };

        let (location_name, location_address) = match &row.location {
            Some(l) => (l.name.clone(), l.address.clone()),
            None => ("TBD".to_string(), String::new()),
        };

        let (coach_name, coach_rating) = match &row.coach {
            Some(c) => (c.name.clone(), c.rating),
            None => ("TBD".to_string(), None),
        };

        Self {
            id: session.id.clone(),
            organization_id: session.organization_id.clone(),
            day_of_week: session.day_of_week,
            start_time: session.start_time,
            start_date: session.start_date,
            end_date: session.end_date,
            status: session.status,
            capacity: session.capacity,
            enrolled_count: session.enrolled_count,
            fill_rate_percent: session.fill_rate_percent,
            urgency_level: session.urgency_level,
            program_id: session.program_id.clone(),
            program_name,
            program_description,
            age_label,
            price_cents,
            duration_weeks,
            location_id: session.location_id.clone(),
            location_name,
            location_address,
            coach_id: session.coach_id.clone(),
            coach_name,
            coach_rating,
        }
    }

    /// "Monday 4:00 PM" style label for list rows.
    pub fn schedule_label(&self) -> String {
        schedule_label(self.day_of_week, self.start_time)
    }

    /// Navigation reference to this session.
    pub fn session_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Session, self.id.value())
            .with_fallback_name(self.program_name.clone())
    }

    /// Navigation reference to this row's location, id-less (plain text)
    /// when the session has no assigned location.
    pub fn location_ref(&self) -> EntityRef {
        match &self.location_id {
            Some(id) => EntityRef::new(EntityKind::Location, id.value())
                .with_fallback_name(self.location_name.clone()),
            None => EntityRef::unlinked(EntityKind::Location, self.location_name.clone()),
        }
    }

    /// Navigation reference to this row's coach, id-less when unassigned.
    pub fn coach_ref(&self) -> EntityRef {
        match &self.coach_id {
            Some(id) => EntityRef::new(EntityKind::Coach, id.value())
                .with_fallback_name(self.coach_name.clone()),
            None => EntityRef::unlinked(EntityKind::Coach, self.coach_name.clone()),
        }
    }

    /// Navigation reference to this row's program. Program drill-down is
    /// name-scoped (one program name may span multiple rows), so the ref
    /// carries the name as its key.
    pub fn program_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Program, self.program_name.clone())
            .with_fallback_name(self.program_name.clone())
    }
}
