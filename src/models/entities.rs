//! Read models for the records served by the remote data service.
//!
//! These are snapshots: the backend creates and mutates them, this layer
//! only reads. In particular `enrolled_count` may transiently exceed
//! `capacity` (manual holds, delayed count sync) and nothing here assumes
//! otherwise.

use crate::api::{CoachId, LocationId, OrganizationId, ProgramId, SessionId};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Day of the week, ordered Sunday-first to match the service's sort
/// convention (Sunday=0 .. Saturday=6).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Sort ordinal, Sunday=0 through Saturday=6.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// Human-readable day name.
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" => Ok(DayOfWeek::Sunday),
            "monday" => Ok(DayOfWeek::Monday),
            "tuesday" => Ok(DayOfWeek::Tuesday),
            "wednesday" => Ok(DayOfWeek::Wednesday),
            "thursday" => Ok(DayOfWeek::Thursday),
            "friday" => Ok(DayOfWeek::Friday),
            "saturday" => Ok(DayOfWeek::Saturday),
            other => Err(format!("unrecognized day of week: {other}")),
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

/// Lifecycle status of a session row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Cancelled,
}

/// A scheduled recurring session of a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub organization_id: OrganizationId,
    pub program_id: ProgramId,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub coach_id: Option<CoachId>,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub status: SessionStatus,
    /// Always > 0 in well-formed data.
    pub capacity: u32,
    /// May exceed `capacity`; never "corrected" by this layer.
    pub enrolled_count: u32,
    /// Backend-computed fill rate, when the upstream pipeline provides one.
    /// It can encode holds/blocks invisible to the raw counts.
    #[serde(default)]
    pub fill_rate_percent: Option<f64>,
    /// Backend-computed urgency tier, same caveat as `fill_rate_percent`.
    #[serde(default)]
    pub urgency_level: Option<crate::services::availability::UrgencyTier>,
}

/// A program offering (the thing families actually sign up for).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub organization_id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Half-open interval string, e.g. `"[3,6)"`. Parsed leniently; see
    /// [`crate::models::age_range::AgeRange`].
    #[serde(default)]
    pub age_range: String,
    pub price_cents: i64,
    pub duration_weeks: u32,
}

/// A facility where sessions run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub organization_id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// A staff member assigned to sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub organization_id: OrganizationId,
    pub name: String,
    /// Average rating in [0, 5] when the coach has been rated.
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A review of a coach. Served as a static list in the current
/// instantiation, but routed through the directory for interface parity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachReview {
    pub coach_id: CoachId,
    pub reviewer_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// The four entity kinds reachable through detail-view navigation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Session,
    Location,
    Coach,
    Program,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Session => "session",
            EntityKind::Location => "location",
            EntityKind::Coach => "coach",
            EntityKind::Program => "program",
        }
    }
}

/// A navigation reference to one entity: the shared variant type that
/// replaces four mutually-importing detail components.
///
/// `id` is optional on purpose: a session with no assigned coach still
/// carries a displayable name, and a reference without an id renders as
/// plain text with no drill-down affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    #[serde(default)]
    pub id: Option<String>,
    /// Display name shown in the detail header before data has loaded.
    #[serde(default)]
    pub fallback_name: Option<String>,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id.into()),
            fallback_name: None,
        }
    }

    /// A reference with no id: displayable, not navigable.
    pub fn unlinked(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: None,
            fallback_name: Some(name.into()),
        }
    }

    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = Some(name.into());
        self
    }

    /// Whether this reference can open a detail view.
    pub fn is_navigable(&self) -> bool {
        self.id.is_some()
    }
}
