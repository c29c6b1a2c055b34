//! Availability snapshot derivation and urgency classification.
//!
//! Turns enrollment counts and capacity into spots-remaining, a fill-rate
//! percentage, and an urgency tier. When the backend supplies a
//! precomputed fill rate or urgency level it wins over the local
//! computation: the precomputed value can encode business rules (manual
//! holds, blocks) invisible to raw counts.

use crate::models::entities::{DayOfWeek, Session};
use crate::models::view_rows::SessionViewRow;
use serde::{Deserialize, Serialize};

/// Urgency tier derived from the fill rate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Full,
    FillingFast,
    Moderate,
    Available,
}

/// Classify a fill-rate percentage into an urgency tier.
///
/// Total over `[0, ∞)`. Boundary values belong to the higher tier:
/// exactly 75% is `FillingFast`, not `Moderate`.
pub fn classify(fill_rate_percent: f64) -> UrgencyTier {
    if fill_rate_percent >= 100.0 {
        UrgencyTier::Full
    } else if fill_rate_percent >= 75.0 {
        UrgencyTier::FillingFast
    } else if fill_rate_percent >= 50.0 {
        UrgencyTier::Moderate
    } else {
        UrgencyTier::Available
    }
}

/// Inputs to the snapshot derivation: raw counts plus the optional
/// backend-precomputed values.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityInput {
    pub capacity: u32,
    pub enrolled_count: u32,
    pub fill_rate_percent: Option<f64>,
    pub urgency_level: Option<UrgencyTier>,
}

impl AvailabilityInput {
    pub fn from_session(session: &Session) -> Self {
        Self {
            capacity: session.capacity,
            enrolled_count: session.enrolled_count,
            fill_rate_percent: session.fill_rate_percent,
            urgency_level: session.urgency_level,
        }
    }

    pub fn from_row(row: &SessionViewRow) -> Self {
        Self {
            capacity: row.capacity,
            enrolled_count: row.enrolled_count,
            fill_rate_percent: row.fill_rate_percent,
            urgency_level: row.urgency_level,
        }
    }
}

/// Derived availability snapshot. Not persisted; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// Never negative, even when `enrolled_count > capacity`.
    pub spots_remaining: u32,
    /// Raw fill rate used for tier decisions; may exceed 100.
    pub fill_rate_percent: f64,
    pub urgency: UrgencyTier,
    /// Full by tier or by raw counts, whichever fires first. The tier can
    /// mark a session full before counts catch up (manual holds), and the
    /// counts can mark it full before the tier does.
    pub is_full: bool,
}

impl AvailabilitySnapshot {
    /// Derive a snapshot from counts and the optional backend values.
    pub fn derive(input: &AvailabilityInput) -> Self {
        let spots_remaining = input.capacity.saturating_sub(input.enrolled_count);

        // Capacity is > 0 in well-formed data; a degenerate zero-capacity
        // row reads as full rather than dividing by zero.
        let local_rate = if input.capacity == 0 {
            100.0
        } else {
            f64::from(input.enrolled_count) / f64::from(input.capacity) * 100.0
        };
        let fill_rate_percent = input.fill_rate_percent.unwrap_or(local_rate);

        let urgency = input
            .urgency_level
            .unwrap_or_else(|| classify(fill_rate_percent));

        let is_full = urgency == UrgencyTier::Full || input.enrolled_count >= input.capacity;

        Self {
            spots_remaining,
            fill_rate_percent,
            urgency,
            is_full,
        }
    }

    /// Fill rate clamped to [0, 100] for display purposes only.
    pub fn display_fill_rate(&self) -> f64 {
        self.fill_rate_percent.clamp(0.0, 100.0)
    }
}

/// The single affordance a session row offers. Mutually exclusive: a full
/// session shows only the waitlist action, an open one only select.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    Select,
    JoinWaitlist,
}

/// Which action the consuming view must render for this snapshot.
pub fn action(snapshot: &AvailabilitySnapshot) -> SessionAction {
    if snapshot.is_full {
        SessionAction::JoinWaitlist
    } else {
        SessionAction::Select
    }
}

/// Spots badge shown on a session row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotsBadge {
    /// Session is full; the row offers the waitlist.
    Full,
    /// Filling fast with an exact count, e.g. "Only 3 left".
    SpotsLeft { label: String },
    /// Filling fast on a Saturday: demand is volatile enough that a stale
    /// exact count misleads more than a qualitative signal.
    FillingFast,
}

impl SpotsBadge {
    pub fn label(&self) -> &str {
        match self {
            SpotsBadge::Full => "Full - Join Waitlist",
            SpotsBadge::SpotsLeft { label } => label,
            SpotsBadge::FillingFast => "Filling Fast!",
        }
    }
}

/// Badge for a session row, if any.
///
/// Presentation rule only: the Saturday special case swaps the label, it
/// never alters `spots_remaining` itself.
pub fn spots_badge(snapshot: &AvailabilitySnapshot, day: DayOfWeek) -> Option<SpotsBadge> {
    match snapshot.urgency {
        _ if snapshot.is_full => Some(SpotsBadge::Full),
        UrgencyTier::FillingFast if day == DayOfWeek::Saturday => Some(SpotsBadge::FillingFast),
        UrgencyTier::FillingFast => Some(SpotsBadge::SpotsLeft {
            label: format!("Only {} left", snapshot.spots_remaining),
        }),
        _ => None,
    }
}

/// Whether to show the informational "popular slot" badge: weekend
/// sessions that are not full. Does not affect eligibility.
pub fn popular_slot_badge(snapshot: &AvailabilitySnapshot, day: DayOfWeek) -> bool {
    day.is_weekend() && snapshot.urgency != UrgencyTier::Full
}
