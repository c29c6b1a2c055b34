//! Synchronous card composition for session lists.
//!
//! The session list renders cards from already-loaded rows; everything
//! here is derived on the spot (snapshot, plans, badges), with no fetch
//! and no caching. Selecting a card is what opens a session detail view.

use crate::models::view_rows::SessionViewRow;
use crate::services::availability::{
    self, AvailabilityInput, AvailabilitySnapshot, SessionAction, SpotsBadge,
};
use crate::services::payment_plans::{
    calculate_payment_plans, format_price_with_payment_option, recommended_plan_index, PaymentPlan,
};

/// Everything a session card renders, derived from one view row.
#[derive(Debug, Clone)]
pub struct SessionCardModel {
    pub snapshot: AvailabilitySnapshot,
    /// Fixed order: Pay in Full, Monthly, Bi-Weekly.
    pub plans: [PaymentPlan; 3],
    pub recommended_plan: usize,
    /// "$169 or $56/mo" style line.
    pub price_line: String,
    pub spots_badge: Option<SpotsBadge>,
    pub popular_slot: bool,
    /// "Monday 4:00 PM".
    pub schedule_label: String,
    /// The one affordance this card shows: select or join-waitlist.
    pub action: SessionAction,
    pub age_label: Option<String>,
}

impl SessionCardModel {
    /// Derive the card model. Pure and deterministic; safe on every
    /// render.
    pub fn build(row: &SessionViewRow) -> Self {
        let snapshot = AvailabilitySnapshot::derive(&AvailabilityInput::from_row(row));
        let plans = calculate_payment_plans(row.price_cents, row.duration_weeks);

        Self {
            spots_badge: availability::spots_badge(&snapshot, row.day_of_week),
            popular_slot: availability::popular_slot_badge(&snapshot, row.day_of_week),
            action: availability::action(&snapshot),
            recommended_plan: recommended_plan_index(row.price_cents),
            price_line: format_price_with_payment_option(row.price_cents, row.duration_weeks),
            schedule_label: row.schedule_label(),
            age_label: row.age_label.clone(),
            snapshot,
            plans,
        }
    }
}
