//! Payment-plan arithmetic.
//!
//! Pure functions of a total price (in cents) and a session duration (in
//! weeks). Deterministic and allocation-light, safe to call on every
//! render. Per-payment amounts are kept exact (f64 cents) through the
//! arithmetic; rounding happens only at display.

use crate::models::display::format_whole_dollars;
use serde::{Deserialize, Serialize};

/// Fixed pay-in-full discount rate.
pub const PAY_IN_FULL_DISCOUNT: f64 = 0.05;

/// Standard season length used when a duration is not supplied.
pub const DEFAULT_SESSION_WEEKS: u32 = 9;

/// Totals at or above this (cents) get the Monthly plan recommended;
/// below it, Pay in Full. Fixed business rule, not configurable here.
pub const MONTHLY_RECOMMENDATION_THRESHOLD_CENTS: i64 = 15_000;

/// One payment-plan offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub name: String,
    /// Number of installments; `None` only for plans with no schedule.
    pub installments: Option<u32>,
    /// Exact per-installment amount in cents, unrounded.
    pub per_payment_cents: Option<f64>,
    /// What the family pays in total under this plan.
    pub total_cents: i64,
    /// Savings versus the undiscounted total, when any.
    pub savings_cents: Option<i64>,
    pub description: String,
}

impl PaymentPlan {
    /// Per-installment amount rounded to whole dollars for display.
    pub fn per_payment_display(&self) -> Option<String> {
        self.per_payment_cents.map(format_whole_dollars)
    }
}

/// Compute the three payment-plan offers for a price and duration.
///
/// Always returns exactly three plans, in fixed order: Pay in Full,
/// Monthly, Bi-Weekly. No plan is ever omitted; for short sessions the
/// Monthly and Bi-Weekly plans may have the same installment count, which
/// is expected. `session_weeks = 1` degenerates Monthly to a single
/// payment equal to the total — intentional, not an error.
pub fn calculate_payment_plans(total_price_cents: i64, session_weeks: u32) -> [PaymentPlan; 3] {
    let total = total_price_cents.max(0);
    let weeks = session_weeks.max(1);

    let discounted = ((total as f64) * (1.0 - PAY_IN_FULL_DISCOUNT)).round() as i64;
    let savings = total - discounted;

    let monthly_installments = weeks.div_ceil(4);
    let monthly_per_payment = total as f64 / monthly_installments as f64;

    let bi_weekly_installments = weeks.div_ceil(2);
    let bi_weekly_per_payment = total as f64 / bi_weekly_installments as f64;

    [
        PaymentPlan {
            name: "Pay in Full".to_string(),
            installments: Some(1),
            per_payment_cents: Some(discounted as f64),
            total_cents: discounted,
            savings_cents: Some(savings),
            description: format!(
                "One payment of {} - save 5%",
                format_whole_dollars(discounted as f64)
            ),
        },
        PaymentPlan {
            name: "Monthly Payments".to_string(),
            installments: Some(monthly_installments),
            per_payment_cents: Some(monthly_per_payment),
            total_cents: total,
            savings_cents: None,
            description: format!(
                "{} monthly payments of {}",
                monthly_installments,
                format_whole_dollars(monthly_per_payment)
            ),
        },
        PaymentPlan {
            name: "Bi-Weekly Payments".to_string(),
            installments: Some(bi_weekly_installments),
            per_payment_cents: Some(bi_weekly_per_payment),
            total_cents: total,
            savings_cents: None,
            description: format!(
                "{} bi-weekly payments of {}",
                bi_weekly_installments,
                format_whole_dollars(bi_weekly_per_payment)
            ),
        },
    ]
}

/// Plans for the standard 9-week season.
pub fn calculate_default_payment_plans(total_price_cents: i64) -> [PaymentPlan; 3] {
    calculate_payment_plans(total_price_cents, DEFAULT_SESSION_WEEKS)
}

/// Index of the recommended plan in the `calculate_payment_plans` result:
/// Pay in Full below the $150 threshold, Monthly at or above it.
pub fn recommended_plan_index(total_price_cents: i64) -> usize {
    if total_price_cents < MONTHLY_RECOMMENDATION_THRESHOLD_CENTS {
        0
    } else {
        1
    }
}

/// The recommended plan itself.
pub fn recommended_payment_plan(total_price_cents: i64, session_weeks: u32) -> PaymentPlan {
    let plans = calculate_payment_plans(total_price_cents, session_weeks);
    plans[recommended_plan_index(total_price_cents)].clone()
}

/// Display string combining the total price with the monthly per-payment
/// figure, both rounded to the nearest whole dollar: `"$169 or $56/mo"`.
pub fn format_price_with_payment_option(total_price_cents: i64, session_weeks: u32) -> String {
    let total = total_price_cents.max(0);
    let installments = session_weeks.max(1).div_ceil(4);
    let monthly = total as f64 / installments as f64;
    format!(
        "{} or {}/mo",
        format_whole_dollars(total as f64),
        format_whole_dollars(monthly)
    )
}
