//! Business logic services.
//!
//! - `payment_plans`: payment-plan arithmetic and display
//! - `availability`: availability snapshot derivation and urgency tiers
//! - `fetcher`: the entity fetch pipeline (scope, filter, sort, map)

pub mod availability;
pub mod fetcher;
pub mod payment_plans;

#[cfg(test)]
#[path = "availability_tests.rs"]
mod availability_tests;
