//! Detail-view state machine and navigation contract.
//!
//! - `detail`: one generic, dismissible detail surface keyed by an
//!   [`crate::models::entities::EntityRef`], with nested navigation slots
//! - `actions`: caller-supplied registration hooks and dispatch
//! - `card`: synchronous card composition for session lists

pub mod actions;
pub mod card;
pub mod detail;


#[cfg(test)]
#[path = "card_tests.rs"]
mod card_tests;
