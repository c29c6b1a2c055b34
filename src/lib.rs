//! # Rosterkit
//!
//! Session availability derivation and cross-reference navigation core for a
//! youth-sports registration product.
//!
//! This crate owns the one subsystem of the product with real contracts: the
//! logic that turns raw session/program/location/coach records into derived
//! availability snapshots (spots remaining, fill rate, urgency tier),
//! computes payment-plan offers from a price and duration, and lets a caller
//! drill from a session into its location, coach, or program and back again
//! through a graph of on-demand detail views.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Typed identifiers and the public DTO surface
//! - [`models`]: Read models, age-range parsing, denormalized view rows
//! - [`db`]: Directory abstraction over the remote data service
//!   (repository pattern, in-memory backend for tests and local dev)
//! - [`services`]: Business logic — payment plans, availability derivation,
//!   the entity fetcher pipeline
//! - [`view`]: Detail-view state machine, nested navigation, registration
//!   action forwarding
//!
//! ## Scope
//!
//! Read-only with respect to the remote service: enrollment counts, ratings,
//! and capacities are never written here. Registration and waitlist actions
//! are forwarded to caller-supplied hooks.

// Allow large error types - DirectoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod view;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
