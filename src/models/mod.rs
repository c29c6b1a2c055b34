//! Domain read models and display mapping.

pub mod age_range;
pub mod display;
pub mod entities;
pub mod macros;
pub mod view_rows;

#[cfg(test)]
#[path = "age_range_tests.rs"]
mod age_range_tests;

#[cfg(test)]
#[path = "entities_tests.rs"]
mod entities_tests;
