//! Directory implementations.
//!
//! - `local`: in-memory implementation for unit testing and local
//!   development. A remote implementation plugs in behind the same
//!   `SessionDirectory` trait.
#[cfg(feature = "local-repo")]
pub mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalDirectory;
