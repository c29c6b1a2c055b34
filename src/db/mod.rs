//! Directory module: read-only access to the remote data service.
//!
//! Follows the repository pattern so storage backends can be swapped:
//!
//! - `repository`: trait definition and structured errors
//! - `repositories::local`: in-memory implementation for unit testing and
//!   local development (feature `local-repo`)
//! - `config`: environment/TOML configuration
//! - `factory`: constructs directory instances
//!
//! The remote service's schema and query execution are external
//! collaborators; this module specifies only the interface this layer
//! consumes. Everything is read-only: enrollment counts, ratings, and
//! capacities are never written from here.

#[cfg(not(any(feature = "local-repo")))]
compile_error!("Enable at least one directory backend feature.");


pub mod config;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use config::DirectoryConfig;
pub use factory::{DirectoryFactory, DirectoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalDirectory;
pub use repository::{DirectoryError, DirectoryResult, ErrorContext, SessionDirectory};
