//! Factory for creating directory instances.

use crate::db::repository::{DirectoryResult, SessionDirectory};
use std::sync::Arc;

/// Which directory backend to construct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DirectoryType {
    /// In-memory backend (tests, local development).
    Local,
}

/// Factory for `SessionDirectory` instances.
pub struct DirectoryFactory;

impl DirectoryFactory {
    /// Create a directory of the requested type.
    pub fn create(kind: DirectoryType) -> DirectoryResult<Arc<dyn SessionDirectory>> {
        match kind {
            DirectoryType::Local => Self::create_local(),
        }
    }

    /// Create the in-memory backend.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> DirectoryResult<Arc<dyn SessionDirectory>> {
        Ok(Arc::new(crate::db::repositories::LocalDirectory::new()))
    }

    #[cfg(not(feature = "local-repo"))]
    pub fn create_local() -> DirectoryResult<Arc<dyn SessionDirectory>> {
        Err(crate::db::repository::DirectoryError::configuration(
            "local-repo feature is not enabled",
        ))
    }
}
