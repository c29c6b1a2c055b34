//! Directory configuration and environment variable handling.

use crate::api::OrganizationId;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

/// Directory configuration: the active organization (tenant boundary for
/// every query) and where the remote data service lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// The active organization; all queries are scoped to it.
    pub organization_id: String,
    /// Remote data service endpoint. Unused by the local backend.
    #[serde(default)]
    pub service_url: Option<String>,
}

impl DirectoryConfig {
    /// Create a new directory configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ROSTER_ORG_ID` (required): active organization id
    /// - `ROSTER_SERVICE_URL` (optional): remote data service endpoint
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self> {
        let organization_id =
            env::var("ROSTER_ORG_ID").context("ROSTER_ORG_ID environment variable not set")?;
        let service_url = env::var("ROSTER_SERVICE_URL").ok();
        Ok(Self {
            organization_id,
            service_url,
        })
    }

    /// Parse configuration from a TOML document.
    ///
    /// ```toml
    /// organization_id = "org-1"
    /// service_url = "https://data.example.com"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("invalid directory configuration TOML")
    }

    /// Typed organization id.
    pub fn organization(&self) -> OrganizationId {
        OrganizationId::new(self.organization_id.clone())
    }
}
