//! Service configuration structures.
//!
//! The "mock vs. real backend" decision lives here, resolved once at process
//! start: the builders turn this configuration into a concrete store
//! implementation, and call sites only ever see the trait.

use serde::{Deserialize, Serialize};

/// Store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendConfig {
    /// In-memory store for development/testing.
    InMemory,
    /// Remote store backed by the operations service.
    Http,
}

/// Root service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Store backend selection.
    pub store: StoreBackendConfig,
    /// Base URL of the operations service (HTTP backend only).
    pub operations_url: String,
    /// Timeout for outbound requests, in seconds.
    pub request_timeout_secs: u64,
    /// Bound on the in-memory audit buffer.
    pub audit_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            store: StoreBackendConfig::InMemory,
            operations_url: "http://localhost:8003".to_owned(),
            request_timeout_secs: 30,
            audit_capacity: 1024,
        }
    }
}

impl ServiceConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".into());
        }
        if self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0".into());
        }
        if self.store == StoreBackendConfig::Http && self.operations_url.trim().is_empty() {
            return Err("operations_url must be set for the http backend".into());
        }
        Ok(())
    }

    /// Parse service configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Reads a `.env` file when present, then `CONDO_STORE_BACKEND`
    /// (`in_memory` or `http`), `OPERATIONS_SERVICE_URL`,
    /// `CONDO_REQUEST_TIMEOUT_SECS`, and `CONDO_AUDIT_CAPACITY`.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let mut cfg = Self::default();

        if let Ok(backend) = std::env::var("CONDO_STORE_BACKEND") {
            cfg.store = match backend.as_str() {
                "in_memory" => StoreBackendConfig::InMemory,
                "http" => StoreBackendConfig::Http,
                other => return Err(format!("unknown store backend `{other}`")),
            };
        }
        if let Ok(url) = std::env::var("OPERATIONS_SERVICE_URL") {
            cfg.operations_url = url;
        }
        if let Ok(timeout) = std::env::var("CONDO_REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = timeout
                .parse()
                .map_err(|e| format!("invalid CONDO_REQUEST_TIMEOUT_SECS: {e}"))?;
        }
        if let Ok(capacity) = std::env::var("CONDO_AUDIT_CAPACITY") {
            cfg.audit_capacity = capacity
                .parse()
                .map_err(|e| format!("invalid CONDO_AUDIT_CAPACITY: {e}"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
