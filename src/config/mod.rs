//! Configuration models for backend selection and service settings.

pub mod service;

pub use service::{ServiceConfig, StoreBackendConfig};
