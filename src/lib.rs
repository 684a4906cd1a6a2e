//! # Condo Ops
//!
//! The scheduling approval core of a condominium-management dashboard.
//!
//! Residents reserve shared areas (party hall, pool deck, meeting room) for a
//! time window; a manager later approves or rejects the request. This crate
//! owns that workflow: it validates creation requests, forces every new
//! reservation into the `pending` state, and performs the single legal
//! transition out of it with actor attribution.
//!
//! ## Layout
//!
//! - [`core`] holds the domain model, the scheduling workflow, the store
//!   contract, session identity, and audit sinks.
//! - [`infra`] provides store backends: an in-memory store for development
//!   and tests, and an HTTP store speaking to the operations microservice.
//! - [`config`] and [`builders`] select and wire a backend at process start,
//!   so call sites never branch on "mock vs. real".
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use condo_ops::builders::build_workflow;
//! use condo_ops::config::ServiceConfig;
//! use condo_ops::core::{SchedulingRequest, SessionContext};
//!
//! let session = Arc::new(SessionContext::new());
//! session.sign_in(2, "token".into());
//!
//! let workflow = build_workflow(&ServiceConfig::default(), Arc::clone(&session))?;
//! let created = workflow.create(request).await?;
//! let approved = workflow.approve(created.id).await?;
//! ```
//!
//! For complete flows, see `tests/approval_flow_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Domain model, workflow, store contract, session, and audit.
pub mod core;
/// Configuration models for backend selection and service settings.
pub mod config;
/// Builders to construct a wired workflow from configuration.
pub mod builders;
/// Infrastructure adapters: store backends and the HTTP resource client.
pub mod infra;
/// Shared utilities.
pub mod util;
