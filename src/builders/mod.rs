//! Builders to construct a wired workflow from configuration.

pub mod workflow_builder;

pub use workflow_builder::{build_store, build_workflow};
