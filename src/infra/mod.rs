//! Infrastructure adapters: store backends and the HTTP resource client.

pub mod client;
pub mod store;

pub use client::ResourceClient;
pub use store::{HttpSchedulingStore, InMemoryStore};
