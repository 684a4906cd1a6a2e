//! Scheduling store backends.

pub mod http;
pub mod memory;

pub use http::HttpSchedulingStore;
pub use memory::InMemoryStore;
