//! Wire types and the mocked account operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request/response schema a real backend would serve,
//! and `mock` stands in for that backend with fixed-latency local futures.

pub mod mock;
pub mod types;
