//! # candor-observability
//!
//! Tracing subscriber setup and the structured events emitted around each
//! submission.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config};
