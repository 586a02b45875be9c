//! Observability: tracing subscriber setup.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter, with_bootstrap_tracing};
