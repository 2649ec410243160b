//! Observability for Tractor.
//! `tracing` crate with `EnvFilter`, per-module log levels, shared span names.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
