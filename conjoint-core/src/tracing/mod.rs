//! Tracing initialization for the conjoint engine.

pub mod setup;

pub use setup::init_tracing;
