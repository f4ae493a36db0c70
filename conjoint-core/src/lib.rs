//! Core types, attribute space, errors, config, events, and tracing for the
//! conjoint choice engine.
//!
//! This crate is the leaf of the workspace: `conjoint-analysis` builds the
//! choice simulator and the share estimator on top of the types and lookup
//! tables defined here. Everything in this crate is pure, in-memory data;
//! the only filesystem touch is optional config loading.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod space;
pub mod tracing;
pub mod types;

pub use errors::{ConfigError, EngineError, EstimateError, SimulationError, SpaceError};
pub use space::AttributeSpace;
pub use types::{AdTier, Attribute, Level, ProductProfile, VideoQuality};
