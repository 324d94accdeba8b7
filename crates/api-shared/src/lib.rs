//! # API Shared
//!
//! Shared definitions for the SlugLabs APIs.
//!
//! Contains:
//! - JSON wire types for positions, submissions and health (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `sluglabs-core`, `api-rest` and the CLI so that every surface emits the same shapes.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
