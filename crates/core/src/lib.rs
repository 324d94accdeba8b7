//! # SlugLabs Core
//!
//! Core business logic for the SlugLabs research-position directory.
//!
//! This crate contains pure data operations:
//! - Subject inference for positions without an explicit subject (`classifier`)
//! - Field reconciliation for inconsistently shaped position documents (`normalizer`)
//! - The canonical [`Position`] record and the stores and services built on it
//! - Submission tracking over a replaceable store
//!
//! **No API concerns**: HTTP servers, status codes and envelopes belong in `api-rest` or
//! `api-shared`.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod normalizer;
pub mod position;
pub mod repositories;

pub use classifier::{classify, infer_subject};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use normalizer::{derive_short_description, pick_first};
pub use position::Position;
pub use repositories::positions::{
    InMemoryPositionStore, MongoPositionStore, PositionService, PositionStore,
};
pub use repositories::submissions::{
    InMemorySubmissionStore, SubmissionFilter, SubmissionService, SubmissionStore,
};

// Shared wire types, re-exported so callers need only depend on the core crate.
pub use api_shared as wire;
pub use mongodb::bson;
