//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_DATABASE_NAME, DEFAULT_POSITIONS_COLLECTION};
use crate::{CoreError, CoreResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    mongodb_uri: String,
    database_name: String,
    positions_collection: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if any value is empty or whitespace.
    pub fn new(
        mongodb_uri: String,
        database_name: String,
        positions_collection: String,
    ) -> CoreResult<Self> {
        if mongodb_uri.trim().is_empty() {
            return Err(CoreError::Config("MONGODB_URI cannot be empty".into()));
        }
        if database_name.trim().is_empty() {
            return Err(CoreError::Config("database name cannot be empty".into()));
        }
        if positions_collection.trim().is_empty() {
            return Err(CoreError::Config(
                "positions collection cannot be empty".into(),
            ));
        }

        Ok(Self {
            mongodb_uri,
            database_name,
            positions_collection,
        })
    }

    /// Build configuration from optional raw values, as read from the environment.
    ///
    /// The URI is required; database and collection fall back to their defaults when absent or
    /// blank.
    pub fn from_env_values(
        mongodb_uri: Option<String>,
        database_name: Option<String>,
        positions_collection: Option<String>,
    ) -> CoreResult<Self> {
        let mongodb_uri = non_blank(mongodb_uri)
            .ok_or_else(|| CoreError::Config("MONGODB_URI is not set".into()))?;

        Self::new(
            mongodb_uri,
            non_blank(database_name).unwrap_or_else(|| DEFAULT_DATABASE_NAME.into()),
            non_blank(positions_collection)
                .unwrap_or_else(|| DEFAULT_POSITIONS_COLLECTION.into()),
        )
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn positions_collection(&self) -> &str {
        &self.positions_collection
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let cfg =
            CoreConfig::from_env_values(Some("mongodb://localhost:27017".into()), None, None)
                .unwrap();

        assert_eq!(cfg.mongodb_uri(), "mongodb://localhost:27017");
        assert_eq!(cfg.database_name(), "test");
        assert_eq!(cfg.positions_collection(), "real_opportunities");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = CoreConfig::from_env_values(
            Some(" mongodb://db ".into()),
            Some("  ".into()),
            Some("".into()),
        )
        .unwrap();

        assert_eq!(cfg.mongodb_uri(), "mongodb://db");
        assert_eq!(cfg.database_name(), "test");
        assert_eq!(cfg.positions_collection(), "real_opportunities");
    }

    #[test]
    fn test_overrides_kept() {
        let cfg = CoreConfig::from_env_values(
            Some("mongodb://db".into()),
            Some("sluglabs".into()),
            Some("positions".into()),
        )
        .unwrap();

        assert_eq!(cfg.database_name(), "sluglabs");
        assert_eq!(cfg.positions_collection(), "positions");
    }

    #[test]
    fn test_missing_uri_rejected() {
        let result = CoreConfig::from_env_values(None, None, None);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = CoreConfig::from_env_values(Some("   ".into()), None, None);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_new_rejects_blank_collection() {
        let result = CoreConfig::new("mongodb://db".into(), "test".into(), " ".into());
        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
