use crate::types::{DbHealthRes, HealthRes};

/// Simple health service shared by the REST API and the CLI
///
/// Liveness says nothing about the document store; database reachability is reported separately
/// through [`HealthService::db_ok`] and [`HealthService::db_failed`].
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Process liveness, without touching any upstream.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "SlugLabs is alive".into(),
        }
    }

    /// Envelope for a successful database ping.
    pub fn db_ok() -> DbHealthRes {
        DbHealthRes {
            ok: true,
            error: None,
        }
    }

    /// Envelope for a failed database ping, carrying the raw upstream message.
    pub fn db_failed(error: impl Into<String>) -> DbHealthRes {
        DbHealthRes {
            ok: false,
            error: Some(error.into()),
        }
    }
}
