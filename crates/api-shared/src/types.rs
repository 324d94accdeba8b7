//! JSON wire types.
//!
//! Field names follow the established JSON contract (`_id`, camelCase) so existing clients keep
//! working; Rust-side names are snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One row of the position directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PositionSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
}

/// Full view of a single position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PositionDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub lab_name: String,
    pub contact_email: String,
    pub link: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PositionsRes {
    pub positions: Vec<PositionSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PositionRes {
    pub position: PositionDetail,
}

/// The position currently offered to the student as their match, if any exist.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchRes {
    pub position: Option<PositionSummary>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PositionsQuery {
    /// Case-insensitive text matched against title, subject and short description
    pub q: Option<String>,
}

/// Delivery state of an outreach email.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Drafted,
    Sent,
    Failed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Drafted => "drafted",
            SubmissionStatus::Sent => "sent",
            SubmissionStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email drafted or sent to a lab or professor about an opportunity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    pub opportunity_name: String,
    pub professor_or_employer_name: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub status: SubmissionStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionsRes {
    pub submissions: Vec<Submission>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRes {
    pub submission: Submission,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSubmissionRes {
    pub success: bool,
    pub deleted_id: String,
}

/// Generated follow-up email text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FollowUpEmail {
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubmissionsQuery {
    /// One of `drafted`, `sent` or `failed`
    pub status: Option<String>,
    /// Case-insensitive text matched against opportunity and professor names
    pub q: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DbHealthRes {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
