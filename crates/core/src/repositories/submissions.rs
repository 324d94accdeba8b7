//! Outreach email submissions.
//!
//! Submissions are produced outside this service. The only store today is
//! [`InMemorySubmissionStore`], seeded with sample records at startup; deletions last for the
//! lifetime of the process. Handlers talk to the [`SubmissionStore`] trait so a persistent
//! store can replace it without touching them.

use crate::error::{CoreError, CoreResult};
use api_shared::{FollowUpEmail, Submission, SubmissionStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

const SUBMISSION_NOT_FOUND: &str = "Submission not found";

/// Storage for submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn list(&self) -> CoreResult<Vec<Submission>>;

    async fn get(&self, id: &str) -> CoreResult<Option<Submission>>;

    /// Remove a submission. Returns `false` if no submission had that id.
    async fn delete(&self, id: &str) -> CoreResult<bool>;
}

/// Process-local submission store.
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemorySubmissionStore {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: RwLock::new(submissions),
        }
    }

    /// Store holding the sample submissions.
    pub fn seeded() -> Self {
        Self::new(sample_submissions())
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::Upstream("submission store lock poisoned".into())
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn list(&self) -> CoreResult<Vec<Submission>> {
        Ok(self.submissions.read().map_err(poisoned)?.clone())
    }

    async fn get(&self, id: &str) -> CoreResult<Option<Submission>> {
        let submissions = self.submissions.read().map_err(poisoned)?;
        Ok(submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn delete(&self, id: &str) -> CoreResult<bool> {
        let mut submissions = self.submissions.write().map_err(poisoned)?;
        let before = submissions.len();
        submissions.retain(|s| s.id != id);
        Ok(submissions.len() != before)
    }
}

/// Parse a `drafted` / `sent` / `failed` status filter.
pub fn parse_status(value: &str) -> CoreResult<SubmissionStatus> {
    match value.trim().to_lowercase().as_str() {
        "drafted" => Ok(SubmissionStatus::Drafted),
        "sent" => Ok(SubmissionStatus::Sent),
        "failed" => Ok(SubmissionStatus::Failed),
        _ => Err(CoreError::InvalidInput("Invalid status".into())),
    }
}

/// Listing filter. Empty filter keeps everything.
#[derive(Clone, Debug, Default)]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub query: Option<String>,
}

impl SubmissionFilter {
    /// Build a filter from raw query-string values.
    pub fn from_params(status: Option<&str>, query: Option<&str>) -> CoreResult<Self> {
        let status = status
            .filter(|s| !s.trim().is_empty())
            .map(parse_status)
            .transpose()?;

        Ok(Self {
            status,
            query: query.map(str::to_string),
        })
    }

    pub fn matches(&self, submission: &Submission) -> bool {
        if let Some(status) = self.status {
            if submission.status != status {
                return false;
            }
        }

        let query = self
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();
        if query.is_empty() {
            return true;
        }

        submission.opportunity_name.to_lowercase().contains(&query)
            || submission
                .professor_or_employer_name
                .to_lowercase()
                .contains(&query)
    }
}

/// Follow-up email for a previous submission.
pub fn follow_up_email(submission: &Submission) -> FollowUpEmail {
    let opportunity = &submission.opportunity_name;
    let recipient = &submission.professor_or_employer_name;

    FollowUpEmail {
        subject: format!("Follow-up: {opportunity}"),
        body: format!(
            "Dear {recipient},\n\n\
             I hope this email finds you well. I wanted to follow up on my previous application \
             for the {opportunity} position that I submitted recently.\n\n\
             I remain very interested in this opportunity and would welcome the chance to discuss \
             how my skills and experience could contribute to your research.\n\n\
             If you need any additional information or materials from me, please don't hesitate \
             to let me know. I would be happy to provide references or any other documentation \
             that might be helpful.\n\n\
             Thank you for your time and consideration. I look forward to hearing from you.\n\n\
             Best regards,\n\
             [Your Name]"
        ),
    }
}

/// Submission lookups over a [`SubmissionStore`].
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, filter: &SubmissionFilter) -> CoreResult<Vec<Submission>> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|s| filter.matches(s))
            .collect())
    }

    /// # Errors
    /// Returns [`CoreError::NotFound`] if no submission has that id.
    pub async fn get(&self, id: &str) -> CoreResult<Submission> {
        self.store.get(id).await?.ok_or_else(|| {
            tracing::debug!("submission {} not found", id);
            CoreError::NotFound(SUBMISSION_NOT_FOUND.into())
        })
    }

    /// Delete a submission, returning its id.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no submission has that id.
    pub async fn delete(&self, id: &str) -> CoreResult<String> {
        if self.store.delete(id).await? {
            tracing::info!("deleted submission {}", id);
            Ok(id.to_string())
        } else {
            tracing::debug!("submission {} not found", id);
            Err(CoreError::NotFound(SUBMISSION_NOT_FOUND.into()))
        }
    }

    /// # Errors
    /// Returns [`CoreError::NotFound`] if no submission has that id.
    pub async fn follow_up(&self, id: &str) -> CoreResult<FollowUpEmail> {
        let submission = self.get(id).await?;
        Ok(follow_up_email(&submission))
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse::<DateTime<Utc>>().unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    opportunity_name: &str,
    professor_or_employer_name: &str,
    recipient_email: &str,
    subject: &str,
    body: &str,
    date: &str,
    status: SubmissionStatus,
) -> Submission {
    Submission {
        id: id.into(),
        opportunity_name: opportunity_name.into(),
        professor_or_employer_name: professor_or_employer_name.into(),
        recipient_email: recipient_email.into(),
        subject: subject.into(),
        body: body.into(),
        date: timestamp(date),
        status,
    }
}

/// The sample submissions shown to students before real outreach tracking exists.
pub fn sample_submissions() -> Vec<Submission> {
    vec![
        sample(
            "sub_001",
            "Machine Learning Research Assistant",
            "Dr. Sarah Chen",
            "schen@ucsc.edu",
            "Application for ML Research Assistant Position",
            "Dear Dr. Chen,\n\nI am writing to express my interest in the Machine Learning Research \
             Assistant position in your lab. I am a third-year Computer Science student with \
             experience in Python, TensorFlow, and PyTorch.\n\nI have completed coursework in \
             machine learning and have worked on several projects involving neural networks and \
             natural language processing. I am particularly interested in your research on \
             reinforcement learning applications.\n\nI would welcome the opportunity to discuss \
             how I can contribute to your research team.\n\nBest regards,\nAlex Johnson",
            "2026-01-15T10:30:00Z",
            SubmissionStatus::Sent,
        ),
        sample(
            "sub_002",
            "Genomics Lab Assistant",
            "Dr. Michael Rodriguez",
            "mrodriguez@ucsc.edu",
            "Interest in Genomics Research Position",
            "Dear Dr. Rodriguez,\n\nI am interested in joining your genomics research lab as a \
             research assistant. As a Biology major with a minor in Bioinformatics, I have \
             experience with DNA sequencing analysis and computational biology tools.\n\nI am \
             fascinated by your work on genetic markers and would love to contribute to ongoing \
             projects.\n\nThank you for considering my application.\n\nSincerely,\nJordan Smith",
            "2026-01-12T14:45:00Z",
            SubmissionStatus::Sent,
        ),
        sample(
            "sub_003",
            "Climate Modeling Research",
            "Dr. Emily Watson",
            "ewatson@ucsc.edu",
            "Application for Climate Research Position",
            "Dear Dr. Watson,\n\nI am reaching out regarding the climate modeling research \
             position in your lab. As an Environmental Science major with strong programming \
             skills, I am excited about the opportunity to contribute to your research on climate \
             change prediction models.\n\nI have experience with Python, R, and various data \
             visualization tools. My coursework has included atmospheric science and \
             environmental data analysis.\n\nI would be grateful for the chance to discuss this \
             opportunity further.\n\nBest regards,\nMorgan Lee",
            "2026-01-17T09:15:00Z",
            SubmissionStatus::Drafted,
        ),
        sample(
            "sub_004",
            "Quantum Computing Internship",
            "Dr. David Park",
            "dpark@ucsc.edu",
            "Quantum Computing Research Interest",
            "Dear Dr. Park,\n\nI am writing to inquire about research opportunities in quantum \
             computing. As a Physics and Computer Science double major, I am fascinated by the \
             intersection of these fields.\n\nI have completed coursework in quantum mechanics \
             and have been learning about quantum algorithms in my spare time.\n\nI would love to \
             learn more about potential research opportunities in your lab.\n\nSincerely,\nSam Kim",
            "2026-01-10T16:20:00Z",
            SubmissionStatus::Failed,
        ),
        sample(
            "sub_005",
            "Psychology Research Study Coordinator",
            "Dr. Lisa Thompson",
            "lthompson@ucsc.edu",
            "Application for Research Coordinator Position",
            "Dear Dr. Thompson,\n\nI am interested in the Research Study Coordinator position in \
             your cognitive psychology lab. With my background in Psychology and experience \
             coordinating student organizations, I believe I would be a great fit for this \
             role.\n\nI am detail-oriented and have experience with IRB protocols and participant \
             recruitment.\n\nBest,\nTaylor Williams",
            "2026-01-14T11:00:00Z",
            SubmissionStatus::Sent,
        ),
    ]
}
