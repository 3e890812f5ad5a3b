use async_trait::async_trait;

use crate::LeadSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("relay answered with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),
}

/// Where a lead form sends its submission.
#[async_trait]
pub trait LeadEndpoint: Send + Sync {
    /// Performs exactly one delivery attempt.
    async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmitError>;
}
