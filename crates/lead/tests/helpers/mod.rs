use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use perksplus_lead::{LeadEndpoint, LeadSubmission, SubmitError};
use tokio::sync::oneshot;

/// Answers every submit with the same outcome and records what it received.
pub struct FakeEndpoint {
    outcome: Result<(), SubmitError>,
    received: Mutex<Vec<LeadSubmission>>,
}

#[allow(dead_code)]
impl FakeEndpoint {
    pub fn ok() -> Self {
        Self::answering(Ok(()))
    }

    pub fn rejecting(status: u16) -> Self {
        Self::answering(Err(SubmitError::Rejected {
            status,
            message: Some("Failed to send email".to_owned()),
        }))
    }

    pub fn offline() -> Self {
        Self::answering(Err(SubmitError::Network("connection refused".to_owned())))
    }

    fn answering(outcome: Result<(), SubmitError>) -> Self {
        Self {
            outcome,
            received: Mutex::new(vec![]),
        }
    }

    pub fn received(&self) -> Vec<LeadSubmission> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadEndpoint for FakeEndpoint {
    async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmitError> {
        self.received.lock().unwrap().push(submission.clone());

        self.outcome.clone()
    }
}

/// Holds the response until the test releases it.
pub struct GatedEndpoint {
    gate: Mutex<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl GatedEndpoint {
    pub fn new() -> (oneshot::Sender<Result<(), SubmitError>>, Self) {
        let (tx, rx) = oneshot::channel();

        (
            tx,
            Self {
                gate: Mutex::new(Some(rx)),
                calls: AtomicUsize::new(0),
            },
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeadEndpoint for GatedEndpoint {
    async fn submit(&self, _submission: &LeadSubmission) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SubmitError::Network("gate dropped".to_owned()))),
            None => Err(SubmitError::Network("gate already used".to_owned())),
        }
    }
}
