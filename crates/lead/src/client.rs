use async_trait::async_trait;

use crate::{ApiMessage, LeadEndpoint, LeadSubmission, SubmitError};

pub const JOIN_PATH: &str = "/api/join";

/// Posts submissions as JSON to the mail relay.
#[derive(Clone, Debug)]
pub struct HttpLeadEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpLeadEndpoint {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        let url = format!("{}{JOIN_PATH}", base_url.as_ref().trim_end_matches('/'));

        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LeadEndpoint for HttpLeadEndpoint {
    async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .map(|body| body.message);

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(
            HttpLeadEndpoint::new("https://perksplus.in/").url(),
            "https://perksplus.in/api/join"
        );
        assert_eq!(
            HttpLeadEndpoint::new("http://127.0.0.1:3000").url(),
            "http://127.0.0.1:3000/api/join"
        );
    }
}
