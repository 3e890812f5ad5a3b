//! Shared setup for router-level tests: a config that never touches the
//! environment and mailers that record or fail instead of talking SMTP.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use perksplus::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig},
};
use perksplus_notification::{EmailConfig, Mailer, OutgoingEmail};
use tower::ServiceExt;

pub const INBOX: &str = "team@perksplus.localhost";

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(email);

        Ok(())
    }
}

pub const TRANSPORT_ERROR: &str = "535-5.7.8 Username and Password not accepted";

#[derive(Default)]
pub struct FailingMailer {
    attempts: AtomicUsize,
}

impl FailingMailer {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        anyhow::bail!(TRANSPORT_ERROR)
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        email: EmailConfig {
            smtp_host: "localhost".to_owned(),
            smtp_port: 1025,
            smtp_username: "noreply@perksplus.localhost".to_owned(),
            contact_address: INBOX.to_owned(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn setup_app(mailer: Arc<dyn Mailer>) -> Router {
    perksplus::create_app(AppState {
        config: test_config(),
        mailer,
    })
}

pub async fn post_join(app: Router, body: impl Into<Body>) -> anyhow::Result<(StatusCode, String)> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/join")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8(bytes.to_vec())?))
}

pub async fn get(app: Router, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
