use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use perksplus_lead::{ApiMessage, LeadSubmission};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{AppError, INVALID_BODY},
    routes::AppState,
};

pub const SENT: &str = "Email sent successfully";

#[derive(Deserialize)]
pub struct JoinInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
}

/// POST /api/join - relay a lead to the operator inbox
///
/// One delivery attempt per request, no retry.
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<JoinInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input.map_err(|rejection| {
        tracing::warn!(error = %rejection, "rejected join request body");
        AppError::BadRequest(INVALID_BODY.to_string())
    })?;

    let submission = LeadSubmission {
        email: input.email.unwrap_or_default(),
        name: input.name,
        organization: input.organization,
        role: input.role,
        message: input.message,
    }
    .normalized();

    submission.validate()?;

    let email = perksplus_notification::lead::compose(
        &submission,
        app_state.config.email.contact_address.to_owned(),
    )
    .map_err(AppError::Delivery)?;

    app_state
        .mailer
        .send(email)
        .await
        .map_err(AppError::Delivery)?;

    tracing::info!(
        role = submission.role.as_deref().unwrap_or("-"),
        "Lead notification sent"
    );

    Ok(Json(ApiMessage::new(SENT)))
}
