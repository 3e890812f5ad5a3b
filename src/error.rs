use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use perksplus_lead::ApiMessage;
use thiserror::Error;

pub const DELIVERY_FAILED: &str = "Failed to send email";
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Delivery error: {0}")]
    Delivery(anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Delivery(e) => {
                tracing::error!("Error sending email: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, DELIVERY_FAILED.to_string())
            }
        };

        (status_code, Json(ApiMessage::new(message))).into_response()
    }
}
