use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    simulator::{DEFAULT_SPEED_KMH, Hazard},
};

#[derive(Deserialize)]
pub struct AssessQuery {
    pub speed: Option<u32>,
    pub hazard: Option<String>,
}

/// GET /api/risk-simulator?speed=60&hazard=pothole
pub async fn assess(
    query: Result<Query<AssessQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let hazard = match query.hazard.as_deref() {
        Some(value) => Hazard::from_str(value)
            .map_err(|_| AppError::BadRequest(format!("Unknown hazard: {value}")))?,
        None => Hazard::default(),
    };

    Ok(Json(crate::simulator::assess(
        query.speed.unwrap_or(DEFAULT_SPEED_KMH),
        hazard,
    )))
}
