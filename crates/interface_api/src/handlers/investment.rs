//! Investment projection handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::dto::investment::{ProjectionRequest, ProjectionResponse};
use crate::{error::ApiError, AppState};

/// Projects investment growth at monthly or yearly resolution
pub async fn projection(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    let Json(body) = payload?;
    body.validate()?;

    let projection = state
        .engine
        .project(&body.investment.to_parameters(body.currency))?;
    Ok(Json(ProjectionResponse::new(&projection, body.resolution)))
}
