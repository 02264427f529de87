//! Full analysis handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use domain_analysis::AnalysisResult;
use validator::Validate;

use crate::cache::AnalysisCache;
use crate::dto::analysis::AnalysisRequestBody;
use crate::{error::ApiError, AppState};

/// Runs a complete analysis, serving repeated bodies from the cache
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequestBody>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(body) = payload?;
    body.validate()?;

    let key = match &state.cache {
        Some(cache) => {
            let key = AnalysisCache::key_for(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
            if let Some(hit) = cache.get(&key) {
                return Ok(Json(hit));
            }
            Some(key)
        }
        None => None,
    };

    let result = state.engine.analyze(&body.to_request())?;

    if let (Some(cache), Some(key)) = (&state.cache, key) {
        cache.insert(key, result.clone());
    }
    Ok(Json(result))
}
