//! Debt payoff handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use domain_debt::DebtReport;
use validator::Validate;

use crate::dto::debt::PayoffPlanRequest;
use crate::{error::ApiError, AppState};

/// Computes debt metrics and a payoff plan
pub async fn payoff_plan(
    State(state): State<AppState>,
    payload: Result<Json<PayoffPlanRequest>, JsonRejection>,
) -> Result<Json<DebtReport>, ApiError> {
    let Json(body) = payload?;
    body.validate()?;

    let report = state.engine.debt_plan(
        &body.debts(),
        &body.income(),
        body.strategy,
        &body.extra_payment(),
    )?;
    Ok(Json(report))
}
