//! Request handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amortization::schedule::{AmortizationCalculator, Schedule};
use crate::core::loan::{LoanError, LoanQuery};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Everything a schedule request can fail with. All of it is the caller's
/// fault, so every variant answers 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Loan(#[from] LoanError),
    #[error("invalid query string: {0}")]
    Query(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Query(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("rejected schedule request: {}", self);
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Query parameters of `GET /api/loan/emi`. All required.
///
/// The tenure is taken signed so a negative value surfaces as an
/// invalid-argument error rather than a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiScheduleParams {
    pub principal: Decimal,
    pub annual_interest_rate: Decimal,
    pub tenure_months: i64,
}

/// `getEMISchedule`: the repayment schedule for one loan.
pub async fn get_emi_schedule(
    params: Result<Query<EmiScheduleParams>, QueryRejection>,
) -> Result<Json<Schedule>, ApiError> {
    let Query(params) = params?;
    let query = LoanQuery::from_signed(
        params.principal,
        params.annual_interest_rate,
        params.tenure_months,
    )?;
    let schedule = AmortizationCalculator::compute(&query)?;

    info!(
        "schedule: principal={} rate={}% tenure={} emi={}",
        query.principal(),
        query.annual_rate_percent(),
        query.tenure_months(),
        schedule.installment().unwrap_or_default()
    );

    Ok(Json(schedule))
}
