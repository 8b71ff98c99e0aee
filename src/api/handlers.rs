//! HTTP request handlers for the timecard engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::ingest::{MispunchReader, PunchParser};
use crate::models::{EmployeeIndex, IssueLog, Timecard};
use crate::payroll::PayrollRun;
use crate::reconcile::{MispunchReconciler, ReconciliationLedger};
use crate::schedule::{PayPeriodResolver, TimecardFile, discover_timecards};

use super::request::{ClassifyRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Turns a body extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // the body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

/// Handler for POST /classify endpoint.
///
/// Classifies one work week of daily hours into the pay tiers.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(error) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Invalid classification request"
        );
        return error_response(ApiErrorResponse::bad_request(error));
    }

    let tally = state.jurisdiction().classify_week(&request.hours);
    info!(
        correlation_id = %correlation_id,
        regular = %tally.regular,
        sesqui = %tally.sesqui,
        double = %tally.double,
        "Classification completed successfully"
    );
    json_response(StatusCode::OK, tally)
}

/// Handler for POST /payroll endpoint.
///
/// Reads the time reports covering the requested period, merges any
/// mispunch corrections and classifies every selected employee.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_payroll(&state, request).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start = %result.period.start_date,
                end = %result.period.end_date,
                employees = result.employees.len(),
                errors = result.errors.count,
                warnings = result.warnings.count,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = %err.error.code,
                error = %err.error.message,
                "Payroll failed"
            );
            error_response(err)
        }
    }
}

/// Runs payroll for one request.
async fn perform_payroll(
    state: &AppState,
    request: PayrollRequest,
) -> Result<PayrollResponse, ApiErrorResponse> {
    let settings = state.config().payroll();
    let pattern =
        Regex::new(&settings.timecard_pattern).map_err(|e| EngineError::ConfigParseError {
            path: "timecard_pattern".to_string(),
            message: e.to_string(),
        })?;

    // an uploaded report stands in for the timecard directory
    let (files, mut uploaded) = match request.timecard {
        Some(upload) => {
            let file = TimecardFile::from_path(&upload.source, &pattern).ok_or_else(|| {
                ApiErrorResponse::bad_request(ApiError::validation_error(format!(
                    "timecard source '{}' is not named after a payday",
                    upload.source
                )))
            })?;
            (vec![file], Some(upload.csv))
        }
        None => {
            let dir = settings.timecard_dir.clone();
            let naming = settings.timecard_pattern.clone();
            let files = tokio::task::spawn_blocking(move || discover_timecards(&dir, &naming))
                .await
                .map_err(|e| EngineError::Io {
                    path: settings.timecard_dir.clone(),
                    source: std::io::Error::other(e),
                })??;
            (files, None)
        }
    };

    let resolver = PayPeriodResolver::new(files, settings.period_days);
    let period = resolver.resolve(request.period)?;

    let parser = PunchParser::new();
    let mut names = EmployeeIndex::new();
    let mut timecard = Timecard::new();
    let mut issues = IssueLog::new();
    let mut sources = Vec::new();
    for file in resolver.select_files(&period) {
        let source = file.path.display().to_string();
        let content = match uploaded.take() {
            Some(csv) => csv,
            None => tokio::fs::read_to_string(&file.path)
                .await
                .map_err(|source_error| EngineError::Io {
                    path: source.clone(),
                    source: source_error,
                })?,
        };
        issues.extend(parser.parse(&source, content.as_bytes(), &mut names, &mut timecard)?);
        sources.push(source);
    }

    let reconciliation = match request.corrections {
        Some(upload) => {
            let (records, mispunch_issues) =
                MispunchReader::new().read(&upload.source, upload.csv.as_bytes())?;
            issues.extend(mispunch_issues);
            let mut ledger = ReconciliationLedger::new();
            let report = MispunchReconciler::new(period).reconcile(
                &records,
                &mut timecard,
                &names,
                &mut ledger,
            )?;
            Some(report)
        }
        None => None,
    };

    let jurisdiction = state.jurisdiction();
    let run = PayrollRun::new(jurisdiction)
        .enforce_breaks(request.enforce_breaks.unwrap_or(settings.enforce_breaks))
        .employees(&request.employees)
        .map_err(|e| ApiErrorResponse::bad_request(ApiError::validation_error(e.to_string())))?;
    let employees = run.run(&timecard, &names, &period);

    Ok(PayrollResponse::new(
        jurisdiction,
        period,
        timecard.date_span(),
        sources,
        employees,
        issues,
        reconciliation,
    ))
}
