//! HTTP request handlers for the Expense Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::AttendanceSheet;
use crate::settlement::process_attendance;
use crate::template::ReportTemplate;

use super::request::SettlementRequest;
use super::response::{ApiError, ApiErrorResponse, SettlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/seisan", post(seisan_handler))
        .with_state(state)
}

/// Handler for POST /seisan endpoint.
///
/// Accepts raw attendance text and returns the rendered expense report.
async fn seisan_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Perform the settlement
    let start_time = Instant::now();
    match perform_settlement(&state, &request) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                row_count = response.row_count,
                duration_us = duration.as_micros(),
                "Settlement completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Runs the settlement pipeline for one request.
///
/// Loads the rate configuration and report template (request overrides win
/// over the state defaults), parses the attendance text, transforms it into
/// the expense ledger and renders the report around the serialized CSV.
/// Configuration is re-read per invocation, so each call works on fresh
/// rate data.
fn perform_settlement(
    state: &AppState,
    request: &SettlementRequest,
) -> EngineResult<SettlementResponse> {
    let config_path = request
        .config_path
        .as_deref()
        .unwrap_or_else(|| state.config_path());
    let template_path = request
        .template_path
        .as_deref()
        .unwrap_or_else(|| state.template_path());

    let provider = ConfigLoader::load(config_path)?;
    let template = ReportTemplate::load(template_path)?;

    let sheet = AttendanceSheet::from_tsv(&request.attendance_text)?;
    let ledger = process_attendance(&sheet, &provider)?;
    let expense_text = ledger.to_csv_text()?;
    let report = template.render(&expense_text)?;

    Ok(SettlementResponse {
        report,
        row_count: ledger.len(),
    })
}
