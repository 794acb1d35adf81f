//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, solve_net_to_gross};

use super::request::{CalculateRequest, ReverseCalculateRequest};
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/salary/calculate", post(calculate_handler))
        .route("/salary/reverse-calculate", post(reverse_handler))
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /salary/calculate endpoint.
///
/// Accepts a monthly calculation request and returns the pay statement.
async fn calculate_handler(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let envelope = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let request = match envelope.into_domain() {
        Ok(request) => request,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid request");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let start_time = Instant::now();
    match calculate(&request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.metadata.calculation_id,
                month = %request.calculation_month,
                gross = result.gross.total.amount(),
                net = result.net_pay.amount(),
                is_valid = result.is_valid,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /salary/reverse-calculate endpoint.
///
/// Finds the wage that yields the target net pay and returns the search
/// result with the full forward statement of the winning candidate.
async fn reverse_handler(
    payload: Result<Json<ReverseCalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reverse calculation request");

    let envelope = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (target, request) = match envelope.into_domain() {
        Ok(parts) => parts,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid request");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let start_time = Instant::now();
    match solve_net_to_gross(target, &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                target = target.amount(),
                actual = result.actual_net_pay.amount(),
                iterations = result.iterations,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Reverse calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Reverse calculation failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
