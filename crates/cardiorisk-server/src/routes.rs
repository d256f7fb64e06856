//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use cardiorisk_core::{Error, EvaluationReport, MODEL_VERSION};
use serde_json::{json, Value};
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::evaluation;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/evaluate", get(evaluate_status).post(evaluate_risk))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Liveness probe for the evaluation endpoint
async fn evaluate_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "CardioRisk evaluator is running",
        "model_version": MODEL_VERSION,
        "model_loaded": state.model_loaded(),
    }))
}

/// Main evaluation handler
///
/// The model is checked before the body is read, so an unavailable model
/// wins over a malformed or oversized payload.
async fn evaluate_risk(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EvaluationReport>, AppError> {
    metrics::counter!("cardiorisk_requests_total").increment(1);

    let request_id = Uuid::new_v4();
    let span = info_span!("evaluate", %request_id);
    let start = Instant::now();

    let result = span.in_scope(|| -> Result<EvaluationReport, AppError> {
        let resources = evaluation::ready_resources(&state.resources)?;
        let Json(payload) = payload?;
        Ok(evaluation::evaluate(resources, &payload)?)
    });

    metrics::histogram!("cardiorisk_evaluation_latency_us")
        .record(start.elapsed().as_micros() as f64);

    match result {
        Ok(report) => {
            metrics::histogram!("cardiorisk_overall_risk").record(f64::from(report.overall_risk));
            info!(%request_id, overall_risk = report.overall_risk, "Evaluation complete");
            Ok(Json(report))
        }
        Err(e) => {
            warn!(%request_id, kind = e.kind(), "Evaluation failed: {}", e.message());
            Err(e)
        }
    }
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    /// Evaluation failed
    Evaluation(Error),
    /// Body could not be read as JSON
    Rejected { status: StatusCode, message: String },
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::Evaluation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Evaluation(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Evaluation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Evaluation(err) => err.kind(),
            AppError::Rejected { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "payload_too_large"
            }
            AppError::Rejected { .. } => "invalid_request",
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::Evaluation(err) => err.to_string(),
            AppError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        metrics::counter!("cardiorisk_errors_total", "kind" => kind).increment(1);

        let mut error = json!({
            "message": self.message(),
            "type": kind,
        });
        if let AppError::Evaluation(Error::MissingField { field }) = self {
            error["field"] = Value::String(field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
