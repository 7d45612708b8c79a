//! REST API behind the single-page form.
//!
//! The page builds itself from `/api/constraints`, posts the raw draft to
//! `/api/analyze`, and re-renders the result section from `/api/state`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use vinalyze::{
    constraints, ClientConfig, ClientError, SubmissionController, SubmissionDraft,
    SubmissionState, SubmitError,
};

/// Shared application state: the one submission controller.
pub struct AppState {
    controller: SubmissionController,
}

impl AppState {
    /// Creates the state from client configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            controller: SubmissionController::from_config(config),
        }
    }

}

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/constraints", get(constraint_table))
        .route("/api/analyze", post(analyze))
        .route("/api/state", get(current_state))
        .with_state(state)
}

/// One row of the constraint table as the page consumes it.
#[derive(Debug, Serialize)]
struct ConstraintView {
    name: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
    unit: &'static str,
    description: &'static str,
}

async fn constraint_table() -> Json<Vec<ConstraintView>> {
    let views = constraints()
        .iter()
        .map(|c| ConstraintView {
            name: c.field.key(),
            label: c.field.label(),
            min: c.min,
            max: c.max,
            step: c.step,
            unit: c.unit,
            description: c.description,
        })
        .collect();
    Json(views)
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SubmissionDraft>,
) -> (StatusCode, Json<Value>) {
    tracing::debug!("analysis requested");
    state.controller.set_draft(draft);
    match state.controller.submit().await {
        Ok(label) => (StatusCode::OK, Json(json!({ "wine_quality": label }))),
        Err(error) => submit_error_response(error),
    }
}

fn submit_error_response(error: SubmitError) -> (StatusCode, Json<Value>) {
    match error {
        SubmitError::InFlight => (
            StatusCode::CONFLICT,
            Json(json!({ "error": error.to_string() })),
        ),
        SubmitError::Invalid(report) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "validation failed", "fields": report.errors() })),
        ),
        SubmitError::Client(ClientError::EndpointMissing) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Client isn't connected to server." })),
        ),
        SubmitError::Client(client_error) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": client_error.to_string() })),
        ),
    }
}

async fn current_state(State(state): State<Arc<AppState>>) -> Json<Value> {
    let value = match state.controller.state() {
        SubmissionState::Idle => json!({ "state": "idle" }),
        SubmissionState::Submitting => json!({ "state": "submitting" }),
        SubmissionState::Result(label) => json!({ "state": "result", "wine_quality": label }),
        SubmissionState::Failed(message) => json!({ "state": "failed", "error": message }),
    };
    Json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinalyze::WineField;

    fn valid_draft_json() -> Value {
        json!({
            "fixed_acidity": "8.0",
            "volatile_acidity": "0.79",
            "citric_acid": "0.5",
            "residual_sugar": "8.2",
            "chlorides": "0.35",
            "free_sulfur_dioxide": "36",
            "total_sulfur_dioxide": "141.5",
            "density": "1.04",
            "pH": "3.5",
            "sulphates": "1.0",
            "alcohol": "11.5"
        })
    }

    #[tokio::test]
    async fn constraint_table_is_ordered_and_complete() {
        let Json(views) = constraint_table().await;

        assert_eq!(views.len(), 11);
        assert_eq!(views[0].name, "fixed_acidity");
        assert_eq!(views[8].name, "pH");
        assert_eq!(views[8].label, "pH");
        assert_eq!(views[10].max, 15.0);
        assert!(views.iter().all(|v| v.step == 0.01));

        let expected: Vec<&str> = WineField::ALL.iter().map(|f| f.key()).collect();
        let actual: Vec<&str> = views.iter().map(|v| v.name).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn analyze_without_endpoint_returns_service_unavailable() {
        let state = Arc::new(AppState::new(&ClientConfig::default()));
        let draft: SubmissionDraft = serde_json::from_value(valid_draft_json()).unwrap();

        let (status, Json(body)) = analyze(State(state), Json(draft)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Client isn't connected to server.");
    }

    #[tokio::test]
    async fn analyze_with_invalid_draft_returns_field_errors() {
        let config = ClientConfig::default().with_endpoint("http://localhost:8000/quality/");
        let state = Arc::new(AppState::new(&config));

        let mut raw = valid_draft_json();
        raw["alcohol"] = json!("99");
        raw["citric_acid"] = json!("");
        let draft: SubmissionDraft = serde_json::from_value(raw).unwrap();

        let (status, Json(body)) = analyze(State(state), Json(draft)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let fields = body["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["field"], "citric_acid");
        assert_eq!(fields[0]["kind"], "invalid_number");
        assert_eq!(fields[1]["field"], "alcohol");
        assert_eq!(fields[1]["kind"], "out_of_range");
    }

    #[tokio::test]
    async fn state_endpoint_reflects_idle_controller() {
        let state = Arc::new(AppState::new(&ClientConfig::default()));
        let Json(body) = current_state(State(state)).await;
        assert_eq!(body["state"], "idle");
    }
}
