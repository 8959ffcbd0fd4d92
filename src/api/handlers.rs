use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{SimulationRequest, SimulationResponse};

/// Maps the engine's error taxonomy onto HTTP status codes: validation
/// failures are the caller's fault (422), everything else is the engine's
/// (500). `Cancelled` never reaches this surface today — the synchronous
/// HTTP handlers don't expose a cancel channel — but is mapped for
/// completeness.
impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = match &self {
            EngineError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::Arithmetic { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            EngineError::Cancelled => StatusCode::INTERNAL_SERVER_ERROR,
            EngineError::ResourceExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    /// Short descriptive performance note; not a live benchmark.
    performance: String,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        performance: "single-digit-ms per 1k iterations for an 18-team league".to_string(),
    })
}

/// `POST /simulate`. Runs on a blocking thread pool thread since the engine
/// is CPU-bound and internally parallel (rayon) — running it directly on a
/// tokio worker thread would starve the reactor under load.
pub async fn simulate_league(
    Json(request): Json<SimulationRequest>,
) -> Result<Json<SimulationResponse>, EngineError> {
    let response = tokio::task::spawn_blocking(move || crate::simulate(request))
        .await
        .map_err(|join_err| EngineError::Arithmetic {
            message: format!("simulation task panicked: {join_err}"),
        })??;

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct LeagueRequestEntry {
    pub name: String,
    pub request: SimulationRequest,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub leagues: Vec<LeagueRequestEntry>,
}

#[derive(Serialize)]
pub struct LeagueResultEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SimulationResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub results: Vec<LeagueResultEntry>,
    pub total_time_ms: f64,
}

/// `POST /simulate/batch`. Each league is validated and simulated
/// independently; a malformed or failing entry carries its `error` field
/// rather than rejecting the whole batch (see DESIGN.md) — three
/// independently-sized leagues is the system's normal workload and one bad
/// league shouldn't block the other two. Leagues run
/// concurrently on the blocking thread pool; each one's own Monte Carlo
/// loop is additionally parallel via rayon.
pub async fn simulate_batch(Json(batch): Json<BatchRequest>) -> Json<BatchResponse> {
    let start = std::time::Instant::now();

    let names: Vec<String> = batch.leagues.iter().map(|entry| entry.name.clone()).collect();
    let handles: Vec<_> = batch
        .leagues
        .into_iter()
        .map(|entry| tokio::task::spawn_blocking(move || crate::simulate(entry.request)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (name, handle) in names.into_iter().zip(handles) {
        let entry = match handle.await {
            Ok(Ok(response)) => LeagueResultEntry { name, response: Some(response), error: None },
            Ok(Err(engine_err)) => LeagueResultEntry { name, response: None, error: Some(engine_err.to_string()) },
            Err(join_err) => LeagueResultEntry {
                name,
                response: None,
                error: Some(format!("simulation task panicked: {join_err}")),
            },
        };
        results.push(entry);
    }

    Json(BatchResponse {
        results,
        total_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
