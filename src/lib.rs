pub mod api;
pub mod config;
pub mod elo;
pub mod error;
pub mod logging;
pub mod models;
pub mod monte_carlo;
pub mod simulation;
pub mod validate;

pub use elo::*;
pub use error::{EngineError, EngineResult};
pub use models::*;
pub use simulation::*;

use std::sync::atomic::AtomicBool;
use std::time::Instant;

/// The core synchronous engine entry point: validates the request, then
/// runs the Monte Carlo driver to completion. No work is performed if
/// validation fails.
pub fn simulate(request: SimulationRequest) -> EngineResult<SimulationResponse> {
    simulate_cancellable(request, None)
}

/// As [`simulate`], but accepts a cooperative cancellation flag checked
/// between batches of iterations — usable by non-HTTP embedders that need
/// to abort a long-running call.
pub fn simulate_cancellable(
    request: SimulationRequest,
    cancel: Option<&AtomicBool>,
) -> EngineResult<SimulationResponse> {
    validate::validate_request(&request)?;

    let start = Instant::now();
    let (season, params, adjustments, team_names) = request.into_parts();

    let mut response =
        monte_carlo::run_cancellable(&season, &params, &adjustments, &team_names, cancel)?;
    response.time_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok(response)
}
