pub mod aggregate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Season, SimulationParams, SimulationResponse, TableAdjustments};
use crate::simulation::process_season;
use aggregate::aggregate_frequencies;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// How many iterations run between cancellation checks — the only natural
/// checkpoint is between iterations, or small batches of them.
const CANCEL_CHECK_BATCH: usize = 64;

/// Runs the Monte Carlo driver to completion and aggregates the result into
/// a response. No cancellation support — for embedders that don't need it.
pub fn run(
    season: &Season,
    params: &SimulationParams,
    adjustments: &TableAdjustments,
    team_names: &[String],
) -> SimulationResponse {
    run_cancellable(season, params, adjustments, team_names, None)
        .expect("run() never requests cancellation")
}

/// Runs the Monte Carlo driver with a cooperative cancellation flag, checked
/// between fixed-size batches of iterations. On cancellation, no partial
/// result is returned.
///
/// Each iteration draws its own `StdRng` seeded from the (global) iteration
/// index alone, so the result is invariant to worker count and batch
/// scheduling.
pub fn run_cancellable(
    season: &Season,
    params: &SimulationParams,
    adjustments: &TableAdjustments,
    team_names: &[String],
    cancel: Option<&AtomicBool>,
) -> EngineResult<SimulationResponse> {
    let start = Instant::now();
    let n_teams = season.number_teams;

    let mut frequencies = vec![vec![0usize; n_teams]; n_teams];
    let mut done = 0usize;

    while done < params.iterations {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(EngineError::Cancelled);
            }
        }

        let batch_len = (params.iterations - done).min(CANCEL_CHECK_BATCH);
        let batch = run_batch(season, params, adjustments, done, batch_len, n_teams);
        merge_into(&mut frequencies, &batch);

        done += batch_len;
    }

    let (probability_matrix, sorted_names) =
        aggregate_frequencies(&frequencies, params.iterations, team_names);

    Ok(SimulationResponse {
        probability_matrix,
        team_names: sorted_names,
        simulations_performed: params.iterations,
        time_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Runs `batch_len` iterations (global indices `offset..offset+batch_len`)
/// in parallel via rayon, folding each worker's local frequency matrix and
/// reducing them with elementwise addition — associative, so the reduce
/// order never affects the result.
fn run_batch(
    season: &Season,
    params: &SimulationParams,
    adjustments: &TableAdjustments,
    offset: usize,
    batch_len: usize,
    n_teams: usize,
) -> Vec<Vec<usize>> {
    (offset..offset + batch_len)
        .into_par_iter()
        .fold(
            || vec![vec![0usize; n_teams]; n_teams],
            |mut local, iteration| {
                let mut rng = StdRng::seed_from_u64(iteration as u64);
                let (table, _) = process_season(
                    season,
                    params.mod_factor,
                    params.home_advantage,
                    params.tore_slope,
                    params.tore_intercept,
                    adjustments,
                    &mut rng,
                );
                for standing in &table.standings {
                    local[standing.team_id][standing.position - 1] += 1;
                }
                local
            },
        )
        .reduce(|| vec![vec![0usize; n_teams]; n_teams], |a, b| merge(a, b))
}

fn merge(mut a: Vec<Vec<usize>>, b: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    merge_into(&mut a, &b);
    a
}

fn merge_into(target: &mut [Vec<usize>], source: &[Vec<usize>]) {
    for (t_row, s_row) in target.iter_mut().zip(source) {
        for (t, s) in t_row.iter_mut().zip(s_row) {
            *t += s;
        }
    }
}
