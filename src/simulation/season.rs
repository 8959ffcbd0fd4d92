use crate::elo::calculate_elo_change;
use crate::models::EloParams;
use crate::models::{LeagueTable, Match, Season, TableAdjustments};
use crate::simulation::match_model::simulate_match_random;
use crate::simulation::table::build_table;
use rand::Rng;

/// Walks a schedule exactly once, threading a single mutable ELO vector
/// through it in order. Played matches are replayed deterministically
/// through the non-simulating update; unplayed matches are sampled through
/// the simulating update and their goals written back. An empty schedule
/// returns the input unchanged.
///
/// Matches the logic in SaisonSimulierenCPP.R.
pub fn replay_season<R: Rng>(
    season: &Season,
    mod_factor: f64,
    home_advantage: f64,
    tore_slope: f64,
    tore_intercept: f64,
    rng: &mut R,
) -> (Vec<Match>, Vec<f64>) {
    let mut matches = season.matches.clone();
    let mut elos = season.team_elos.clone();

    for match_data in &mut matches {
        let team_home = match_data.team_home;
        let team_away = match_data.team_away;

        if match_data.goals_home.is_none() {
            let result = simulate_match_random(
                elos[team_home],
                elos[team_away],
                mod_factor,
                home_advantage,
                tore_slope,
                tore_intercept,
                rng,
            );

            match_data.goals_home = Some(result.goals_home);
            match_data.goals_away = Some(result.goals_away);

            elos[team_home] = result.new_elo_home;
            elos[team_away] = result.new_elo_away;
        } else {
            let params = EloParams {
                elo_home: elos[team_home],
                elo_away: elos[team_away],
                goals_home: match_data.goals_home.unwrap(),
                goals_away: match_data.goals_away.unwrap(),
                mod_factor,
                home_advantage,
            };

            let result = calculate_elo_change(&params);
            elos[team_home] = result.new_elo_home;
            elos[team_away] = result.new_elo_away;
        }
    }

    (matches, elos)
}

/// Replays the season and builds the resulting table in one pass — the
/// per-iteration unit of work for the Monte Carlo driver.
pub fn process_season<R: Rng>(
    season: &Season,
    mod_factor: f64,
    home_advantage: f64,
    tore_slope: f64,
    tore_intercept: f64,
    adjustments: &TableAdjustments,
    rng: &mut R,
) -> (LeagueTable, Vec<f64>) {
    let (completed_matches, final_elos) =
        replay_season(season, mod_factor, home_advantage, tore_slope, tore_intercept, rng);

    let table = build_table(&completed_matches, season.number_teams, adjustments);

    (table, final_elos)
}
