use serde::{Deserialize, Serialize};

/// Result of an ELO calculation after a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EloResult {
    pub new_elo_home: f64,
    pub new_elo_away: f64,
    pub goals_home: i32,
    pub goals_away: i32,
    pub win_probability_home: f64,
}

/// Parameters for ELO calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloParams {
    pub elo_home: f64,
    pub elo_away: f64,
    pub goals_home: i32,
    pub goals_away: i32,
    pub mod_factor: f64,
    pub home_advantage: f64,
}

/// Match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub team_home: usize,
    pub team_away: usize,
    pub goals_home: Option<i32>,
    pub goals_away: Option<i32>,
}

/// Season schedule with matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub matches: Vec<Match>,
    pub team_elos: Vec<f64>,
    pub number_teams: usize,
}

/// League table entry for a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: usize,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub position: usize,
}

/// Complete league table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueTable {
    pub standings: Vec<TeamStanding>,
}

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    pub mod_factor: f64,
    pub home_advantage: f64,
    pub iterations: usize,
    pub tore_slope: f64,
    pub tore_intercept: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            mod_factor: 20.0,
            home_advantage: 65.0,
            iterations: 10000,
            tore_slope: 0.0017854953143549,
            tore_intercept: 1.3218390804597700,
        }
    }
}

/// Per-team table adjustments (starting offsets, promotion-ineligibility
/// penalties, ...). All four vectors default to zero and must be either
/// absent or exactly `number_teams` long.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableAdjustments {
    pub adj_points: Option<Vec<i32>>,
    pub adj_goals: Option<Vec<i32>>,
    pub adj_goals_against: Option<Vec<i32>>,
    pub adj_goal_diff: Option<Vec<i32>>,
}

impl TableAdjustments {
    pub fn is_empty(&self) -> bool {
        self.adj_points.is_none()
            && self.adj_goals.is_none()
            && self.adj_goals_against.is_none()
            && self.adj_goal_diff.is_none()
    }
}

/// Request body for the `simulate` entry point / `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub schedule: Vec<Match>,
    pub elo_values: Vec<f64>,
    pub team_names: Vec<String>,
    pub iterations: usize,
    pub mod_factor: f64,
    pub home_advantage: f64,
    #[serde(default)]
    pub tore_slope: Option<f64>,
    #[serde(default)]
    pub tore_intercept: Option<f64>,
    #[serde(default)]
    pub adj_points: Option<Vec<i32>>,
    #[serde(default)]
    pub adj_goals: Option<Vec<i32>>,
    #[serde(default)]
    pub adj_goals_against: Option<Vec<i32>>,
    #[serde(default)]
    pub adj_goal_diff: Option<Vec<i32>>,
}

/// Response body for the `simulate` entry point / `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub probability_matrix: Vec<Vec<f64>>,
    pub team_names: Vec<String>,
    pub simulations_performed: usize,
    pub time_ms: f64,
}

impl SimulationRequest {
    /// Splits the request into the pieces the simulation engine actually
    /// operates on: a `Season`, the hyperparameters, and the adjustments.
    pub fn into_parts(self) -> (Season, SimulationParams, TableAdjustments, Vec<String>) {
        let number_teams = self.elo_values.len();
        let season = Season {
            matches: self.schedule,
            team_elos: self.elo_values,
            number_teams,
        };
        let params = SimulationParams {
            mod_factor: self.mod_factor,
            home_advantage: self.home_advantage,
            iterations: self.iterations,
            tore_slope: self.tore_slope.unwrap_or(0.0017854953143549),
            tore_intercept: self.tore_intercept.unwrap_or(1.3218390804597700),
        };
        let adjustments = TableAdjustments {
            adj_points: self.adj_points,
            adj_goals: self.adj_goals,
            adj_goals_against: self.adj_goals_against,
            adj_goal_diff: self.adj_goal_diff,
        };

        (season, params, adjustments, self.team_names)
    }
}