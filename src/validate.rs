use crate::error::{EngineError, EngineResult};
use crate::models::SimulationRequest;

/// Runs every check in the engine's validation order before a single
/// iteration is scheduled. Returns the first violation found.
pub fn validate_request(request: &SimulationRequest) -> EngineResult<()> {
    let n_teams = request.elo_values.len();

    if request.team_names.len() != n_teams {
        return Err(EngineError::validation(
            "team_names",
            format!(
                "length {} does not match elo_values length {}",
                request.team_names.len(),
                n_teams
            ),
        ));
    }

    check_adjustment_len("adj_points", &request.adj_points, n_teams)?;
    check_adjustment_len("adj_goals", &request.adj_goals, n_teams)?;
    check_adjustment_len("adj_goals_against", &request.adj_goals_against, n_teams)?;
    check_adjustment_len("adj_goal_diff", &request.adj_goal_diff, n_teams)?;

    for (i, elo) in request.elo_values.iter().enumerate() {
        if !elo.is_finite() {
            return Err(EngineError::validation(
                "elo_values",
                format!("elo_values[{i}] is not finite: {elo}"),
            ));
        }
    }

    if !request.mod_factor.is_finite() {
        return Err(EngineError::validation(
            "mod_factor",
            format!("must be finite, got {}", request.mod_factor),
        ));
    }
    if !request.home_advantage.is_finite() {
        return Err(EngineError::validation(
            "home_advantage",
            format!("must be finite, got {}", request.home_advantage),
        ));
    }
    if let Some(slope) = request.tore_slope {
        if !slope.is_finite() {
            return Err(EngineError::validation(
                "tore_slope",
                format!("must be finite, got {slope}"),
            ));
        }
    }
    if let Some(intercept) = request.tore_intercept {
        if !intercept.is_finite() {
            return Err(EngineError::validation(
                "tore_intercept",
                format!("must be finite, got {intercept}"),
            ));
        }
    }

    for (i, m) in request.schedule.iter().enumerate() {
        if m.team_home >= n_teams || m.team_away >= n_teams {
            return Err(EngineError::validation(
                "schedule",
                format!(
                    "match {i}: team index out of range (home={}, away={}, T={n_teams})",
                    m.team_home, m.team_away
                ),
            ));
        }
        if m.team_home == m.team_away {
            return Err(EngineError::validation(
                "schedule",
                format!("match {i}: team_home and team_away are both {}", m.team_home),
            ));
        }
        if m.goals_home.is_some() != m.goals_away.is_some() {
            return Err(EngineError::validation(
                "schedule",
                format!("match {i}: goals_home and goals_away must both be present or both absent"),
            ));
        }
    }

    if request.iterations == 0 {
        return Err(EngineError::validation("iterations", "must be greater than zero"));
    }

    Ok(())
}

fn check_adjustment_len(field: &str, values: &Option<Vec<i32>>, n_teams: usize) -> EngineResult<()> {
    if let Some(v) = values {
        if v.len() != n_teams {
            return Err(EngineError::validation(
                field,
                format!("length {} does not match team count {}", v.len(), n_teams),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Match;

    fn base_request() -> SimulationRequest {
        SimulationRequest {
            schedule: vec![Match {
                team_home: 0,
                team_away: 1,
                goals_home: Some(2),
                goals_away: Some(1),
            }],
            elo_values: vec![1500.0, 1500.0],
            team_names: vec!["A".to_string(), "B".to_string()],
            iterations: 10,
            mod_factor: 20.0,
            home_advantage: 65.0,
            tore_slope: None,
            tore_intercept: None,
            adj_points: None,
            adj_goals: None,
            adj_goals_against: None,
            adj_goal_diff: None,
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        assert!(validate_request(&base_request()).is_ok());
    }

    #[test]
    fn rejects_team_names_length_mismatch() {
        let mut req = base_request();
        req.team_names.pop();
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "team_names"));
    }

    #[test]
    fn rejects_adjustment_length_mismatch() {
        let mut req = base_request();
        req.adj_points = Some(vec![0]);
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "adj_points"));
    }

    #[test]
    fn rejects_out_of_range_team_index() {
        let mut req = base_request();
        req.schedule.push(Match {
            team_home: 5,
            team_away: 0,
            goals_home: None,
            goals_away: None,
        });
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "schedule"));
    }

    #[test]
    fn rejects_self_match() {
        let mut req = base_request();
        req.schedule.push(Match {
            team_home: 0,
            team_away: 0,
            goals_home: None,
            goals_away: None,
        });
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "schedule"));
    }

    #[test]
    fn rejects_unpaired_goals() {
        let mut req = base_request();
        req.schedule.push(Match {
            team_home: 0,
            team_away: 1,
            goals_home: Some(1),
            goals_away: None,
        });
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "schedule"));
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut req = base_request();
        req.iterations = 0;
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "iterations"));
    }

    #[test]
    fn rejects_non_finite_elo() {
        let mut req = base_request();
        req.elo_values[0] = f64::NAN;
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "elo_values"));
    }

    #[test]
    fn rejects_non_finite_home_advantage() {
        let mut req = base_request();
        req.home_advantage = f64::INFINITY;
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, EngineError::Validation { field, .. } if field == "home_advantage"));
    }
}
