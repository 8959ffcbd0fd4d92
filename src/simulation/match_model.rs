use crate::elo::calculate_elo_change;
use crate::models::{EloParams, EloResult};
use statrs::distribution::{DiscreteCDF, Poisson as StatrsPoisson};

/// Simulates an unplayed match from two uniform-[0,1) draws: samples goals
/// from a Poisson model whose means are driven by the ELO gap, then applies
/// the ELO update to the sampled result.
///
/// Matches the logic in SpielCPP.R.
pub fn simulate_match(
    elo_home: f64,
    elo_away: f64,
    mod_factor: f64,
    home_advantage: f64,
    tore_slope: f64,
    tore_intercept: f64,
    random_home: f64,
    random_away: f64,
) -> EloResult {
    let elo_delta = elo_home + home_advantage - elo_away;

    let tore_heim_durchschnitt = (elo_delta * tore_slope + tore_intercept).max(0.001);
    let tore_gast_durchschnitt = ((-elo_delta) * tore_slope + tore_intercept).max(0.001);

    let goals_home = poisson_quantile(random_home, tore_heim_durchschnitt) as i32;
    let goals_away = poisson_quantile(random_away, tore_gast_durchschnitt) as i32;

    let params = EloParams {
        elo_home,
        elo_away,
        goals_home,
        goals_away,
        mod_factor,
        home_advantage,
    };

    calculate_elo_change(&params)
}

/// Draws the two uniform variates from `rng` and delegates to [`simulate_match`].
pub fn simulate_match_random<R: rand::Rng>(
    elo_home: f64,
    elo_away: f64,
    mod_factor: f64,
    home_advantage: f64,
    tore_slope: f64,
    tore_intercept: f64,
    rng: &mut R,
) -> EloResult {
    let random_home = rng.gen::<f64>();
    let random_away = rng.gen::<f64>();

    simulate_match(
        elo_home,
        elo_away,
        mod_factor,
        home_advantage,
        tore_slope,
        tore_intercept,
        random_home,
        random_away,
    )
}

/// Poisson quantile function (inverse CDF), used to turn a uniform draw
/// into a goal count.
///
/// Boundary convention: returns the smallest `g` with `cdf(g) > p` — i.e.
/// advances while `cdf(g) <= p`. At an exact tie (`p` equal to a CDF step),
/// this advances past it rather than stopping; using `<` instead of `<=`
/// as the advance test stops one goal short at that tie and was the
/// documented source of a ~3.7 percentage-point discrepancy in a divergent
/// port. Do not "simplify" the comparison without re-checking the boundary
/// test in `tests.rs`.
pub fn poisson_quantile(p: f64, lambda: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let poisson = StatrsPoisson::new(lambda).expect("poisson mean must be positive and finite");

    let mut low = 0u64;
    let mut high = (lambda * 3.0 + 20.0) as u64;

    while low < high {
        let mid = low + (high - low) / 2;
        let cdf = poisson.cdf(mid);

        if cdf <= p {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisson_quantile_matches_reference() {
        // Lambda = 1.3218390805 (the default tore_intercept), various p.
        let lambda = 1.3218390805;
        let test_cases = vec![
            (0.1, 0.0),
            (0.2, 0.0),
            (0.3, 1.0),
            (0.4, 1.0),
            (0.5, 1.0),
            (0.6, 1.0),
            (0.7, 2.0),
            (0.8, 2.0),
            (0.9, 3.0),
        ];

        for (p, expected) in test_cases {
            let result = poisson_quantile(p, lambda);
            assert_eq!(result, expected, "qpois({}, {}) should be {}, got {}", p, lambda, expected, result);
        }
    }

    #[test]
    fn test_boundary_cases() {
        // P(X <= 1) = 0.5578254003710745 for Poisson(1.5). At this exact
        // tie the quantile must advance past it and return 2, not 1.
        let lambda = 1.5;
        let p_boundary = 0.5578254003710745;

        assert_eq!(poisson_quantile(p_boundary, lambda), 2.0);
        assert_eq!(poisson_quantile(p_boundary - 0.0001, lambda), 1.0);
        assert_eq!(poisson_quantile(p_boundary + 0.0001, lambda), 2.0);
    }

    #[test]
    fn test_edges() {
        assert_eq!(poisson_quantile(0.0, 1.5), 0.0);
        assert!(poisson_quantile(1.0, 1.5).is_infinite());
    }

    #[test]
    fn test_larger_lambda_gives_larger_quantile() {
        let q_small = poisson_quantile(0.5, 0.5);
        let q_large = poisson_quantile(0.5, 5.0);
        assert!(q_large > q_small);
    }

    #[test]
    fn test_simulate_match_at_fixed_draws() {
        // Hand-verified against the closed-form model: delta = 1500 + 65 -
        // 1600 = -35, lambda_home = max(-35*slope + intercept, 0.001),
        // lambda_away = max(35*slope + intercept, 0.001); qpois(0.4, lambda_home)
        // = 1, qpois(0.3, lambda_away) = 1; the ELO update follows from there.
        let result = simulate_match(
            1500.0, 1600.0, 20.0, 65.0, 0.0017854953143549, 1.3218390804597700, 0.4, 0.3,
        );

        assert_eq!(result.goals_home, 1);
        assert_eq!(result.goals_away, 1);
        assert!((result.new_elo_home - 1501.0039870650708).abs() < 1e-6);
        assert!((result.new_elo_away - 1598.9960129349292).abs() < 1e-6);
    }
}
