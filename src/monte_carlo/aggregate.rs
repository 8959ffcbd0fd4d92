/// RankAggregator: folds per-team/per-rank frequency counts into
/// probabilities, and reorders both the matrix and the team labels by
/// ascending expected rank (strongest teams first).
///
/// `frequencies[team][rank]` (0-indexed rank) is the number of iterations
/// in which `team` finished at that rank.
pub fn aggregate_frequencies(
    frequencies: &[Vec<usize>],
    iterations: usize,
    team_names: &[String],
) -> (Vec<Vec<f64>>, Vec<String>) {
    let n_teams = frequencies.len();

    let probability_matrix: Vec<Vec<f64>> = frequencies
        .iter()
        .map(|row| row.iter().map(|&count| count as f64 / iterations as f64).collect())
        .collect();

    // E[t] = sum_r r * count_of_r_for_team_t. Dividing by N is a monotonic
    // transform and can be skipped — we sort on the raw sum.
    let mut team_rankings: Vec<(usize, u64)> = (0..n_teams)
        .map(|team_id| {
            let expected: u64 = frequencies[team_id]
                .iter()
                .enumerate()
                .map(|(rank, &count)| (rank + 1) as u64 * count as u64)
                .sum();
            (team_id, expected)
        })
        .collect();

    team_rankings.sort_by_key(|&(_, expected)| expected);

    let mut sorted_matrix = Vec::with_capacity(n_teams);
    let mut sorted_names = Vec::with_capacity(n_teams);

    for (team_id, _) in team_rankings {
        sorted_matrix.push(probability_matrix[team_id].clone());
        sorted_names.push(
            team_names
                .get(team_id)
                .cloned()
                .unwrap_or_else(|| format!("Team {}", team_id + 1)),
        );
    }

    (sorted_matrix, sorted_names)
}
