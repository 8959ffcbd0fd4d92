use crate::models::{LeagueTable, Match, TableAdjustments, TeamStanding};

/// Builds final standings from a fully replayed schedule plus per-team
/// adjustments, tie-breaking on points, then goal difference, then goals
/// scored, packed into a single comparable scalar.
///
/// Matches the logic in Tabelle.R.
pub fn build_table(matches: &[Match], number_teams: usize, adjustments: &TableAdjustments) -> LeagueTable {
    calculate_table(
        matches,
        number_teams,
        adjustments.adj_points.as_deref(),
        adjustments.adj_goals.as_deref(),
        adjustments.adj_goals_against.as_deref(),
        adjustments.adj_goal_diff.as_deref(),
    )
}

/// Calculate league table from match results.
///
/// Matches the logic in Tabelle.R.
pub fn calculate_table(
    matches: &[Match],
    number_teams: usize,
    adj_points: Option<&[i32]>,
    adj_goals: Option<&[i32]>,
    adj_goals_against: Option<&[i32]>,
    adj_goal_diff: Option<&[i32]>,
) -> LeagueTable {
    let mut standings: Vec<TeamStanding> = (0..number_teams)
        .map(|i| TeamStanding {
            team_id: i,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: adj_goals.map(|a| a[i]).unwrap_or(0),
            goals_against: adj_goals_against.map(|a| a[i]).unwrap_or(0),
            goal_difference: adj_goal_diff.map(|a| a[i]).unwrap_or(0),
            points: adj_points.map(|a| a[i]).unwrap_or(0),
            position: 0,
        })
        .collect();

    for match_data in matches {
        if let (Some(goals_home), Some(goals_away)) = (match_data.goals_home, match_data.goals_away) {
            let home_idx = match_data.team_home;
            let away_idx = match_data.team_away;

            standings[home_idx].played += 1;
            standings[away_idx].played += 1;

            standings[home_idx].goals_for += goals_home;
            standings[home_idx].goals_against += goals_away;
            standings[away_idx].goals_for += goals_away;
            standings[away_idx].goals_against += goals_home;

            standings[home_idx].goal_difference += goals_home - goals_away;
            standings[away_idx].goal_difference += goals_away - goals_home;

            // 3-point system: floor(3*(sign(diff)+1)/2) home, floor(3 - that) away.
            // Decisive results yield 3/0, draws yield the mirrored 1/1.
            if goals_home > goals_away {
                standings[home_idx].won += 1;
                standings[home_idx].points += 3;
                standings[away_idx].lost += 1;
            } else if goals_home < goals_away {
                standings[away_idx].won += 1;
                standings[away_idx].points += 3;
                standings[home_idx].lost += 1;
            } else {
                standings[home_idx].drawn += 1;
                standings[home_idx].points += 1;
                standings[away_idx].drawn += 1;
                standings[away_idx].points += 1;
            }
        }
    }

    assign_ranks(&mut standings);

    LeagueTable { standings }
}

/// Rank score packs (points, goal_diff, goals_for) into one scalar so a
/// single descending sort reproduces the full tie-break cascade.
fn rank_score(s: &TeamStanding) -> i64 {
    10_000 * s.points as i64 + 100 * s.goal_difference as i64 + s.goals_for as i64
}

/// Sorts by rank score descending and assigns positions using the
/// "competition ranking" convention (R's `rank(..., ties.method = "max")`
/// on ascending score, inverted): a block of teams tied on rank score all
/// share the position of the first (best) team in that block, and the
/// following distinct group's position skips ahead by the block's size —
/// e.g. two teams tied for 1st both get position 1, the next team gets 3.
fn assign_ranks(standings: &mut [TeamStanding]) {
    standings.sort_by(|a, b| rank_score(b).cmp(&rank_score(a)));

    let mut i = 0;
    while i < standings.len() {
        let score = rank_score(&standings[i]);
        let mut j = i + 1;
        while j < standings.len() && rank_score(&standings[j]) == score {
            j += 1;
        }
        for standing in &mut standings[i..j] {
            standing.position = i + 1;
        }
        i = j;
    }
}
