use crate::domain::scoring::{
    score_prediction, score_week, unique_score_bonus, weekly_bonus, FixtureResult, Forecast,
    Scoreline,
};

fn s(home: i16, away: i16) -> Scoreline {
    Scoreline::new(home, away)
}

#[test]
fn wrong_outcome_scores_zero() {
    assert_eq!(score_prediction(s(2, 0), s(0, 2)), 0);
    assert_eq!(score_prediction(s(1, 1), s(2, 1)), 0);
    assert_eq!(score_prediction(s(0, 3), s(3, 3)), 0);
}

#[test]
fn exact_score_earns_at_least_three() {
    // 0-3 total goals floor at 3 points
    assert_eq!(score_prediction(s(0, 0), s(0, 0)), 3);
    assert_eq!(score_prediction(s(2, 1), s(2, 1)), 3);
    // above 3 total goals, points equal the goals
    assert_eq!(score_prediction(s(3, 1), s(3, 1)), 4);
    assert_eq!(score_prediction(s(3, 2), s(3, 2)), 5);
    assert_eq!(score_prediction(s(5, 4), s(5, 4)), 9);
}

#[test]
fn correct_outcome_wrong_score_earns_one() {
    assert_eq!(score_prediction(s(1, 0), s(2, 0)), 1);
    assert_eq!(score_prediction(s(0, 0), s(2, 2)), 1);
    assert_eq!(score_prediction(s(0, 1), s(1, 3)), 1);
}

#[test]
fn unique_bonus_requires_sole_exact_score() {
    let actual = s(2, 1);
    // alone on the right score
    let field = vec![s(2, 1), s(1, 0), s(0, 0)];
    assert_eq!(unique_score_bonus(s(2, 1), actual, &field), 2);

    // two players share the exact score: both forfeit
    let shared = vec![s(2, 1), s(2, 1), s(0, 0)];
    assert_eq!(unique_score_bonus(s(2, 1), actual, &shared), 0);

    // an inexact prediction never gets the bonus
    assert_eq!(unique_score_bonus(s(1, 0), actual, &field), 0);
}

#[test]
fn weekly_bonus_steps() {
    assert_eq!(weekly_bonus(0), 0);
    assert_eq!(weekly_bonus(3), 0);
    assert_eq!(weekly_bonus(4), 1);
    assert_eq!(weekly_bonus(5), 2);
    assert_eq!(weekly_bonus(6), 3);
    assert_eq!(weekly_bonus(7), 3);
}

#[test]
fn score_week_sums_points_and_bonuses() {
    let results = vec![
        FixtureResult { fixture_id: 1, actual: s(2, 1) },
        FixtureResult { fixture_id: 2, actual: s(0, 0) },
    ];
    let forecasts = vec![
        // player 10: exact on fixture 1 (unique, +2), outcome-only on 2
        Forecast { player_id: 10, fixture_id: 1, predicted: s(2, 1) },
        Forecast { player_id: 10, fixture_id: 2, predicted: s(1, 1) },
        // player 20: misses both
        Forecast { player_id: 20, fixture_id: 1, predicted: s(0, 1) },
        Forecast { player_id: 20, fixture_id: 2, predicted: s(1, 0) },
    ];

    let scores = score_week(&results, &forecasts);
    assert_eq!(scores.len(), 2);

    let p10 = scores.iter().find(|p| p.player_id == 10).unwrap();
    assert_eq!(p10.correct_scores, 1);
    assert_eq!(p10.points, 3 + 2 + 1);

    let p20 = scores.iter().find(|p| p.player_id == 20).unwrap();
    assert_eq!(p20.correct_scores, 0);
    assert_eq!(p20.points, 0);
}

#[test]
fn score_week_applies_weekly_bonus_on_four_exacts() {
    let results: Vec<FixtureResult> = (1..=4)
        .map(|id| FixtureResult { fixture_id: id, actual: s(1, 0) })
        .collect();
    // Sole player: four exact scores, each unique (+2), plus weekly bonus +1.
    let forecasts: Vec<Forecast> = (1..=4)
        .map(|id| Forecast { player_id: 7, fixture_id: id, predicted: s(1, 0) })
        .collect();

    let scores = score_week(&results, &forecasts);
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].correct_scores, 4);
    assert_eq!(scores[0].points, 4 * (3 + 2) + 1);
}

#[test]
fn score_week_ignores_unscored_fixtures() {
    let results = vec![FixtureResult { fixture_id: 1, actual: s(1, 1) }];
    let forecasts = vec![
        Forecast { player_id: 1, fixture_id: 1, predicted: s(1, 1) },
        // fixture 99 has no result; the forecast must not count
        Forecast { player_id: 1, fixture_id: 99, predicted: s(4, 4) },
    ];

    let scores = score_week(&results, &forecasts);
    assert_eq!(scores[0].correct_scores, 1);
    assert_eq!(scores[0].points, 3 + 2);
}

#[test]
fn score_week_is_idempotent_under_reentry() {
    let results = vec![
        FixtureResult { fixture_id: 1, actual: s(3, 2) },
        FixtureResult { fixture_id: 2, actual: s(0, 2) },
    ];
    let forecasts = vec![
        Forecast { player_id: 1, fixture_id: 1, predicted: s(3, 2) },
        Forecast { player_id: 1, fixture_id: 2, predicted: s(0, 0) },
        Forecast { player_id: 2, fixture_id: 1, predicted: s(1, 1) },
        Forecast { player_id: 2, fixture_id: 2, predicted: s(0, 1) },
    ];

    let first = score_week(&results, &forecasts);
    let second = score_week(&results, &forecasts);
    assert_eq!(first, second);
}
