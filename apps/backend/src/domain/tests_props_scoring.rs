use proptest::prelude::*;

use crate::domain::scoring::{
    score_prediction, score_week, weekly_bonus, FixtureResult, Forecast, Scoreline,
    EXACT_SCORE_FLOOR,
};

fn scoreline() -> impl Strategy<Value = Scoreline> {
    (0i16..=9, 0i16..=9).prop_map(|(h, a)| Scoreline::new(h, a))
}

proptest! {
    #[test]
    fn prediction_points_come_from_a_closed_set(pred in scoreline(), actual in scoreline()) {
        let points = score_prediction(pred, actual);
        let goals = i32::from(actual.home) + i32::from(actual.away);
        prop_assert!(points == 0 || points == 1 || points == EXACT_SCORE_FLOOR.max(goals));
    }

    #[test]
    fn outcome_mismatch_scores_nothing(pred in scoreline(), actual in scoreline()) {
        prop_assume!(pred.outcome() != actual.outcome());
        prop_assert_eq!(score_prediction(pred, actual), 0);
    }

    #[test]
    fn exact_score_pays_goals_with_a_floor(actual in scoreline()) {
        let goals = i32::from(actual.home) + i32::from(actual.away);
        prop_assert_eq!(score_prediction(actual, actual), EXACT_SCORE_FLOOR.max(goals));
    }

    #[test]
    fn weekly_bonus_never_decreases(count in 0usize..40) {
        prop_assert!(weekly_bonus(count + 1) >= weekly_bonus(count));
        prop_assert!(weekly_bonus(count) <= 3);
    }

    #[test]
    fn week_scoring_is_deterministic(
        results in prop::collection::vec(scoreline(), 1..6),
        picks in prop::collection::vec(scoreline(), 1..6),
    ) {
        let results: Vec<FixtureResult> = results
            .into_iter()
            .enumerate()
            .map(|(i, actual)| FixtureResult { fixture_id: i as i64 + 1, actual })
            .collect();
        let forecasts: Vec<Forecast> = picks
            .into_iter()
            .enumerate()
            .map(|(i, predicted)| Forecast {
                player_id: 1,
                fixture_id: i as i64 + 1,
                predicted,
            })
            .collect();

        let first = score_week(&results, &forecasts);
        let second = score_week(&results, &forecasts);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn week_totals_are_never_negative(
        results in prop::collection::vec(scoreline(), 1..5),
        picks in prop::collection::vec((1i64..4, scoreline()), 0..12),
    ) {
        let results: Vec<FixtureResult> = results
            .into_iter()
            .enumerate()
            .map(|(i, actual)| FixtureResult { fixture_id: i as i64 + 1, actual })
            .collect();
        let fixture_count = results.len() as i64;
        let forecasts: Vec<Forecast> = picks
            .into_iter()
            .enumerate()
            .map(|(i, (player_id, predicted))| Forecast {
                player_id,
                fixture_id: (i as i64 % fixture_count) + 1,
                predicted,
            })
            .collect();

        for row in score_week(&results, &forecasts) {
            prop_assert!(row.points >= 0);
            prop_assert!(row.correct_scores >= 0);
        }
    }
}
