use std::collections::HashSet;

use crate::domain::survivor::{
    mark_round, resolve_cup_state, validate_selection, CupState, RoundSelection,
};

fn selection(player_id: i64, one: &str, two: &str) -> RoundSelection {
    RoundSelection {
        player_id,
        team_one: one.to_string(),
        team_two: two.to_string(),
    }
}

fn winners(teams: &[&str]) -> HashSet<String> {
    teams.iter().map(|t| t.to_string()).collect()
}

#[test]
fn both_teams_must_win_to_advance() {
    let selections = vec![
        selection(1, "Arsenal", "Leeds"),
        selection(2, "Arsenal", "Fulham"),
    ];
    let marking = mark_round(&selections, &winners(&["Arsenal", "Leeds"]));

    let p1 = &marking.marks[0];
    assert!(p1.team_one_won && p1.team_two_won && p1.advanced);

    let p2 = &marking.marks[1];
    assert!(p2.team_one_won);
    assert!(!p2.team_two_won);
    assert!(!p2.advanced);

    assert_eq!(marking.advanced, vec![1]);
    assert!(!marking.deadlocked);
}

#[test]
fn no_advancers_flags_deadlock() {
    let selections = vec![
        selection(1, "Arsenal", "Leeds"),
        selection(2, "Fulham", "Spurs"),
    ];
    let marking = mark_round(&selections, &winners(&["Everton"]));
    assert!(marking.advanced.is_empty());
    assert!(marking.deadlocked);
}

#[test]
fn selection_rejects_duplicate_and_used_teams() {
    let mut used = HashSet::new();
    assert!(validate_selection("Arsenal", "arsenal", &used).is_err());
    assert!(validate_selection("Arsenal", "", &used).is_err());
    assert!(validate_selection("Arsenal", "Leeds", &used).is_ok());

    used.insert("Leeds".to_string());
    assert!(validate_selection("Arsenal", "Leeds", &used).is_err());
    assert!(validate_selection("Arsenal", "Fulham", &used).is_ok());
}

#[test]
fn used_team_check_ignores_case() {
    // The ledger stores names as entered; a re-pick must not slip past by
    // changing case.
    let mut used = HashSet::new();
    used.insert("Leeds".to_string());

    assert!(validate_selection("Arsenal", "LEEDS", &used).is_err());
    assert!(validate_selection("leeds", "Fulham", &used).is_err());
    assert!(validate_selection("Arsenal", "Fulham", &used).is_ok());
}

#[test]
fn champion_emerges_when_one_survives() {
    let players = vec![1, 2, 3, 4];
    let rounds = vec![vec![1, 2, 3], vec![1, 2], vec![2]];
    assert_eq!(resolve_cup_state(&players, &rounds), CupState::Champion(2));
}

#[test]
fn working_set_is_replaced_not_filtered() {
    // Player 3 never appeared in round 1's advancers (missed the window);
    // showing up later must not resurrect them — the round data governs.
    let players = vec![1, 2, 3];
    let rounds = vec![vec![1, 2], vec![1]];
    assert_eq!(resolve_cup_state(&players, &rounds), CupState::Champion(1));

    // An advancer id outside the season pool is ignored.
    let rounds = vec![vec![1, 99]];
    assert_eq!(
        resolve_cup_state(&players, &rounds),
        CupState::Champion(1)
    );
}

#[test]
fn several_survivors_await_the_next_round() {
    let players = vec![1, 2, 3, 4];
    let rounds = vec![vec![1, 2, 4]];
    assert_eq!(
        resolve_cup_state(&players, &rounds),
        CupState::AwaitingNextRound(vec![1, 2, 4])
    );
}

#[test]
fn empty_round_is_a_deadlock() {
    let players = vec![1, 2];
    let rounds = vec![vec![1, 2], vec![]];
    assert_eq!(resolve_cup_state(&players, &rounds), CupState::Deadlocked);
}

#[test]
fn no_rounds_means_not_started() {
    assert_eq!(resolve_cup_state(&[1, 2], &[]), CupState::NotStarted);
}
