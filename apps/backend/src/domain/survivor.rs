//! Lavery Cup logic: round marking and champion resolution.
//!
//! Each round, every active player picks two teams they have not used before
//! in the season; both must win their matches for the player to advance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// One player's picks for a survivor round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSelection {
    pub player_id: i64,
    pub team_one: String,
    pub team_two: String,
}

/// The marked result of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMark {
    pub player_id: i64,
    pub team_one_won: bool,
    pub team_two_won: bool,
    pub advanced: bool,
}

/// Outcome of marking a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundMarking {
    pub marks: Vec<SelectionMark>,
    /// Players who advanced, in selection order.
    pub advanced: Vec<i64>,
    /// True when nobody advanced: the cup is stuck and needs a host reset.
    pub deadlocked: bool,
}

/// Validate a pair of team picks against the player's used-team ledger.
///
/// All name comparisons are case-insensitive: the two picks must differ and
/// neither may appear in `used_teams`, the set of team names the player has
/// picked in any earlier round this season.
pub fn validate_selection(
    team_one: &str,
    team_two: &str,
    used_teams: &HashSet<String>,
) -> Result<(), DomainError> {
    let one = team_one.trim();
    let two = team_two.trim();
    if one.is_empty() || two.is_empty() {
        return Err(DomainError::validation("both team picks are required"));
    }
    if one.eq_ignore_ascii_case(two) {
        return Err(DomainError::validation(format!(
            "the two picks must be different teams, got '{one}' twice"
        )));
    }
    for team in [one, two] {
        if used_teams.iter().any(|used| used.eq_ignore_ascii_case(team)) {
            return Err(DomainError::validation(format!(
                "'{team}' has already been used in an earlier round"
            )));
        }
    }
    Ok(())
}

/// Mark a round's selections against the set of teams that won that week.
///
/// A player advances only when both picked teams won. If no player advances
/// the marking is flagged deadlocked: the host must reset the cup rather
/// than let it stall.
pub fn mark_round(selections: &[RoundSelection], winning_teams: &HashSet<String>) -> RoundMarking {
    let mut marks = Vec::with_capacity(selections.len());
    let mut advanced = Vec::new();

    for sel in selections {
        let team_one_won = winning_teams.contains(&sel.team_one);
        let team_two_won = winning_teams.contains(&sel.team_two);
        let did_advance = team_one_won && team_two_won;
        if did_advance {
            advanced.push(sel.player_id);
        }
        marks.push(SelectionMark {
            player_id: sel.player_id,
            team_one_won,
            team_two_won,
            advanced: did_advance,
        });
    }

    let deadlocked = advanced.is_empty();
    RoundMarking {
        marks,
        advanced,
        deadlocked,
    }
}

/// Where the cup stands after its completed rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CupState {
    /// Nothing has been played yet.
    NotStarted,
    Champion(i64),
    /// More than one player still standing; the next round will thin them.
    AwaitingNextRound(Vec<i64>),
    /// Every remaining player was eliminated; a reset is required.
    Deadlocked,
}

/// Resolve the cup state by walking completed rounds in order.
///
/// The working set starts as the full player pool and is *replaced* by each
/// round's advancers — a player with no selection in a round is eliminated
/// just like one whose teams lost (missing the window is elimination).
pub fn resolve_cup_state(players: &[i64], advancers_per_round: &[Vec<i64>]) -> CupState {
    if advancers_per_round.is_empty() {
        return CupState::NotStarted;
    }

    let pool: HashSet<i64> = players.iter().copied().collect();
    let mut remaining: Vec<i64> = players.to_vec();
    for advancers in advancers_per_round {
        // Replace, never merely filter: anyone absent from the round is out.
        remaining.clear();
        remaining.extend(advancers.iter().copied().filter(|p| pool.contains(p)));
        if remaining.is_empty() {
            return CupState::Deadlocked;
        }
    }

    if remaining.len() == 1 {
        CupState::Champion(remaining[0])
    } else {
        CupState::AwaitingNextRound(remaining)
    }
}
