//! Knockout bracket math and draws for the George Cup.
//!
//! Pure functions only: round planning from an entrant count, and random
//! draws that take a caller-supplied RNG. Persisting the drawn pairings is
//! the service layer's job — a draw result, once stored, is never re-derived.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::domain::DomainError;

/// Smallest bracket worth drawing.
pub const MIN_ENTRANTS: usize = 2;

/// Largest power of two that is at most `n`. `n` must be >= 1.
pub fn highest_power_of_two(n: usize) -> usize {
    debug_assert!(n >= 1);
    1 << (usize::BITS - 1 - n.leading_zeros())
}

/// Number of rounds needed to reduce `n` entrants to one: `ceil(log2(n))`.
pub fn rounds_required(n: usize) -> usize {
    debug_assert!(n >= MIN_ENTRANTS);
    let pow2 = highest_power_of_two(n);
    let base = pow2.trailing_zeros() as usize;
    if pow2 == n {
        base
    } else {
        base + 1
    }
}

/// One planned round of a bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRound {
    /// 1-based position in the bracket.
    pub round_no: i16,
    pub name: String,
    pub fixture_count: usize,
    pub is_preliminary: bool,
}

/// Name a full (non-preliminary) round by the number of entrants it holds.
fn full_round_name(entrants: usize) -> String {
    match entrants {
        2 => "Final".to_string(),
        4 => "Semi-finals".to_string(),
        8 => "Quarter-finals".to_string(),
        16 => "Round of 16".to_string(),
        32 => "Round of 32".to_string(),
        n => format!("Round of {n}"),
    }
}

/// Plan the full round structure for `n` entrants.
///
/// A power-of-two field gets `log2(n)` named rounds. Anything else gets a
/// leading "Preliminary" round of `n - highest_pow2` fixtures that trims the
/// field down to a power of two; the entrants not drawn into the preliminary
/// round are seated directly in the next round as byes.
pub fn plan_bracket(n: usize) -> Result<Vec<PlannedRound>, DomainError> {
    if n < MIN_ENTRANTS {
        return Err(DomainError::validation(format!(
            "a knockout cup needs at least {MIN_ENTRANTS} entrants, got {n}"
        )));
    }

    let pow2 = highest_power_of_two(n);
    let mut rounds = Vec::with_capacity(rounds_required(n));
    let mut round_no: i16 = 1;

    if pow2 != n {
        rounds.push(PlannedRound {
            round_no,
            name: "Preliminary".to_string(),
            fixture_count: n - pow2,
            is_preliminary: true,
        });
        round_no += 1;
    }

    let mut entrants = pow2;
    while entrants >= 2 {
        rounds.push(PlannedRound {
            round_no,
            name: full_round_name(entrants),
            fixture_count: entrants / 2,
            is_preliminary: false,
        });
        entrants /= 2;
        round_no += 1;
    }

    Ok(rounds)
}

/// Which side of a knockout fixture a seat refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Home,
    Away,
}

/// A bye placement: an entrant seated directly into a next-round fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByeSeat {
    /// Zero-based fixture index within the next round.
    pub fixture_index: usize,
    pub slot: Slot,
    pub player_id: i64,
}

/// The result of drawing the opening of a bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpeningDraw {
    /// Power-of-two field: every entrant is paired in the first round.
    Full { pairs: Vec<(i64, i64)> },
    /// Non-power-of-two field: some entrants fight a preliminary round, the
    /// rest are seated into random slots of the following round.
    Preliminary {
        pairs: Vec<(i64, i64)>,
        bye_seats: Vec<ByeSeat>,
    },
}

/// Draw the opening of the bracket for the given entrants.
///
/// Uniformly random: entrants are shuffled before pairing, and for a
/// preliminary draw the bye slots in the next round are chosen at random
/// among that round's seats.
pub fn draw_opening<R: Rng + ?Sized>(
    entrants: &[i64],
    rng: &mut R,
) -> Result<OpeningDraw, DomainError> {
    let n = entrants.len();
    if n < MIN_ENTRANTS {
        return Err(DomainError::validation(format!(
            "a knockout cup needs at least {MIN_ENTRANTS} entrants, got {n}"
        )));
    }

    let mut shuffled = entrants.to_vec();
    shuffled.shuffle(rng);

    let pow2 = highest_power_of_two(n);
    if pow2 == n {
        let pairs = shuffled.chunks(2).map(|c| (c[0], c[1])).collect();
        return Ok(OpeningDraw::Full { pairs });
    }

    let prelim_fixtures = n - pow2;
    let (prelim_entrants, bye_entrants) = shuffled.split_at(2 * prelim_fixtures);
    let pairs = prelim_entrants.chunks(2).map(|c| (c[0], c[1])).collect();

    // The round after the preliminary has pow2 seats; byes land in a random
    // subset of them, the rest stay open for preliminary winners.
    let mut seats: Vec<usize> = (0..pow2).collect();
    seats.shuffle(rng);
    let bye_seats = seats
        .iter()
        .take(bye_entrants.len())
        .zip(bye_entrants)
        .map(|(seat, player_id)| ByeSeat {
            fixture_index: seat / 2,
            slot: if seat % 2 == 0 { Slot::Home } else { Slot::Away },
            player_id: *player_id,
        })
        .collect();

    Ok(OpeningDraw::Preliminary { pairs, bye_seats })
}

/// Pair the winners of a completed round into the next round's fixtures.
///
/// Winners are taken in fixture-number order by the caller, shuffled here,
/// and paired consecutively.
pub fn pair_winners<R: Rng + ?Sized>(
    winners: &[i64],
    rng: &mut R,
) -> Result<Vec<(i64, i64)>, DomainError> {
    if winners.len() < 2 || winners.len() % 2 != 0 {
        return Err(DomainError::validation(format!(
            "cannot pair {} winners into fixtures",
            winners.len()
        )));
    }
    let mut shuffled = winners.to_vec();
    shuffled.shuffle(rng);
    Ok(shuffled.chunks(2).map(|c| (c[0], c[1])).collect())
}
