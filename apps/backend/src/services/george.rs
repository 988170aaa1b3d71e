//! George Cup orchestration: bracket creation, round draws, and winner
//! resolution.
//!
//! Draw results and coin-flip winners are random at the moment of decision
//! and persisted immediately; nothing random is ever recomputed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::domain::bracket::{self, OpeningDraw, PlannedRound};
use crate::domain::tie_break::{self, FixtureDecision, WeekStanding};
use crate::entities::george_rounds::RoundState;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::george::{self, KnockoutRound};
use crate::repos::{players, scores};

#[derive(Debug, Clone, Copy, Default)]
pub struct GeorgeCupService;

impl GeorgeCupService {
    pub fn new() -> Self {
        Self
    }

    /// Create the season's bracket: all round rows, undrawn.
    ///
    /// The round structure is fixed by the entrant count; fixtures appear
    /// later, when each round is drawn.
    pub async fn create_bracket(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
    ) -> Result<Vec<KnockoutRound>, AppError> {
        let existing = george::find_rounds_by_season(txn, season_id).await?;
        if !existing.is_empty() {
            return Err(DomainError::conflict(
                ConflictKind::Other("BRACKET_EXISTS".into()),
                format!("season {season_id} already has a bracket"),
            )
            .into());
        }

        let pool = players::find_all_by_season(txn, season_id).await?;
        let plan = bracket::plan_bracket(pool.len())?;

        let mut rounds = Vec::with_capacity(plan.len());
        for PlannedRound {
            round_no,
            name,
            fixture_count,
            ..
        } in plan
        {
            let round = george::create_round(
                txn,
                season_id,
                round_no,
                name,
                None,
                fixture_count as i16,
            )
            .await?;
            rounds.push(round);
        }

        info!(season_id, rounds = rounds.len(), entrants = pool.len(), "Bracket created");
        Ok(rounds)
    }

    /// Link a round to the game week whose scores will decide it.
    pub async fn link_round_to_week(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
        round_no: i16,
        game_week_id: i64,
    ) -> Result<(), AppError> {
        let round = george::require_round(txn, season_id, round_no).await?;
        george::link_round_to_week(txn, round.id, game_week_id).await?;
        Ok(())
    }

    /// Draw a round with entropy from the OS.
    pub async fn draw_round(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
        round_no: i16,
    ) -> Result<KnockoutRound, AppError> {
        let mut rng = StdRng::from_os_rng();
        self.draw_round_with_rng(txn, season_id, round_no, &mut rng)
            .await
    }

    /// Draw a round using the supplied RNG.
    ///
    /// Claims the round with a conditional NotStarted -> Active update
    /// first, so a doubled host action cannot produce a second draw.
    pub async fn draw_round_with_rng<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
        round_no: i16,
        rng: &mut R,
    ) -> Result<KnockoutRound, AppError> {
        info!(season_id, round_no, "Drawing knockout round");

        let rounds = george::find_rounds_by_season(txn, season_id).await?;
        let round = rounds
            .iter()
            .find(|r| r.round_no == round_no)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(
                    crate::errors::domain::NotFoundKind::KnockoutRound,
                    format!("season {season_id} has no knockout round {round_no}"),
                )
            })?;

        if round_no > 1 {
            let previous = rounds
                .iter()
                .find(|r| r.round_no == round_no - 1)
                .ok_or_else(|| {
                    DomainError::validation(format!("round {} is missing", round_no - 1))
                })?;
            if previous.state != RoundState::Completed {
                return Err(DomainError::conflict(
                    ConflictKind::PreviousRoundIncomplete,
                    format!(
                        "'{}' must complete before '{}' can be drawn",
                        previous.name, round.name
                    ),
                )
                .into());
            }
        }

        george::claim_round_for_draw(txn, &round).await?;

        if round_no == 1 {
            self.draw_opening_round(txn, &rounds, &round, rng).await?;
        } else {
            self.draw_later_round(txn, &rounds, &round, rng).await?;
        }

        debug!(season_id, round_no, "Transition: NotStarted -> Active");
        Ok(KnockoutRound {
            state: RoundState::Active,
            ..round
        })
    }

    /// First round: shuffle the full field. A non-power-of-two field fights
    /// a preliminary round, and the byes are seated now into random slots of
    /// the following round.
    async fn draw_opening_round<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        rounds: &[KnockoutRound],
        round: &KnockoutRound,
        rng: &mut R,
    ) -> Result<(), AppError> {
        let pool = players::find_all_by_season(txn, round.season_id).await?;
        let entrants: Vec<i64> = pool.iter().map(|p| p.id).collect();

        match bracket::draw_opening(&entrants, rng)? {
            OpeningDraw::Full { pairs } => {
                let seats = pairs.into_iter().map(|(h, a)| (Some(h), Some(a))).collect();
                george::create_fixtures(txn, round.id, seats).await?;
            }
            OpeningDraw::Preliminary { pairs, bye_seats } => {
                let seats = pairs.into_iter().map(|(h, a)| (Some(h), Some(a))).collect();
                george::create_fixtures(txn, round.id, seats).await?;

                // Shell out the next round now: bye entrants take their
                // random seats, the rest stay open for preliminary winners.
                let next = rounds
                    .iter()
                    .find(|r| r.round_no == round.round_no + 1)
                    .ok_or_else(|| {
                        DomainError::validation("preliminary round has no following round")
                    })?;
                let mut next_seats: Vec<(Option<i64>, Option<i64>)> =
                    vec![(None, None); next.fixture_count as usize];
                for seat in bye_seats {
                    let fixture = &mut next_seats[seat.fixture_index];
                    match seat.slot {
                        bracket::Slot::Home => fixture.0 = Some(seat.player_id),
                        bracket::Slot::Away => fixture.1 = Some(seat.player_id),
                    }
                }
                george::create_fixtures(txn, next.id, next_seats).await?;
            }
        }
        Ok(())
    }

    /// Later round: the previous round's winners, shuffled, fill this
    /// round's fixtures — either pre-created shells (after a preliminary)
    /// or fresh pairings.
    async fn draw_later_round<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        rounds: &[KnockoutRound],
        round: &KnockoutRound,
        rng: &mut R,
    ) -> Result<(), AppError> {
        let previous = rounds
            .iter()
            .find(|r| r.round_no == round.round_no - 1)
            .ok_or_else(|| DomainError::validation("previous round is missing"))?;
        let prev_fixtures = george::find_fixtures_by_round(txn, previous.id).await?;
        let mut winners: Vec<i64> = Vec::with_capacity(prev_fixtures.len());
        for fixture in &prev_fixtures {
            winners.push(fixture.winner_player_id.ok_or_else(|| {
                DomainError::conflict(
                    ConflictKind::PreviousRoundIncomplete,
                    format!("fixture {} has no winner yet", fixture.fixture_no),
                )
            })?);
        }

        let shells = george::find_fixtures_by_round(txn, round.id).await?;
        if shells.is_empty() {
            let pairs = bracket::pair_winners(&winners, rng)?;
            let seats = pairs.into_iter().map(|(h, a)| (Some(h), Some(a))).collect();
            george::create_fixtures(txn, round.id, seats).await?;
            return Ok(());
        }

        // Post-preliminary round: byes are already seated; winners land in
        // the open seats in fixture order, shuffled first.
        let mut open_seats = Vec::new();
        for shell in &shells {
            if shell.home_player_id.is_none() {
                open_seats.push(shell.clone());
            }
            if shell.away_player_id.is_none() {
                open_seats.push(shell.clone());
            }
        }
        if open_seats.len() != winners.len() {
            return Err(DomainError::validation(format!(
                "{} open seats for {} preliminary winners",
                open_seats.len(),
                winners.len()
            ))
            .into());
        }
        winners.shuffle(rng);
        for (shell, winner) in open_seats.iter().zip(winners) {
            // Refetch so the second seat of a fixture sees the first fill.
            let fixtures = george::find_fixtures_by_round(txn, round.id).await?;
            let current = fixtures
                .iter()
                .find(|f| f.id == shell.id)
                .ok_or_else(|| DomainError::validation("fixture vanished during draw"))?;
            george::seat_player(txn, current, winner).await?;
        }
        Ok(())
    }

    /// Decide every undecided fixture of a drawn round from its linked
    /// week's standings. Returns true when the round completed.
    pub async fn resolve_round(
        &self,
        txn: &DatabaseTransaction,
        round: &KnockoutRound,
    ) -> Result<bool, AppError> {
        let mut rng = StdRng::from_os_rng();
        self.resolve_round_with_rng(txn, round, &mut rng).await
    }

    /// Winner determination with a supplied RNG for the coin-flip rung.
    ///
    /// Already-decided fixtures are left untouched — the stored outcome of
    /// a past coin flip is reused, never re-flipped.
    pub async fn resolve_round_with_rng<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        round: &KnockoutRound,
        rng: &mut R,
    ) -> Result<bool, AppError> {
        if round.state != RoundState::Active {
            return Ok(false);
        }
        let game_week_id = match round.game_week_id {
            Some(id) => id,
            None => return Ok(false),
        };
        if !scores::week_scores_exist(txn, game_week_id).await? {
            return Err(DomainError::validation(format!(
                "game week {game_week_id} has no scores yet; cannot resolve '{}'",
                round.name
            ))
            .into());
        }

        let standings = scores::week_standings(txn, game_week_id).await?;
        let standing_of =
            |player_id: i64| standings.get(&player_id).copied().unwrap_or(WeekStanding::default());

        let fixtures = george::find_fixtures_by_round(txn, round.id).await?;
        let mut unresolved = 0usize;
        for fixture in &fixtures {
            if fixture.winner_player_id.is_some() {
                continue;
            }
            match tie_break::decide_fixture(
                fixture.home_player_id,
                fixture.away_player_id,
                standing_of,
                rng,
            ) {
                FixtureDecision::Winner {
                    player_id,
                    decided_by,
                } => {
                    george::record_winner(txn, fixture, player_id, decided_by).await?;
                    debug!(
                        round_id = round.id,
                        fixture_no = fixture.fixture_no,
                        winner = player_id,
                        ?decided_by,
                        "Fixture decided"
                    );
                }
                FixtureDecision::Unresolved => unresolved += 1,
            }
        }

        if unresolved == 0 {
            george::complete_round(txn, round.id).await?;
            info!(round_id = round.id, name = %round.name, "Knockout round completed");
            return Ok(true);
        }
        Ok(false)
    }

    /// Idempotency repair: drop any duplicate round rows created by a
    /// retried bracket setup, keeping the earliest per round number.
    pub async fn cleanup_duplicate_rounds(
        &self,
        txn: &DatabaseTransaction,
        season_id: i64,
    ) -> Result<Vec<i64>, AppError> {
        let deleted = george::delete_duplicate_rounds(txn, season_id).await?;
        if !deleted.is_empty() {
            info!(season_id, deleted = deleted.len(), "Removed duplicate knockout rounds");
        }
        Ok(deleted)
    }
}
