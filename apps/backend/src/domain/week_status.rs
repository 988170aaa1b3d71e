//! Game-week status classification.
//!
//! Pure function of the week's four window timestamps, the "scores exist"
//! fact, and an injected `now`. The band between predictions closing and
//! kick-off is classified explicitly as [`WeekStatus::ClosedPendingLive`]
//! so every call site agrees on it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The four timestamps that frame a game week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindows {
    pub predictions_open: OffsetDateTime,
    pub predictions_close: OffsetDateTime,
    pub live_start: OffsetDateTime,
    pub live_end: OffsetDateTime,
}

/// Where a game week sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStatus {
    Upcoming,
    /// The prediction window is open.
    Predictions,
    /// Predictions closed, matches not yet kicked off.
    ClosedPendingLive,
    Live,
    /// Matches over, host has not entered results yet.
    AwaitingScores,
    Completed,
}

/// Classify a game week at instant `now`.
pub fn classify(windows: &WeekWindows, scores_exist: bool, now: OffsetDateTime) -> WeekStatus {
    if now < windows.predictions_open {
        WeekStatus::Upcoming
    } else if now < windows.predictions_close {
        WeekStatus::Predictions
    } else if now < windows.live_start {
        WeekStatus::ClosedPendingLive
    } else if now <= windows.live_end {
        WeekStatus::Live
    } else if scores_exist {
        WeekStatus::Completed
    } else {
        WeekStatus::AwaitingScores
    }
}
