//! Domain layer: pure pool logic, no I/O and no sea-orm types.

pub mod bracket;
pub mod clock;
pub mod scoring;
pub mod survivor;
pub mod tie_break;
pub mod week_status;

#[cfg(test)]
mod tests_bracket;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_survivor;
#[cfg(test)]
mod tests_week_status;

// Re-exports for ergonomics
pub use clock::{Clock, FixedClock, SystemClock};
pub use scoring::{score_prediction, score_week, weekly_bonus, PlayerWeekScore, Scoreline};
pub use tie_break::{DecidedBy, WeekStanding};
pub use week_status::{classify, WeekStatus, WeekWindows};
