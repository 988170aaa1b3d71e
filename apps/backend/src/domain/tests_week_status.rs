use time::macros::datetime;
use time::Duration;

use crate::domain::clock::{Clock, FixedClock};
use crate::domain::week_status::{classify, WeekStatus, WeekWindows};

fn windows() -> WeekWindows {
    WeekWindows {
        predictions_open: datetime!(2025-08-01 09:00 UTC),
        predictions_close: datetime!(2025-08-08 18:00 UTC),
        live_start: datetime!(2025-08-09 12:00 UTC),
        live_end: datetime!(2025-08-10 22:00 UTC),
    }
}

#[test]
fn before_open_is_upcoming() {
    let w = windows();
    let now = w.predictions_open - Duration::minutes(1);
    assert_eq!(classify(&w, false, now), WeekStatus::Upcoming);
}

#[test]
fn open_window_takes_predictions() {
    let w = windows();
    assert_eq!(classify(&w, false, w.predictions_open), WeekStatus::Predictions);
    let now = w.predictions_close - Duration::seconds(1);
    assert_eq!(classify(&w, false, now), WeekStatus::Predictions);
}

#[test]
fn gap_between_close_and_kickoff_is_explicit() {
    let w = windows();
    assert_eq!(
        classify(&w, false, w.predictions_close),
        WeekStatus::ClosedPendingLive
    );
    let now = w.live_start - Duration::minutes(1);
    assert_eq!(classify(&w, false, now), WeekStatus::ClosedPendingLive);
}

#[test]
fn live_window_is_inclusive_at_both_ends() {
    let w = windows();
    assert_eq!(classify(&w, false, w.live_start), WeekStatus::Live);
    assert_eq!(classify(&w, false, w.live_end), WeekStatus::Live);
}

#[test]
fn after_live_depends_on_scores() {
    let w = windows();
    let now = w.live_end + Duration::hours(1);
    assert_eq!(classify(&w, false, now), WeekStatus::AwaitingScores);
    assert_eq!(classify(&w, true, now), WeekStatus::Completed);
}

#[test]
fn fixed_clock_pins_now() {
    let instant = datetime!(2025-08-09 13:00 UTC);
    let clock = FixedClock(instant);
    assert_eq!(clock.now(), instant);
    assert_eq!(classify(&windows(), false, clock.now()), WeekStatus::Live);
}
