use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn code_of(err: DomainError) -> String {
    AppError::from(err).code().to_string()
}

#[test]
fn validation_maps_to_validation_code() {
    let app = AppError::from(DomainError::validation("goals must be non-negative"));
    assert!(matches!(app, AppError::Validation { .. }));
    assert_eq!(app.code(), "VALIDATION");
}

#[test]
fn conflict_kinds_keep_stable_codes() {
    assert_eq!(
        code_of(DomainError::conflict(ConflictKind::RoundAlreadyDrawn, "r1")),
        "ROUND_ALREADY_DRAWN"
    );
    assert_eq!(
        code_of(DomainError::conflict(
            ConflictKind::PreviousRoundIncomplete,
            "r2"
        )),
        "PREVIOUS_ROUND_INCOMPLETE"
    );
    assert_eq!(
        code_of(DomainError::conflict(ConflictKind::WinnerAlreadyDecided, "f9")),
        "WINNER_ALREADY_DECIDED"
    );
    assert_eq!(
        code_of(DomainError::conflict(ConflictKind::Other("x".into()), "y")),
        "CONFLICT"
    );
}

#[test]
fn not_found_kinds_keep_stable_codes() {
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::Season, "s")),
        "SEASON_NOT_FOUND"
    );
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::GameWeek, "gw")),
        "GAME_WEEK_NOT_FOUND"
    );
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::Fixture, "f")),
        "FIXTURE_NOT_FOUND"
    );
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::Player, "p")),
        "PLAYER_NOT_FOUND"
    );
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::KnockoutRound, "k")),
        "KNOCKOUT_ROUND_NOT_FOUND"
    );
    assert_eq!(
        code_of(DomainError::not_found(NotFoundKind::SurvivorRound, "l")),
        "SURVIVOR_ROUND_NOT_FOUND"
    );
}

#[test]
fn infra_unavailability_is_distinguished() {
    let app = AppError::from(DomainError::infra(
        InfraErrorKind::DbUnavailable,
        "pool exhausted",
    ));
    assert!(matches!(app, AppError::DbUnavailable { .. }));
    assert_eq!(app.code(), "DB_UNAVAILABLE");

    let app = AppError::from(DomainError::infra(InfraErrorKind::Timeout, "slow"));
    assert!(matches!(app, AppError::Internal { .. }));
}

#[test]
fn db_errors_split_on_connectivity() {
    let conn = sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into()));
    assert_eq!(AppError::from(conn).code(), "DB_UNAVAILABLE");

    let query = sea_orm::DbErr::Custom("bad query".into());
    assert_eq!(AppError::from(query).code(), "DB_ERROR");

    let domain = DomainError::from(sea_orm::DbErr::Custom("bad query".into()));
    assert!(matches!(
        domain,
        DomainError::Infra(InfraErrorKind::Other(_), _)
    ));
}
