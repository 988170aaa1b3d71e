//! Application-level error type with stable error codes.
//!
//! `AppError` is what services hand back to whatever surface sits on top of
//! this crate (a routing layer, a CLI, a test harness). Domain errors map
//! into it losing no information that a host-facing message needs.

use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for the surface layer.
    pub fn code(&self) -> &str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Conflict { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Db { .. } => "DB_ERROR",
            AppError::DbUnavailable { .. } => "DB_UNAVAILABLE",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn invalid(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::Validation {
                code: "VALIDATION",
                detail,
            },
            DomainError::Conflict(kind, detail) => AppError::Conflict {
                code: match kind {
                    ConflictKind::RoundAlreadyDrawn => "ROUND_ALREADY_DRAWN",
                    ConflictKind::PreviousRoundIncomplete => "PREVIOUS_ROUND_INCOMPLETE",
                    ConflictKind::WinnerAlreadyDecided => "WINNER_ALREADY_DECIDED",
                    _ => "CONFLICT",
                },
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: match kind {
                    crate::errors::domain::NotFoundKind::Season => "SEASON_NOT_FOUND",
                    crate::errors::domain::NotFoundKind::GameWeek => "GAME_WEEK_NOT_FOUND",
                    crate::errors::domain::NotFoundKind::Fixture => "FIXTURE_NOT_FOUND",
                    crate::errors::domain::NotFoundKind::Player => "PLAYER_NOT_FOUND",
                    crate::errors::domain::NotFoundKind::KnockoutRound => {
                        "KNOCKOUT_ROUND_NOT_FOUND"
                    }
                    crate::errors::domain::NotFoundKind::SurvivorRound => {
                        "SURVIVOR_ROUND_NOT_FOUND"
                    }
                    _ => "NOT_FOUND",
                },
                detail,
            },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                _ => AppError::Internal { detail },
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match &err {
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
                AppError::DbUnavailable {
                    detail: err.to_string(),
                }
            }
            _ => AppError::Db {
                detail: err.to_string(),
            },
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(err: sea_orm::DbErr) -> Self {
        match &err {
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, err.to_string())
            }
            _ => DomainError::infra(InfraErrorKind::Other("db".into()), err.to_string()),
        }
    }
}
