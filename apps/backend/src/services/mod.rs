//! Service layer: host-action orchestration over the repositories.

pub mod george;
pub mod lavery;
pub mod predictions;
pub mod scoring;
pub mod weeks;

pub use george::GeorgeCupService;
pub use lavery::{LaveryCupService, MarkOutcome};
pub use predictions::PredictionService;
pub use scoring::{ResultEntry, ScoringService, WeekScoringOutcome};
pub use weeks::WeekService;
