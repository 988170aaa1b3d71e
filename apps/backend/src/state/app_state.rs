//! Shared application state: the database handle and the clock.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock, for tests that need a pinned instant.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
