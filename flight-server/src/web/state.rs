//! Application state for the web layer.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::capacity::CapacityCeilings;
use crate::schedule::SeatRules;

/// Shared application state.
///
/// Holds the read-only tables every upload is processed against.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-aircraft seat ceilings
    pub ceilings: Arc<CapacityCeilings>,

    /// Base seat-count rules
    pub rules: Arc<SeatRules>,

    /// Reference date for mode offsets; `None` means the local date
    pub today: Option<NaiveDate>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ceilings: CapacityCeilings, rules: SeatRules) -> Self {
        Self {
            ceilings: Arc::new(ceilings),
            rules: Arc::new(rules),
            today: None,
        }
    }

    /// Pin the reference date instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The reference date for a request.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for AppState {
    /// Production fleet ceilings and seat rules.
    fn default() -> Self {
        Self::new(CapacityCeilings::fleet(), SeatRules::default())
    }
}
