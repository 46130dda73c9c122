//! Seat-count derivation.
//!
//! In `commandes` mode, legs flying into the hub get base seat counts that
//! depend on where they come from. Counts are then clamped to the
//! aircraft's capacity ceiling. Every other leg gets zero seats.

use std::collections::HashSet;

use crate::capacity::CapacityCeilings;
use crate::domain::{FlightRow, Mode, SeatCounts};

/// Default hub airport.
const DEFAULT_HUB: &str = "TNR";

/// Default remote airports, whose return legs get the larger allocation.
const DEFAULT_REMOTE_AIRPORTS: [&str; 3] = ["SVB", "DIE", "NOS"];

/// Rules deciding base seat counts for a leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRules {
    /// Airport whose inbound legs are return legs
    pub hub: String,

    /// Departure airports of return legs that get `remote_counts`
    pub remote_airports: HashSet<String>,

    /// Base counts for a return leg from a remote airport
    pub remote_counts: SeatCounts,

    /// Base counts for any other return leg
    pub standard_counts: SeatCounts,
}

impl SeatRules {
    /// Create rules with the given hub and remote airports and default counts.
    pub fn new<I, S>(hub: impl Into<String>, remote_airports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hub: hub.into(),
            remote_airports: remote_airports.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the counts for return legs from remote airports.
    pub fn with_remote_counts(mut self, counts: SeatCounts) -> Self {
        self.remote_counts = counts;
        self
    }

    /// Set the counts for other return legs.
    pub fn with_standard_counts(mut self, counts: SeatCounts) -> Self {
        self.standard_counts = counts;
        self
    }

    /// Returns true if the leg arrives at the hub.
    pub fn is_return_leg(&self, row: &FlightRow) -> bool {
        row.arrival == self.hub
    }

    /// Base counts for a leg, before any capacity clamp.
    pub fn base_counts(&self, mode: Mode, row: &FlightRow) -> SeatCounts {
        if mode != Mode::Commandes || !self.is_return_leg(row) {
            return SeatCounts::ZERO;
        }
        if self.remote_airports.contains(&row.departure) {
            self.remote_counts
        } else {
            self.standard_counts
        }
    }

    /// Final counts for a leg: base counts clamped to the aircraft's ceiling.
    pub fn seats_for(
        &self,
        mode: Mode,
        row: &FlightRow,
        ceilings: &CapacityCeilings,
    ) -> SeatCounts {
        ceilings.clamp(&row.tail_number, self.base_counts(mode, row))
    }
}

impl Default for SeatRules {
    fn default() -> Self {
        Self {
            hub: DEFAULT_HUB.to_string(),
            remote_airports: DEFAULT_REMOTE_AIRPORTS
                .iter()
                .map(|a| (*a).to_string())
                .collect(),
            remote_counts: SeatCounts::new(2, 4),
            standard_counts: SeatCounts::new(2, 2),
        }
    }
}

/// Assign seat counts to every row, keeping row order.
pub fn assign_seats(
    rows: Vec<FlightRow>,
    mode: Mode,
    rules: &SeatRules,
    ceilings: &CapacityCeilings,
) -> Vec<FlightRow> {
    rows.into_iter()
        .map(|row| {
            let seats = rules.seats_for(mode, &row, ceilings);
            row.with_seats(seats)
        })
        .collect()
}
