//! Per-aircraft seat capacity ceilings.
//!
//! Seat counts assigned by the seat rules are clamped to what the aircraft
//! can carry in each class. Aircraft are identified by tail number; an
//! aircraft absent from the table has no ceiling at all.

use std::collections::HashMap;
use std::fmt;

use crate::domain::SeatCounts;

/// Upper bound on seats in one cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatLimit {
    /// At most this many seats
    Limited(u32),
    /// No configured limit
    Unbounded,
}

impl SeatLimit {
    /// Clamp a seat count to this limit.
    ///
    /// This is a plain minimum: it never raises a count.
    pub fn clamp(self, seats: u32) -> u32 {
        match self {
            SeatLimit::Limited(max) => seats.min(max),
            SeatLimit::Unbounded => seats,
        }
    }
}

impl fmt::Display for SeatLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatLimit::Limited(max) => write!(f, "{max}"),
            SeatLimit::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Seat ceilings for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ceiling {
    /// Business class limit
    pub business: SeatLimit,
    /// Economy class limit
    pub economy: SeatLimit,
}

impl Ceiling {
    /// Ceiling of an aircraft with no configured limits.
    pub const UNBOUNDED: Ceiling = Ceiling {
        business: SeatLimit::Unbounded,
        economy: SeatLimit::Unbounded,
    };

    /// A ceiling with fixed limits for both classes.
    pub const fn limited(business_max: u32, economy_max: u32) -> Self {
        Self {
            business: SeatLimit::Limited(business_max),
            economy: SeatLimit::Limited(economy_max),
        }
    }

    /// Clamp both classes of `seats` to this ceiling.
    pub fn clamp(&self, seats: SeatCounts) -> SeatCounts {
        SeatCounts {
            business: self.business.clamp(seats.business),
            economy: self.economy.clamp(seats.economy),
        }
    }
}

/// Immutable lookup from tail number to seat ceiling.
#[derive(Debug, Clone, Default)]
pub struct CapacityCeilings {
    ceilings: HashMap<String, Ceiling>,
}

impl CapacityCeilings {
    /// Create an empty table, in which every aircraft is unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The production fleet table.
    pub fn fleet() -> Self {
        CapacityCeilingsBuilder::new()
            .add("5RMJE", 8, 62) // ATR 72-500
            .add("5RMJF", 8, 62) // ATR 72-500
            .add("5RMJT", 0, 48) // ATR 42-500
            .add("5RMGC", 0, 19) // DHC-6 Twin Otter
            .add("5REJB", 16, 150) // Boeing 737-800
            .build()
    }

    /// Look up the ceiling for a tail number.
    ///
    /// Returns `Ceiling::UNBOUNDED` for aircraft not in the table.
    pub fn get(&self, tail_number: &str) -> Ceiling {
        self.ceilings
            .get(tail_number)
            .copied()
            .unwrap_or(Ceiling::UNBOUNDED)
    }

    /// Clamp seat counts to the ceiling of the given aircraft.
    pub fn clamp(&self, tail_number: &str, seats: SeatCounts) -> SeatCounts {
        self.get(tail_number).clamp(seats)
    }

    /// Returns the number of aircraft with a configured ceiling.
    pub fn len(&self) -> usize {
        self.ceilings.len()
    }

    /// Returns true if no aircraft has a configured ceiling.
    pub fn is_empty(&self) -> bool {
        self.ceilings.is_empty()
    }
}

/// Builder for capacity tables.
#[derive(Debug, Default)]
pub struct CapacityCeilingsBuilder {
    inner: CapacityCeilings,
}

impl CapacityCeilingsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an aircraft with fixed limits. A repeated tail number replaces
    /// the earlier entry.
    pub fn add(self, tail_number: &str, business_max: u32, economy_max: u32) -> Self {
        self.ceiling(tail_number, Ceiling::limited(business_max, economy_max))
    }

    /// Add an aircraft with an arbitrary ceiling.
    pub fn ceiling(mut self, tail_number: &str, ceiling: Ceiling) -> Self {
        self.inner
            .ceilings
            .insert(tail_number.to_string(), ceiling);
        self
    }

    /// Build the table.
    pub fn build(self) -> CapacityCeilings {
        self.inner
    }
}
