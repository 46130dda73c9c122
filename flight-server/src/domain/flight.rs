//! Flight rows and seat counts.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::RoutePairKey;

/// Business and economy seat counts for one flight.
///
/// Both counts are zero unless a seat rule assigns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeatCounts {
    /// Business ("J") class seats
    pub business: u32,
    /// Economy ("Y") class seats
    pub economy: u32,
}

impl SeatCounts {
    /// No seats in either class.
    pub const ZERO: SeatCounts = SeatCounts {
        business: 0,
        economy: 0,
    };

    /// Create seat counts.
    pub const fn new(business: u32, economy: u32) -> Self {
        Self { business, economy }
    }

    /// Returns true if both classes are zero.
    pub fn is_zero(&self) -> bool {
        self.business == 0 && self.economy == 0
    }
}

impl fmt::Display for SeatCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J{}/Y{}", self.business, self.economy)
    }
}

/// One flight leg on the target date.
///
/// Only rows whose scheduled departure parsed as a timestamp ever become a
/// `FlightRow`; the scheduled arrival may still be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRow {
    /// Flight number (e.g., "MD 752")
    pub flight_number: String,

    /// Departure airport code
    pub departure: String,

    /// Arrival airport code
    pub arrival: String,

    /// Aircraft registration, used for capacity lookup
    pub tail_number: String,

    /// Scheduled departure, local time
    pub scheduled_departure: NaiveDateTime,

    /// Scheduled arrival, local time
    pub scheduled_arrival: Option<NaiveDateTime>,

    /// Seat counts; zero until the seat stage runs
    pub seats: SeatCounts,
}

impl FlightRow {
    /// Returns the canonical unordered key for this leg's route.
    pub fn route_key(&self) -> RoutePairKey {
        RoutePairKey::new(&self.departure, &self.arrival)
    }

    /// Returns the local calendar date of departure.
    pub fn departure_date(&self) -> NaiveDate {
        self.scheduled_departure.date()
    }

    /// Returns a copy of this row carrying the given seat counts.
    pub fn with_seats(mut self, seats: SeatCounts) -> Self {
        self.seats = seats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 11)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn row(dep: &str, arr: &str) -> FlightRow {
        FlightRow {
            flight_number: "MD100".to_string(),
            departure: dep.to_string(),
            arrival: arr.to_string(),
            tail_number: "5RMJF".to_string(),
            scheduled_departure: at(8, 0),
            scheduled_arrival: Some(at(9, 30)),
            seats: SeatCounts::default(),
        }
    }

    #[test]
    fn seat_counts_default_to_zero() {
        assert_eq!(SeatCounts::default(), SeatCounts::ZERO);
        assert!(SeatCounts::default().is_zero());
        assert!(!SeatCounts::new(0, 1).is_zero());
    }

    #[test]
    fn seat_counts_display() {
        assert_eq!(SeatCounts::new(2, 4).to_string(), "J2/Y4");
    }

    #[test]
    fn outbound_and_return_share_route_key() {
        assert_eq!(row("CDG", "TNR").route_key(), row("TNR", "CDG").route_key());
        assert_ne!(row("CDG", "TNR").route_key(), row("TNR", "TLE").route_key());
    }

    #[test]
    fn departure_date_ignores_time() {
        let r = row("TNR", "TLE");
        assert_eq!(r.departure_date(), NaiveDate::from_ymd_opt(2025, 7, 11).unwrap());
    }

    #[test]
    fn with_seats_replaces_counts() {
        let r = row("TLE", "TNR").with_seats(SeatCounts::new(2, 2));
        assert_eq!(r.seats, SeatCounts::new(2, 2));
    }
}
