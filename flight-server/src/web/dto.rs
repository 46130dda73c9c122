//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::domain::{FlightRow, format_timestamp};

/// A flight in the processing result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightResult {
    /// Flight number
    pub num_vol: String,

    /// Departure airport
    pub depart: String,

    /// Arrival airport
    pub arrivee: String,

    /// Aircraft tail number
    pub imma: String,

    /// Scheduled departure, `YYYY-MM-DDTHH:MM:SS`
    pub sd_loc: String,

    /// Scheduled arrival, or null when the cell could not be read
    pub sa_loc: Option<String>,

    /// Business seats
    pub jc: u32,

    /// Economy seats
    pub yc: u32,
}

impl FlightResult {
    /// Convert a processed row for the response.
    pub fn from_row(row: &FlightRow) -> Self {
        Self {
            num_vol: row.flight_number.clone(),
            depart: row.departure.clone(),
            arrivee: row.arrival.clone(),
            imma: row.tail_number.clone(),
            sd_loc: format_timestamp(&row.scheduled_departure),
            sa_loc: row.scheduled_arrival.as_ref().map(format_timestamp),
            jc: row.seats.business,
            yc: row.seats.economy,
        }
    }
}

impl From<FlightRow> for FlightResult {
    fn from(row: FlightRow) -> Self {
        Self::from_row(&row)
    }
}

/// Convert processed rows for the response, keeping their order.
pub fn flight_results(rows: &[FlightRow]) -> Vec<FlightResult> {
    rows.iter().map(FlightResult::from_row).collect()
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
