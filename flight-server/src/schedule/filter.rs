//! Date filter.
//!
//! Keeps only the flights departing on the mode's target date.

use chrono::NaiveDate;

use crate::domain::{FlightRow, Mode, SeatCounts};
use crate::loader::RawRecord;

/// Keep records whose scheduled departure falls on `target`.
///
/// Only the calendar date is compared; records without a departure
/// timestamp never match. Input order is preserved.
pub fn departing_on(records: Vec<RawRecord>, target: NaiveDate) -> Vec<FlightRow> {
    records
        .into_iter()
        .filter_map(|record| {
            let scheduled_departure = record.scheduled_departure?;
            if scheduled_departure.date() != target {
                return None;
            }
            Some(FlightRow {
                flight_number: record.flight_number,
                departure: record.departure,
                arrival: record.arrival,
                tail_number: record.tail_number,
                scheduled_departure,
                scheduled_arrival: record.scheduled_arrival,
                seats: SeatCounts::ZERO,
            })
        })
        .collect()
}

/// Keep records departing on the date `mode` targets from `today`.
pub fn select_departures(records: Vec<RawRecord>, mode: Mode, today: NaiveDate) -> Vec<FlightRow> {
    let Some(target) = mode.target_date(today) else {
        return Vec::new();
    };
    let selected = departing_on(records, target);
    tracing::debug!(%mode, %target, selected = selected.len(), "filtered by departure date");
    selected
}
