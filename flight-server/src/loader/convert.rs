//! Conversion from raw cells to schedule records.
//!
//! Text columns are rendered the way a reader of the sheet would see them.
//! Timestamp columns are coerced leniently: a cell that is not a date
//! becomes `None` and the row is kept.

use calamine::Data;
use chrono::NaiveDateTime;

use crate::domain::parse_timestamp;

use super::columns::{Column, ColumnIndex};
use super::workbook::RawTable;

const EMPTY_CELL: &Data = &Data::Empty;

/// One export row after column selection and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub tail_number: String,
    pub scheduled_departure: Option<NaiveDateTime>,
    pub scheduled_arrival: Option<NaiveDateTime>,
}

/// Render a cell as text.
///
/// Integral numbers lose their fractional part (`752.0` reads as `752`);
/// empty and error cells become the empty string.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Coerce a cell to a timestamp, if it holds one.
///
/// Native date cells and date-like text are accepted. Bare numbers are not
/// treated as dates: without a date format they are just numbers.
pub fn cell_timestamp(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime(),
        Data::DateTimeIso(s) | Data::String(s) => parse_timestamp(s),
        _ => None,
    }
}

/// Convert every data row of `table` into a record.
///
/// Rows shorter than the header are padded with empty cells.
pub fn convert_rows(table: &RawTable, index: &ColumnIndex) -> Vec<RawRecord> {
    let records: Vec<RawRecord> = table
        .rows()
        .iter()
        .map(|row| {
            let cell = |column: Column| row.get(index.position(column)).unwrap_or(EMPTY_CELL);
            RawRecord {
                flight_number: cell_text(cell(Column::FlightNumber)),
                departure: cell_text(cell(Column::Departure)),
                arrival: cell_text(cell(Column::Arrival)),
                tail_number: cell_text(cell(Column::TailNumber)),
                scheduled_departure: cell_timestamp(cell(Column::ScheduledDeparture)),
                scheduled_arrival: cell_timestamp(cell(Column::ScheduledArrival)),
            }
        })
        .collect();

    let bad_departures = records
        .iter()
        .filter(|r| r.scheduled_departure.is_none())
        .count();
    let bad_arrivals = records
        .iter()
        .filter(|r| r.scheduled_arrival.is_none())
        .count();
    if bad_departures > 0 || bad_arrivals > 0 {
        tracing::warn!(
            rows = records.len(),
            bad_departures,
            bad_arrivals,
            "some timestamps could not be parsed; affected departures are skipped"
        );
    }

    records
}
