//! Domain types for flight schedule preparation.
//!
//! This module contains the value types the pipeline passes between its
//! stages. They carry no I/O and no configuration.

mod flight;
mod mode;
mod route;
mod time;

pub use flight::{FlightRow, SeatCounts};
pub use mode::{InvalidMode, Mode};
pub use route::RoutePairKey;
pub use time::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};
