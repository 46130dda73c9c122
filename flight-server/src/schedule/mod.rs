//! Schedule preparation stages.
//!
//! The stages run in order on the loader's records:
//! 1. [`select_departures`] keeps flights on the mode's target date
//! 2. [`order_by_route_pair`] puts outbound and return legs side by side
//! 3. [`assign_seats`] computes clamped seat counts

mod filter;
mod pairing;
mod seats;

pub use filter::{departing_on, select_departures};
pub use pairing::{RouteGroup, group_by_route_pair, order_by_route_pair};
pub use seats::{SeatRules, assign_seats};
