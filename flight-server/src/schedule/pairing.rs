//! Route pairing and ordering.
//!
//! Legs flying between the same two airports, in either direction, are
//! kept adjacent so an outbound leg sits next to its return. Within a route
//! legs run in departure order, and routes are ordered by their first
//! departure of the day.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{FlightRow, RoutePairKey};

/// All legs of one route pair, in departure order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup {
    /// The route both directions share
    pub key: RoutePairKey,
    /// Legs sorted by scheduled departure, ties in input order
    pub legs: Vec<FlightRow>,
}

impl RouteGroup {
    /// Earliest scheduled departure in the group.
    pub fn first_departure(&self) -> Option<NaiveDateTime> {
        self.legs.first().map(|leg| leg.scheduled_departure)
    }
}

/// Group legs by route pair and order groups and legs chronologically.
///
/// Groups with the same first departure keep the order in which their
/// route was first seen in the input.
pub fn group_by_route_pair(rows: Vec<FlightRow>) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();
    let mut slots: HashMap<RoutePairKey, usize> = HashMap::new();

    for row in rows {
        let key = row.route_key();
        match slots.get(&key) {
            Some(&slot) => groups[slot].legs.push(row),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(RouteGroup {
                    key,
                    legs: vec![row],
                });
            }
        }
    }

    // Both sorts are stable, which gives the tie-breaks above
    for group in &mut groups {
        group.legs.sort_by_key(|leg| leg.scheduled_departure);
    }
    groups.sort_by_key(RouteGroup::first_departure);

    groups
}

/// Flatten route groups into a single ordered sequence of legs.
pub fn order_by_route_pair(rows: Vec<FlightRow>) -> Vec<FlightRow> {
    group_by_route_pair(rows)
        .into_iter()
        .flat_map(|group| group.legs)
        .collect()
}
