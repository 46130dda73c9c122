//! Flight schedule processor.
//!
//! Reads an airline's `.xls` schedule export and answers: "which flights
//! leave tomorrow (or the day after), paired outbound with return, and how
//! many seats does each return leg get?"

pub mod capacity;
pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod pipeline;
pub mod schedule;
pub mod web;
