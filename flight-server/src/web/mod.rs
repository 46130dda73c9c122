//! Web layer for the flight schedule processor.
//!
//! Accepts `.xls` uploads over HTTP and returns the processed flights as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
