//! Web layer for the bus route server.
//!
//! Provides HTTP endpoints for direct-connection queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
