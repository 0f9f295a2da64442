//! Web layer for the location service.
//!
//! Exposes location search and the category listing as JSON endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
