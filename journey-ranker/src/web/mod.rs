//! Web layer for the journey ranker.
//!
//! Exposes the ranking service over HTTP with JSON bodies.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
