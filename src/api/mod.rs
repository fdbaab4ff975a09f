//! HTTP API module for the Expense Settlement Engine.
//!
//! This module provides the REST endpoint that turns raw attendance text
//! into a rendered expense report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettlementRequest;
pub use response::{ApiError, SettlementResponse};
pub use state::AppState;
