//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for monthly net pay
//! calculation and the reverse net-to-gross search.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{CalculateRequest, ReverseCalculateRequest};
pub use response::ApiError;
