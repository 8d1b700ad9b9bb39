//! Shared types for the hotel catalog
//!
//! Domain models exchanged between the generator and its consumers,
//! plus the unified error and response types used by the HTTP layer.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{HotelData, HotelType};
