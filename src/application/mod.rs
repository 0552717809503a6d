// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the rendering layer and the catalog services
// - Translates domain state into UI-friendly DTOs
// - Never contains business rules

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
