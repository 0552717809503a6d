// src/error/mod.rs
//
// Application-wide error type

pub mod types;

pub use types::{AppError, AppResult};
