// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the rendering layer and services
// - Commands return DTOs; errors leave as ErrorResponse JSON
// - Commands NEVER contain business logic

pub mod product_commands;

pub use product_commands::*;
