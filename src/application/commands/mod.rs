// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Errors leave as ErrorResponse JSON strings
// - Commands NEVER contain business logic

pub mod favorite_commands;
pub mod recipe_commands;

pub use favorite_commands::*;
pub use recipe_commands::*;
