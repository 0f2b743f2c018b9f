//! Shared domain types for the Planhub platform.

pub mod error;
pub mod notifications;
pub mod roles;
pub mod task;
pub mod types;
