//! Entity models and request DTOs, one module per table.

pub mod attachment;
pub mod comment;
pub mod invitation;
pub mod milestone;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;
