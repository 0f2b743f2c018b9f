//! HTTP request handlers, one module per resource.

pub mod attachment;
pub mod auth;
pub mod comment;
pub mod health;
pub mod invitation;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;
