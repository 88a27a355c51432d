//! HTTP handlers

pub mod auth;
pub mod categories;
pub mod health;
pub mod prompts;
pub mod users;
