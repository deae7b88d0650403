//! Business logic orchestration between controllers and external services.

pub mod auth;
