//! Request/response processing helpers shared by the route handlers.

pub mod session;
