//! HTTP request handlers.

pub mod auth;
pub mod page;

#[cfg(test)]
mod test;
