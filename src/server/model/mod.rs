//! Domain models shared across the server layers.

pub mod identity;
