//! Command handlers.

pub mod fetch;
pub mod stats;
