//! CLI command implementations.

pub mod browse;
pub mod check;
pub mod movie;
pub mod serve;
