//! Core business logic modules.

pub mod curate;
pub mod normalize;
