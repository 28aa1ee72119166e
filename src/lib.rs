//! Cinedash Library
//!
//! A library for browsing movies from an upstream catalog API, with a
//! server-rendered dashboard frontend.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod web;

pub use error::{Error, Result};
