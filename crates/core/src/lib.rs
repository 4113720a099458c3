//! Shared primitives for the enrollment service crates.

pub mod error;
pub mod types;
