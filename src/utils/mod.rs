//! Utility modules shared across the library.

pub mod converter;
