//! Utility functions and helpers.

pub mod coptic;
pub mod http;
