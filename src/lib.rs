// src/lib.rs

//! Katameros Liturgy Reference Extractor Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
