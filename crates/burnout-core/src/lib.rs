//! burnout-core
//!
//! Pure domain types, instrument validation, and the scoring engine.
//! No I/O beyond tracing diagnostics; this is the shared vocabulary of
//! the Burnout Check system.

pub mod error;
pub mod models;
pub mod scoring;
pub mod validate;
