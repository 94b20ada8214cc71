//! Shared types, benchmark data and the scoring engine for the Mineral LCA Platform
//!
//! This crate contains the records exchanged between the backend and the
//! WASM client, plus every pure scoring function. Nothing here performs I/O.

pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use models::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
