//! Scoring and benchmarking engine
//!
//! Every function in this module is pure: outputs depend only on the
//! arguments, so callers may invoke them concurrently without locking.

mod benchmark;
mod circularity;
mod error;
mod impact;
mod insights;
mod scenario;

pub use benchmark::*;
pub use circularity::*;
pub use error::*;
pub use impact::*;
pub use insights::*;
pub use scenario::*;
