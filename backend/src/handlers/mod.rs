//! HTTP handlers for the Mineral LCA Platform

mod assessment;
mod benchmark;
mod circularity;
mod health;
mod impact;
mod insights;
mod material;
mod processing;
mod scenario;
mod transportation;

pub use assessment::*;
pub use benchmark::*;
pub use circularity::*;
pub use health::*;
pub use impact::*;
pub use insights::*;
pub use material::*;
pub use processing::*;
pub use scenario::*;
pub use transportation::*;
