//! Domain models for the Mineral LCA Platform

mod assessment;
mod circularity;
mod impact;
mod material;
mod processing;
mod scenario;
mod transportation;

pub use assessment::*;
pub use circularity::*;
pub use impact::*;
pub use material::*;
pub use processing::*;
pub use scenario::*;
pub use transportation::*;
