//! Business logic services for the Mineral LCA Platform

pub mod assessment;
pub mod circularity;
pub mod impact;
pub mod insights;
pub mod material;
pub mod processing;
pub mod scenario;
pub mod transportation;

pub use assessment::AssessmentService;
pub use circularity::CircularityService;
pub use impact::ImpactService;
pub use insights::InsightService;
pub use material::MaterialService;
pub use processing::ProcessingService;
pub use scenario::ScenarioService;
pub use transportation::TransportationService;
