pub mod catalog;
pub mod engine;

pub use catalog::{EmergencyTrigger, LifestyleKind, RecommendationCatalog};
pub use engine::generate;
