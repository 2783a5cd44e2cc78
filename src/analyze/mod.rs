pub mod analyzer;
mod model;

pub use model::CompletedIssues;
pub use model::SprintAnalytics;
pub use model::SprintData;
