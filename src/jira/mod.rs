pub mod client;
pub mod search;

pub use client::JiraClient;
pub use client::PageProgress;
pub use search::SprintQuery;
