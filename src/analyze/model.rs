use crate::model::Issue;
use indexmap::IndexMap;

/// Completed issues keyed by issue key, in the order the service returned
/// them.
pub type CompletedIssues = IndexMap<String, Issue>;

/// The two raw search results for one sprint. `all` is expected to contain
/// the completed issues too, but nothing here relies on that.
#[derive(Debug, Clone)]
pub struct SprintData {
    pub completed: Vec<Issue>,
    pub all: Vec<Issue>,
}

impl SprintData {
    pub fn new(completed: Vec<Issue>, all: Vec<Issue>) -> Self {
        Self { completed, all }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SprintAnalytics {
    pub total_issues: usize,
    pub completed_issues: usize,
    pub total_story_points: f64,
    pub completed_story_points: f64,
    pub issues_without_story_points: usize,
}

impl SprintAnalytics {
    pub fn new(
        total_issues: usize,
        completed_issues: usize,
        total_story_points: f64,
        completed_story_points: f64,
        issues_without_story_points: usize,
    ) -> Self {
        Self {
            total_issues,
            completed_issues,
            total_story_points,
            completed_story_points,
            issues_without_story_points,
        }
    }

    pub fn default() -> Self {
        Self::new(0, 0, 0.0, 0.0, 0)
    }
}
