use crate::analyze::{CompletedIssues, SprintAnalytics, SprintData};

pub trait Aggregator {
    fn aggregate(&self) -> (CompletedIssues, SprintAnalytics);
}

impl Aggregator for SprintData {
    /// Partitions the sprint into the completed-issues map and the five
    /// analytics counters. Completion is decided by membership in the
    /// completed search result, so the two collections are counted in
    /// independent passes; an issue present in both contributes to the
    /// totals once and to the completed figures once.
    fn aggregate(&self) -> (CompletedIssues, SprintAnalytics) {
        let mut issues = CompletedIssues::new();
        for issue in &self.completed {
            issues.insert(issue.key.clone(), issue.clone());
        }

        let mut analytics = SprintAnalytics::default();
        for issue in &self.all {
            analytics.total_issues += 1;
            // A real zero estimate lands in the points sum; only a missing
            // estimate counts as "without story points".
            match issue.story_points {
                Some(points) => analytics.total_story_points += points,
                None => analytics.issues_without_story_points += 1,
            }
        }
        for issue in &self.completed {
            analytics.completed_issues += 1;
            if let Some(points) = issue.story_points {
                analytics.completed_story_points += points;
            }
        }
        (issues, analytics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Issue;

    fn issue(key: &str, story_points: Option<f64>) -> Issue {
        Issue {
            key: key.to_string(),
            summary: format!("Summary of {key}"),
            issue_type: "Story".to_string(),
            story_points,
            epic: None,
        }
    }

    #[test]
    fn empty_inputs_yield_empty_map_and_zeroed_analytics() {
        let data = SprintData::new(vec![], vec![]);
        let (issues, analytics) = data.aggregate();

        assert!(issues.is_empty());
        assert_eq!(analytics, SprintAnalytics::default());
    }

    #[test]
    fn sums_points_across_both_collections() {
        let data = SprintData::new(
            vec![issue("TEST-123", Some(5.0))],
            vec![issue("TEST-123", Some(5.0)), issue("TEST-124", Some(3.0))],
        );
        let (issues, analytics) = data.aggregate();

        assert_eq!(issues.len(), 1);
        assert!(issues.contains_key("TEST-123"));
        assert_eq!(analytics.total_issues, 2);
        assert_eq!(analytics.completed_issues, 1);
        assert_eq!(analytics.total_story_points, 8.0);
        assert_eq!(analytics.completed_story_points, 5.0);
        assert_eq!(analytics.issues_without_story_points, 0);
    }

    #[test]
    fn zero_points_are_counted_absent_points_are_not() {
        let data = SprintData::new(
            vec![],
            vec![issue("TEST-1", Some(0.0)), issue("TEST-2", None)],
        );
        let (_, analytics) = data.aggregate();

        assert_eq!(analytics.total_story_points, 0.0);
        assert_eq!(analytics.issues_without_story_points, 1);
    }

    #[test]
    fn completed_never_exceeds_totals() {
        let data = SprintData::new(
            vec![issue("TEST-1", Some(2.0)), issue("TEST-2", None)],
            vec![
                issue("TEST-1", Some(2.0)),
                issue("TEST-2", None),
                issue("TEST-3", Some(1.5)),
            ],
        );
        let (_, analytics) = data.aggregate();

        assert!(analytics.completed_issues <= analytics.total_issues);
        assert!(analytics.completed_story_points <= analytics.total_story_points);
    }

    #[test]
    fn duplicate_completed_keys_collapse_in_the_map() {
        let data = SprintData::new(
            vec![issue("TEST-1", Some(1.0)), issue("TEST-1", Some(1.0))],
            vec![issue("TEST-1", Some(1.0))],
        );
        let (issues, analytics) = data.aggregate();

        assert_eq!(issues.len(), 1);
        // Counters follow the raw sequences, not the deduplicated map.
        assert_eq!(analytics.completed_issues, 2);
    }
}
