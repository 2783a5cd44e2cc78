use crate::jira::client::{JiraClient, PageProgress};
use crate::model::{Issue, Result};

#[derive(Debug, Clone)]
pub struct SprintQuery {
    pub project: String,
    pub sprint: String,
    pub story_points_field: String,
}

// Create
impl SprintQuery {
    pub fn new(
        project: impl ToString,
        sprint: impl ToString,
        story_points_field: impl ToString,
    ) -> Self {
        Self {
            project: project.to_string(),
            sprint: sprint.to_string(),
            story_points_field: story_points_field.to_string(),
        }
    }
}

// Jql
impl SprintQuery {
    fn jql_all(&self) -> String {
        format!(
            "project = \"{}\" AND sprint = \"{}\"",
            self.project, self.sprint
        )
    }

    fn jql_completed(&self) -> String {
        format!("{} AND statusCategory = Done", self.jql_all())
    }
}

pub trait SprintIssueSearcher {
    async fn fetch_completed_issues<'a>(
        &self,
        query: &SprintQuery,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>>;

    async fn fetch_all_issues<'a>(
        &self,
        query: &SprintQuery,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>>;
}

impl SprintIssueSearcher for JiraClient {
    async fn fetch_completed_issues<'a>(
        &self,
        query: &SprintQuery,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>> {
        let values = self.search(&query.jql_completed(), cb).await?;
        Issue::from_search(&values, &query.story_points_field)
    }

    async fn fetch_all_issues<'a>(
        &self,
        query: &SprintQuery,
        cb: PageProgress<'a>,
    ) -> Result<Vec<Issue>> {
        let values = self.search(&query.jql_all(), cb).await?;
        Issue::from_search(&values, &query.story_points_field)
    }
}

/// Runs the two sprint searches. Without a client (no Jira configured) both
/// collections come back empty, which downstream treats as a valid sprint
/// with nothing in it rather than an error.
pub async fn fetch_sprint_issues<'a>(
    client: Option<&JiraClient>,
    query: &SprintQuery,
    completed_cb: PageProgress<'a>,
    all_cb: PageProgress<'a>,
) -> Result<(Vec<Issue>, Vec<Issue>)> {
    let Some(client) = client else {
        return Ok((vec![], vec![]));
    };
    let (completed, all) = futures::join!(
        client.fetch_completed_issues(query, completed_cb),
        client.fetch_all_issues(query, all_cb),
    );
    Ok((completed?, all?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jql_filters_by_project_and_sprint() {
        let query = SprintQuery::new("TEST", "Sprint 1", "customfield_10016");
        assert_eq!(
            query.jql_all(),
            "project = \"TEST\" AND sprint = \"Sprint 1\""
        );
    }

    #[test]
    fn completed_jql_narrows_to_done_status_category() {
        let query = SprintQuery::new("TEST", "Sprint 1", "customfield_10016");
        assert_eq!(
            query.jql_completed(),
            "project = \"TEST\" AND sprint = \"Sprint 1\" AND statusCategory = Done"
        );
    }

    #[tokio::test]
    async fn absent_client_yields_empty_collections() {
        let query = SprintQuery::new("TEST", "Sprint 1", "customfield_10016");
        let (completed, all) =
            fetch_sprint_issues(None, &query, Box::new(|_| {}), Box::new(|_| {}))
                .await
                .unwrap();
        assert!(completed.is_empty());
        assert!(all.is_empty());
    }
}
