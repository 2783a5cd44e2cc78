use crate::model::Result;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub issue_type: String,
    pub story_points: Option<f64>,
    pub epic: Option<Epic>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Epic {
    pub key: String,
    pub summary: String,
}

// Create
impl Issue {
    fn new(
        key: impl ToString,
        summary: impl ToString,
        issue_type: impl ToString,
        story_points: Option<f64>,
        epic: Option<Epic>,
    ) -> Self {
        Self {
            key: key.to_string(),
            summary: summary.to_string(),
            issue_type: issue_type.to_string(),
            story_points,
            epic,
        }
    }
}

// Parser
impl Issue {
    /// Builds an issue from a raw Jira search element. Only the key is
    /// mandatory; summary, issue type, story points and parent epic fall
    /// back to defaults when the service omits them.
    pub fn from_value(value: &Value, story_points_field: &str) -> Result<Self> {
        let Some(key) = value["key"].as_str() else {
            return Err("Not found 'key' field".into());
        };
        let fields = &value["fields"];
        let summary = fields["summary"].as_str().unwrap_or_default();
        let issue_type = fields["issuetype"]["name"].as_str().unwrap_or("Task");
        // `as_f64` keeps absent (null / missing field) distinct from a
        // real zero estimate.
        let story_points = fields[story_points_field].as_f64();
        let epic = Epic::from_parent(&fields["parent"]);
        Ok(Self::new(key, summary, issue_type, story_points, epic))
    }

    pub fn from_search(values: &[Value], story_points_field: &str) -> Result<Vec<Self>> {
        values
            .iter()
            .map(|value| Self::from_value(value, story_points_field))
            .collect()
    }
}

impl Epic {
    fn from_parent(parent: &Value) -> Option<Self> {
        let key = parent["key"].as_str()?;
        let summary = parent["fields"]["summary"].as_str().unwrap_or_default();
        Some(Self {
            key: key.to_string(),
            summary: summary.to_string(),
        })
    }
}
