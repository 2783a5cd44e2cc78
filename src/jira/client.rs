use crate::model::Result;
use serde_json::{json, Value};

const PAGE_SIZE: usize = 50;

pub type PageProgress<'a> = Box<dyn FnMut(usize) + Send + 'a>;

#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    server: String,
    login: String,
    token: String,
}

// Create
impl JiraClient {
    pub fn new(server: impl ToString, login: impl ToString, token: impl ToString) -> Self {
        Self {
            http: reqwest::Client::new(),
            server: server.to_string().trim_end_matches('/').to_string(),
            login: login.to_string(),
            token: token.to_string(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }
}

// Search
impl JiraClient {
    /// Runs a JQL search, following pagination until the reported total is
    /// reached. The callback is invoked once per requested page.
    pub async fn search<'a>(&self, jql: &str, mut cb: PageProgress<'a>) -> Result<Vec<Value>> {
        let mut issues: Vec<Value> = vec![];
        let mut page = 0;

        loop {
            cb(page);
            let response = self
                .http
                .post(format!("{}/rest/api/2/search", self.server))
                .basic_auth(&self.login, Some(&self.token))
                .json(&json!({
                    "jql": jql,
                    "startAt": issues.len(),
                    "maxResults": PAGE_SIZE,
                }))
                .send()
                .await?
                .error_for_status()?
                .json::<Value>()
                .await?;

            let Some(found) = response["issues"].as_array() else {
                return Err("Not found 'issues' field".into());
            };
            if found.is_empty() {
                break;
            }
            issues.extend(found.iter().cloned());

            let total = response["total"].as_u64().unwrap_or(0) as usize;
            if issues.len() >= total {
                break;
            }
            page += 1;
        }
        Ok(issues)
    }
}
