mod analyze;
mod jira;
mod model;
mod report;
mod utils;

use crate::analyze::analyzer::Aggregator;
use crate::analyze::SprintData;
use crate::jira::search::{fetch_sprint_issues, SprintQuery};
use crate::jira::JiraClient;
use crate::report::markdown::render_analytics;
use crate::report::MarkdownReport;
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use chrono::Local;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use model::{Issue, Result};

#[derive(Parser, Debug, Clone)]
struct Args {
    /// Jira project key
    project: String,
    /// Sprint name
    sprint: String,
    /// Print only the analytics section
    #[arg(long = "analytics-only")]
    analytics_only: bool,
    /// Print the detailed report followed by the analytics section
    #[arg(long = "full-report")]
    full_report: bool,
    #[arg(long = "story_points_field", default_value = "customfield_10016")]
    story_points_field: String,
    #[arg(long = "jira_url", env = "JIRA_URL", default_value = "")]
    jira_url: String,
    #[arg(long = "jira_login", env = "JIRA_LOGIN", default_value = "")]
    jira_login: String,
    #[arg(long = "jira_token", env = "JIRA_TOKEN", default_value = "")]
    jira_token: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    run(&args).await.unwrap()
}

async fn run(args: &Args) -> Result<()> {
    let client = jira_client(args);
    let (completed, all) = sprint_fetch(client.as_ref(), args).await?;

    let data = SprintData::new(completed, all);
    let (issues, analytics) = data.aggregate();

    println!("# {} ({})\n", args.sprint, Local::now().format("%d.%m.%Y"));
    if !args.analytics_only {
        print!("{}", issues.report_create(&args.jira_url));
    }
    if args.analytics_only || args.full_report {
        print!("{}", render_analytics(Some(&analytics)));
    }
    Ok(())
}

// Missing connection settings degrade to an unconfigured client; the report
// then renders over empty collections instead of failing.
fn jira_client(args: &Args) -> Option<JiraClient> {
    if args.jira_url.is_empty() || args.jira_token.is_empty() {
        return None;
    }
    Some(JiraClient::new(
        &args.jira_url,
        &args.jira_login,
        &args.jira_token,
    ))
}

async fn sprint_fetch(
    client: Option<&JiraClient>,
    args: &Args,
) -> Result<(Vec<Issue>, Vec<Issue>)> {
    let multi_progress = MultiProgress::default();
    let completed_pb = multi_progress.add_with_style(
        ProgressBar::new_spinner(),
        ProgressStyleTemplate::only_message(),
    );
    completed_pb.set_message("Waiting Jira");
    let all_pb = multi_progress.add_with_style(
        ProgressBar::new_spinner(),
        ProgressStyleTemplate::only_message(),
    );
    all_pb.set_message("Waiting Jira");

    let completed_progress = {
        let pb = completed_pb.clone();
        move |page: usize| {
            pb.set_message(format!("Fetch completed issues (#{} page) ...", page + 1));
        }
    };
    let all_progress = {
        let pb = all_pb.clone();
        move |page: usize| {
            pb.set_message(format!("Fetch sprint issues (#{} page) ...", page + 1));
        }
    };

    let query = SprintQuery::new(&args.project, &args.sprint, &args.story_points_field);
    let (completed, all) = fetch_sprint_issues(
        client,
        &query,
        Box::new(completed_progress),
        Box::new(all_progress),
    )
    .await?;

    completed_pb.finish_with_message(format!(
        "✅ Completed fetch completed issues (find {} issues)",
        completed.len()
    ));
    all_pb.finish_with_message(format!(
        "✅ Completed fetch sprint issues (find {} issues)",
        all.len()
    ));
    Ok((completed, all))
}
