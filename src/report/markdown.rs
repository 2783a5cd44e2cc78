use crate::analyze::{CompletedIssues, SprintAnalytics};
use crate::model::Issue;
use indexmap::IndexMap;
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use regex::Regex;

const BUG_PATTERN: &str = r"LP#(\d+)";

/// Renders the analytics section. `None` means the section was not
/// requested and produces no output at all.
pub fn render_analytics(analytics: Option<&SprintAnalytics>) -> String {
    let Some(analytics) = analytics else {
        return String::new();
    };

    let mut doc = Markdown::new();
    doc.header2("Sprint Analytics:");

    let issues = if analytics.total_issues == 0 {
        "Issues: 0/0 completed".to_string()
    } else {
        format!(
            "Issues: {}/{} completed ({:.1}%)",
            analytics.completed_issues,
            analytics.total_issues,
            100.0 * analytics.completed_issues as f64 / analytics.total_issues as f64,
        )
    };
    doc.paragraph(issues);

    // A sprint that tracks no points at all is not the same thing as a
    // sprint that completed 0.0 of 0.0 points.
    let story_points = if analytics.total_story_points == 0.0 {
        "Story points: Not tracked or not available".to_string()
    } else {
        format!(
            "Story points: {:.1}/{:.1} completed ({:.1}%)",
            analytics.completed_story_points,
            analytics.total_story_points,
            100.0 * analytics.completed_story_points / analytics.total_story_points,
        )
    };
    doc.paragraph(story_points);

    doc.paragraph(format!(
        "Issues without story points: {}",
        analytics.issues_without_story_points
    ));

    doc.render()
}

pub fn key_to_md(server: &str, key: &str) -> String {
    format!("[{key}]({server}/browse/{key})")
}

pub fn get_bug_id(summary: &str) -> String {
    Regex::new(BUG_PATTERN)
        .unwrap()
        .captures(summary)
        .map(|captures| captures[1].to_string())
        .unwrap_or_default()
}

pub fn insert_bug_link(text: &str) -> String {
    Regex::new(BUG_PATTERN)
        .unwrap()
        .replace_all(text, "[LP#$1](https://pad.lv/$1)")
        .to_string()
}

pub trait MarkdownReport {
    fn report_create(&self, server: &str) -> String;
}

impl MarkdownReport for CompletedIssues {
    fn report_create(&self, server: &str) -> String {
        let mut doc = Markdown::new();
        doc.add_epics(self, server);
        doc.add_tasks(self, server);
        doc.render()
    }
}

trait MarkdownExt {
    fn add_epics(&mut self, issues: &CompletedIssues, server: &str);
    fn add_tasks(&mut self, issues: &CompletedIssues, server: &str);
}

impl MarkdownExt for Markdown {
    fn add_epics(&mut self, issues: &CompletedIssues, server: &str) {
        self.header2("Completed Epics:");

        let mut epics: IndexMap<String, (String, Vec<&Issue>)> = IndexMap::new();
        for issue in issues.values() {
            let Some(epic) = &issue.epic else {
                continue;
            };
            epics
                .entry(epic.key.clone())
                .or_insert_with(|| (epic.summary.clone(), vec![]))
                .1
                .push(issue);
        }

        for (key, (summary, children)) in &epics {
            let lines = children
                .iter()
                .map(|issue| {
                    format!(
                        "- {} {}",
                        key_to_md(server, &issue.key),
                        insert_bug_link(&issue.summary),
                    )
                })
                .join("\n");
            self.paragraph(format!(
                "**{} {}**\n{}",
                key_to_md(server, key),
                insert_bug_link(summary),
                lines,
            ));
        }
    }

    fn add_tasks(&mut self, issues: &CompletedIssues, server: &str) {
        self.header2("Completed Tasks:");

        let tasks = issues
            .values()
            .filter(|issue| issue.epic.is_none())
            .collect::<Vec<_>>();
        if tasks.is_empty() {
            return;
        }

        let header = ["Key", "Type", "Story points", "Summary"]
            .iter()
            .map(|title| Heading::new(title.to_string(), Some(HeadingAlignment::Left)))
            .collect::<Vec<_>>();
        let table = tasks
            .iter()
            .map(|issue| {
                vec![
                    key_to_md(server, &issue.key),
                    issue.issue_type.clone(),
                    match issue.story_points {
                        Some(points) => format!("{points:.1}"),
                        None => "-".to_string(),
                    },
                    insert_bug_link(&issue.summary),
                ]
            })
            .collect::<Vec<_>>();

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        self.paragraph(md_table.as_markdown().unwrap());
    }
}
