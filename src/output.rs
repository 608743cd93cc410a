//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::{Category, CommitInfo};
use crate::summary;

/// Messages longer than this are truncated in the activity table
const TABLE_MESSAGE_WIDTH: usize = 50;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct StandupReport {
    /// The repository that was scanned (path or URL as given)
    pub repo: String,
    /// Number of days looked back
    pub days: u32,
    /// Author filter, if any
    pub author: Option<String>,
    /// Number of commits in the window
    pub total_commits: usize,
    /// The commits, newest first
    pub commits: Vec<CommitInfo>,
    /// Non-empty categories, in rendering order
    pub sections: Vec<SectionSummary>,
    /// The formatted standup text
    pub standup: String,
}

/// One non-empty category of the standup summary
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    /// Category identifier
    pub category: Category,
    /// Human-facing section label
    pub label: String,
    /// Number of commits in this category
    pub count: usize,
    /// Cleaned one-line commit messages
    pub messages: Vec<String>,
}

/// Result of a config show operation
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// Default number of days to look back
    pub days: u32,
    /// Default author filter
    pub author: Option<String>,
    /// Default repository path or URL
    pub path: Option<String>,
    /// Default clipboard-copy setting
    pub copy: bool,
    /// Where the config file lives
    pub config_path: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl StandupReport {
    /// Assemble a report from the collected commits
    #[must_use]
    pub fn build(repo: String, days: u32, author: Option<String>, commits: Vec<CommitInfo>) -> Self {
        let grouped = summary::group_by_category(&commits);
        let standup = summary::format_standup(&grouped);

        let sections = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let commits = grouped.get(&category)?;
                if commits.is_empty() {
                    return None;
                }
                Some(SectionSummary {
                    category,
                    label: category.label().to_string(),
                    count: commits.len(),
                    messages: commits
                        .iter()
                        .map(|commit| summary::clean_message(&commit.message))
                        .collect(),
                })
            })
            .collect();

        Self {
            repo,
            days,
            author,
            total_commits: commits.len(),
            commits,
            sections,
            standup,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.total_commits == 0 {
            println!("{}", "No commits found for this period.".yellow());
            return;
        }

        println!("{}\n", format!("Found {} commit(s)", self.total_commits).green());

        self.render_table();

        println!("\n{}", "--- Standup Summary ---".bold());
        println!("{}", self.standup);

        println!("\n{}", "--- Statistics ---".bold());
        println!("Total Commits: {}", self.total_commits);
        for section in &self.sections {
            println!("{}: {}", section.label, section.count);
        }
    }

    /// Print the Recent Activity table.
    ///
    /// Columns are padded before colorizing so the ANSI escapes do not
    /// throw off the widths.
    fn render_table(&self) {
        let author_width =
            self.commits.iter().map(|c| c.author.len()).max().unwrap_or(0).max("Author".len());
        // "YYYY-MM-DD HH:MM"
        let time_width = 16;

        println!("{}", "Recent Activity".bold());
        println!(
            "{}  {}  {}  {}",
            format!("{:7}", "Hash").bold().magenta(),
            format!("{:time_width$}", "Time").bold().magenta(),
            format!("{:author_width$}", "Author").bold().magenta(),
            "Message".bold().magenta(),
        );

        for commit in &self.commits {
            println!(
                "{}  {}  {}  {}",
                format!("{:7}", commit.short_hash).cyan(),
                format!("{:time_width$}", commit.format_time()).yellow(),
                format!("{:author_width$}", commit.author).green(),
                truncate_message(&commit.message),
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Truncate a message to the table column width, marking the cut with `...`
fn truncate_message(message: &str) -> String {
    let flat = summary::clean_message(message);
    if flat.chars().count() > TABLE_MESSAGE_WIDTH {
        let truncated: String = flat.chars().take(TABLE_MESSAGE_WIDTH).collect();
        format!("{truncated}...")
    } else {
        flat
    }
}

impl ConfigReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}", "Standup-CLI Configuration".bold());
        println!("  Default days: {}", self.days);
        println!("  Default path: {}", self.path.as_deref().unwrap_or(". (current directory)"));
        println!("  Author filter: {}", self.author.as_deref().unwrap_or("(none)"));
        println!("  Copy to clipboard: {}", self.copy);
        println!();
        println!("Config file: {}", self.config_path);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
