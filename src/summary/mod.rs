//! Standup summary assembly
//!
//! Turns a window of commits into the text block people paste into their
//! standup: commits grouped by [`Category`], one bullet per commit,
//! empty sections omitted.

use std::collections::BTreeMap;

use crate::models::{Category, CommitInfo};

/// Flatten a commit message to a single standup bullet line
#[must_use]
pub fn clean_message(message: &str) -> String {
    message.trim().replace('\n', " ")
}

/// Group commits by category.
///
/// Every category is present in the result, empty or not, so callers can
/// rely on a stable section order.
#[must_use]
pub fn group_by_category<'a>(commits: &'a [CommitInfo]) -> BTreeMap<Category, Vec<&'a CommitInfo>> {
    let mut grouped: BTreeMap<Category, Vec<&CommitInfo>> =
        Category::ALL.iter().map(|&category| (category, Vec::new())).collect();

    for commit in commits {
        let category = Category::for_message(&commit.message);
        grouped.entry(category).or_default().push(commit);
    }

    grouped
}

/// Format grouped commits as the standup summary text.
///
/// Each non-empty category becomes its label line followed by one
/// `  - message` bullet per commit; sections are separated by a blank
/// line. Empty input yields an empty string.
#[must_use]
pub fn format_standup(grouped: &BTreeMap<Category, Vec<&CommitInfo>>) -> String {
    let mut sections = Vec::new();

    for category in Category::ALL {
        let Some(commits) = grouped.get(&category) else {
            continue;
        };
        if commits.is_empty() {
            continue;
        }

        let mut lines = vec![category.label().to_string()];
        lines.extend(commits.iter().map(|commit| format!("  - {}", clean_message(&commit.message))));
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}
