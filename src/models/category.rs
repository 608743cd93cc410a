//! Commit categorization
//!
//! Commits are bucketed into standup sections by the leading keyword of
//! their message. Both plain prefixes ("fix typo", "Add button") and
//! conventional-commit prefixes ("feat(parser): ...", "fix!: ...") are
//! recognized.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Keywords that mark a commit as a feature
const FEATURE_KEYWORDS: [&str; 4] = ["feat", "add", "new", "feature"];

/// Keywords that mark a commit as a bug fix
const FIX_KEYWORDS: [&str; 4] = ["fix", "bug", "hotfix", "bugfix"];

/// Keywords that mark a commit as maintenance work
const MAINTENANCE_KEYWORDS: [&str; 6] = ["docs", "chore", "refactor", "style", "cleanup", "test"];

/// Conventional-commit prefix: `type`, `type(scope)`, `type!`, each
/// followed by a colon
static CONVENTIONAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(?:\([^)]*\))?!?:").expect("conventional prefix pattern is valid")
});

/// Standup section a commit belongs to
///
/// Variant order is the rendering order of the standup summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// New functionality
    Features,
    /// Corrections of broken behavior
    BugFixes,
    /// Docs, chores, refactors, tests
    Maintenance,
    /// Everything that matched no keyword
    Other,
}

impl Category {
    /// All categories, in rendering order
    pub const ALL: [Self; 4] = [Self::Features, Self::BugFixes, Self::Maintenance, Self::Other];

    /// Human-facing section label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Features => "\u{2728} Features",
            Self::BugFixes => "\u{1f41b} Bug Fixes",
            Self::Maintenance => "\u{1f527} Maintenance",
            Self::Other => "\u{1f4dd} Other Changes",
        }
    }

    /// Categorize a commit message by its leading keyword
    #[must_use]
    pub fn for_message(message: &str) -> Self {
        let Some(prefix) = extract_prefix(message) else {
            return Self::Other;
        };

        if FEATURE_KEYWORDS.contains(&prefix.as_str()) {
            Self::Features
        } else if FIX_KEYWORDS.contains(&prefix.as_str()) {
            Self::BugFixes
        } else if MAINTENANCE_KEYWORDS.contains(&prefix.as_str()) {
            Self::Maintenance
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Extract the classification prefix from a commit message.
///
/// A conventional-commit header (`feat:`, `feat(scope):`, `fix!:`) yields
/// its type; otherwise the first whitespace-delimited word with any
/// trailing colons removed. Returned lowercase. `None` for empty or
/// whitespace-only messages.
#[must_use]
pub fn extract_prefix(message: &str) -> Option<String> {
    let message = message.trim_start();

    if let Some(caps) = CONVENTIONAL_PREFIX.captures(message) {
        return Some(caps[1].to_lowercase());
    }

    message
        .split_whitespace()
        .next()
        .map(|word| word.trim_end_matches(':').to_lowercase())
        .filter(|word| !word.is_empty())
}
