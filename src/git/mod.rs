//! Git integration
//!
//! Provides the repository operations the standup generator needs:
//! - Local/remote source detection
//! - Repository opening (with temporary clones for remote URLs)
//! - Recent commit collection with date and author filters

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Utc};
use git2::Repository;
use tempfile::TempDir;
use thiserror::Error;

use crate::models::CommitInfo;

/// Seconds per day, for the look-back cutoff
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Errors from repository access and history collection
#[derive(Debug, Error)]
pub enum GitError {
    /// The given path is not inside a git repository
    #[error("'{0}' is not a valid git repository")]
    NotARepository(PathBuf),

    /// Cloning a remote URL failed
    #[error("failed to clone '{url}': {source}")]
    Clone {
        /// The URL that failed to clone
        url: String,
        /// The underlying git error
        #[source]
        source: git2::Error,
    },

    /// Walking the commit history failed
    #[error("error reading git history: {0}")]
    History(#[from] git2::Error),

    /// Creating the temporary clone directory failed
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
}

/// Where a repository lives: a local path or a remote git URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// A path on the local filesystem
    Local(PathBuf),
    /// A remote git URL to clone
    Remote(String),
}

impl RepoSource {
    /// Classify user input as a local path or a remote git URL
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if is_git_url(input) {
            Self::Remote(input.to_string())
        } else {
            Self::Local(PathBuf::from(input))
        }
    }
}

/// Check whether the input looks like a remote git URL
fn is_git_url(input: &str) -> bool {
    input.starts_with("https://github.com/")
        || input.starts_with("git@github.com:")
        || input.starts_with("git://")
        || (input.starts_with("https://") && input.contains(".git"))
}

/// A remote repository cloned into a temporary directory.
///
/// The directory is removed when this guard drops, including on error
/// paths in the caller.
pub struct ClonedRepo {
    repo: Repository,
    dir: TempDir,
}

impl ClonedRepo {
    /// Clone a remote URL into a fresh temporary directory
    pub fn clone_from(url: &str) -> Result<Self, GitError> {
        let dir = tempfile::Builder::new().prefix("standup-").tempdir()?;
        log::debug!("cloning {url} into {}", dir.path().display());

        let repo = Repository::clone(url, dir.path()).map_err(|source| GitError::Clone {
            url: url.to_string(),
            source,
        })?;

        Ok(Self { repo, dir })
    }
}

impl std::fmt::Debug for ClonedRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClonedRepo").field("dir", &self.dir.path()).finish_non_exhaustive()
    }
}

/// An opened repository, local or cloned.
///
/// Keeps the temporary clone directory alive for as long as the
/// repository is in use.
pub enum RepoHandle {
    /// A repository opened in place
    Local(Repository),
    /// A repository cloned to a temporary directory
    Cloned(ClonedRepo),
}

impl RepoHandle {
    /// Access the underlying repository
    #[must_use]
    pub const fn repo(&self) -> &Repository {
        match self {
            Self::Local(repo) => repo,
            Self::Cloned(cloned) => &cloned.repo,
        }
    }
}

impl std::fmt::Debug for RepoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(repo) => f.debug_tuple("Local").field(&repo.path()).finish(),
            Self::Cloned(cloned) => f.debug_tuple("Cloned").field(cloned).finish(),
        }
    }
}

/// Open a repository source, cloning first when it is remote
pub fn open(source: &RepoSource) -> Result<RepoHandle, GitError> {
    match source {
        RepoSource::Local(path) => open_local(path).map(RepoHandle::Local),
        RepoSource::Remote(url) => ClonedRepo::clone_from(url).map(RepoHandle::Cloned),
    }
}

/// Open a local repository, discovering the root from any path inside it
pub fn open_local(path: &Path) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(|_| GitError::NotARepository(path.to_path_buf()))
}

/// Collect commits from the last `days` days, newest first.
///
/// Commits older than the cutoff are skipped rather than ending the walk,
/// so out-of-order commit dates near the boundary are tolerated. The
/// author filter is a case-insensitive substring match on the author name.
/// A repository with no commits yields an empty list.
pub fn recent_commits(
    repo: &Repository,
    days: u32,
    author: Option<&str>,
) -> Result<Vec<CommitInfo>, GitError> {
    let cutoff = Utc::now().timestamp() - i64::from(days) * SECONDS_PER_DAY;
    let author_filter = author.map(str::to_lowercase);

    let mut revwalk = repo.revwalk()?;

    if let Err(err) = revwalk.push_head() {
        // An empty repository has an unborn HEAD; report it as "no commits"
        // rather than an error.
        if matches!(err.code(), git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound) {
            return Ok(Vec::new());
        }
        return Err(GitError::History(err));
    }

    revwalk.set_sorting(git2::Sort::TIME)?;

    let mut commits = Vec::new();
    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        let time = commit.time();

        if time.seconds() < cutoff {
            continue;
        }

        let signature = commit.author();
        let name = signature.name().unwrap_or_default().to_string();

        if let Some(filter) = &author_filter
            && !name.to_lowercase().contains(filter)
        {
            continue;
        }

        let hash = commit.id().to_string();
        commits.push(CommitInfo {
            short_hash: hash.chars().take(7).collect(),
            hash,
            message: commit.message().unwrap_or_default().trim().to_string(),
            author: name,
            email: signature.email().unwrap_or_default().to_string(),
            timestamp: commit_timestamp(&time),
        });
    }

    Ok(commits)
}

/// Convert a git commit time into a datetime carrying its UTC offset
fn commit_timestamp(time: &git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    DateTime::from_timestamp(time.seconds(), 0).unwrap_or_default().with_timezone(&offset)
}
