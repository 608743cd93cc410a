//! Tests for repository opening and history collection

use crate::common::git_repo::TempGitRepo;
use standup_cli::git::{self, GitError};

#[test]
fn test_open_local_discovers_from_subdirectory() {
    let repo = TempGitRepo::new();
    repo.write_file("src/lib.rs", "pub fn hello() {}\n");
    repo.commit("initial");

    let opened = git::open_local(&repo.path().join("src")).unwrap();
    assert_eq!(opened.workdir().unwrap().canonicalize().unwrap(), repo.path().canonicalize().unwrap());
}

#[test]
fn test_open_local_rejects_non_repository() {
    let temp = tempfile::TempDir::new().unwrap();

    let err = git::open_local(temp.path()).err().unwrap();
    assert!(matches!(err, GitError::NotARepository(_)));
    assert!(err.to_string().contains("is not a valid git repository"));
}

#[test]
fn test_empty_repository_yields_no_commits() {
    let repo = TempGitRepo::new();
    let opened = git::open_local(repo.path()).unwrap();

    let commits = git::recent_commits(&opened, 1, None).unwrap();
    assert!(commits.is_empty());
}

#[test]
fn test_recent_commits_newest_first() {
    let repo = TempGitRepo::new();
    repo.write_file("a.txt", "a");
    repo.commit("feat: first");
    repo.write_file("b.txt", "b");
    repo.commit("fix: second");

    let opened = git::open_local(repo.path()).unwrap();
    let commits = git::recent_commits(&opened, 1, None).unwrap();

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].message, "fix: second");
    assert_eq!(commits[1].message, "feat: first");
}

#[test]
fn test_commits_outside_window_are_excluded() {
    let repo = TempGitRepo::new();
    repo.commit_dated("feat: ancient work", "2020-01-01T12:00:00");
    repo.write_file("a.txt", "a");
    repo.commit("fix: recent work");

    let opened = git::open_local(repo.path()).unwrap();
    let commits = git::recent_commits(&opened, 7, None).unwrap();

    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].message, "fix: recent work");
}

#[test]
fn test_author_filter_is_case_insensitive_substring() {
    let repo = TempGitRepo::new();
    repo.commit_as("feat: by alice", "Alice Smith", "alice@example.com");
    repo.commit_as("fix: by bob", "Bob Jones", "bob@example.com");

    let opened = git::open_local(repo.path()).unwrap();

    let alice = git::recent_commits(&opened, 1, Some("alice")).unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].author, "Alice Smith");

    let smith = git::recent_commits(&opened, 1, Some("SMITH")).unwrap();
    assert_eq!(smith.len(), 1);

    let nobody = git::recent_commits(&opened, 1, Some("carol")).unwrap();
    assert!(nobody.is_empty());
}

#[test]
fn test_commit_info_fields() {
    let repo = TempGitRepo::new();
    repo.write_file("a.txt", "a");
    repo.commit("feat: add thing\n\nwith a body\n");

    let opened = git::open_local(repo.path()).unwrap();
    let commits = git::recent_commits(&opened, 1, None).unwrap();

    assert_eq!(commits.len(), 1);
    let commit = &commits[0];
    assert_eq!(commit.short_hash.len(), 7);
    assert!(commit.hash.starts_with(&commit.short_hash));
    assert_eq!(commit.hash.len(), 40);
    // Message is trimmed but keeps its body
    assert_eq!(commit.message, "feat: add thing\n\nwith a body");
    assert_eq!(commit.author, "Test User");
    assert_eq!(commit.email, "test@example.com");
}
