//! Commit history access.
//!
//! The scan pipeline only sees [`RawCommit`] values through the [`History`]
//! trait; [`GitRepo`] is the libgit2-backed implementation.

#[cfg(test)]
pub mod fixture;

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use git2::{Delta, DiffFindOptions, DiffOptions, ErrorCode, Patch, Repository, Sort};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TimeWindow;
use crate::error::{Result, SkillmapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    Unknown,
}

impl From<Delta> for ChangeType {
    fn from(delta: Delta) -> Self {
        match delta {
            Delta::Added => ChangeType::Added,
            Delta::Deleted => ChangeType::Deleted,
            Delta::Modified | Delta::Typechange => ChangeType::Modified,
            Delta::Renamed => ChangeType::Renamed,
            Delta::Copied => ChangeType::Copied,
            _ => ChangeType::Unknown,
        }
    }
}

/// One file as it appears in a commit's diff against its first parent.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFileChange {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub added: Option<usize>,
    pub deleted: Option<usize>,
    pub change_type: ChangeType,
}

impl RawFileChange {
    /// The path a contribution is attributed to: new path, else old path.
    pub fn path(&self) -> Option<&str> {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawCommit {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub date: DateTime<FixedOffset>,
    pub files: Vec<RawFileChange>,
}

/// Source of commit descriptors within a time window, oldest first.
pub trait History {
    fn commits(&self, window: &TimeWindow) -> Result<Vec<RawCommit>>;
}

/// Closest ancestor of `start` (inclusive) that contains a `.git` entry.
pub fn find_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self> {
        let root = find_root(path)
            .ok_or_else(|| SkillmapError::NotARepository(path.to_path_buf()))?;
        let repo = Repository::open(&root)?;
        debug!(root = %root.display(), "opened repository");
        Ok(Self { repo, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_changes(&self, commit: &git2::Commit) -> Result<Vec<RawFileChange>> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        let mut diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))?;

        let mut files = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            let change_type = ChangeType::from(delta.status());
            let old_path = match change_type {
                ChangeType::Added => None,
                _ => delta.old_file().path().map(path_string),
            };
            let new_path = match change_type {
                ChangeType::Deleted => None,
                _ => delta.new_file().path().map(path_string),
            };

            let (added, deleted) = match Patch::from_diff(&diff, idx)? {
                Some(patch) if patch.delta().flags().is_binary() => (None, None),
                Some(patch) => {
                    let (_, additions, deletions) = patch.line_stats()?;
                    (Some(additions), Some(deletions))
                }
                None => (None, None),
            };

            files.push(RawFileChange {
                old_path,
                new_path,
                added,
                deleted,
                change_type,
            });
        }
        Ok(files)
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn commit_time(time: git2::Time) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60);
    let utc = DateTime::from_timestamp(time.seconds(), 0);
    match (offset, utc) {
        (Some(offset), Some(utc)) => Ok(utc.with_timezone(&offset)),
        _ => Err(git2::Error::from_str("commit timestamp out of range").into()),
    }
}

impl History for GitRepo {
    fn commits(&self, window: &TimeWindow) -> Result<Vec<RawCommit>> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!("HEAD is unborn, history is empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::REVERSE)?;
        revwalk.push_head()?;

        let mut result = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            // Skip merge commits
            if commit.parent_count() > 1 {
                continue;
            }

            // Window on committer date, like `git log --since/--until`.
            if !window.contains(&commit_time(commit.time())?) {
                continue;
            }

            let author = commit.author();
            let date = commit_time(author.when())?;

            result.push(RawCommit {
                hash: oid.to_string(),
                author_name: author.name().unwrap_or_default().to_string(),
                author_email: author.email().unwrap_or_default().to_string(),
                date,
                files: self.file_changes(&commit)?,
            });
        }

        debug!(commits = result.len(), "history traversed");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
