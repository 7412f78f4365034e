//! Turns raw history into classified commit records.

use tracing::debug;

use super::{CommitRecord, FileContribution};
use crate::author::{identity, is_ignored, normalize_author};
use crate::classify::Classifier;
use crate::config::Config;
use crate::git::RawCommit;

/// Normalize authors, drop ignored ones, classify every touched path.
///
/// Files without a resolvable path are skipped, missing line counts read
/// as zero, and commits left without any file are dropped. Input order is
/// preserved.
pub fn build_commits(
    raw: Vec<RawCommit>,
    config: &Config,
    classifier: &Classifier,
) -> Vec<CommitRecord> {
    let total = raw.len();
    let mut ignored = 0usize;
    let mut empty = 0usize;
    let mut records = Vec::with_capacity(total);

    for commit in raw {
        let author = normalize_author(
            &identity(&commit.author_name, &commit.author_email),
            &config.author_aliases,
        );
        if is_ignored(&author, &config.ignore_authors) {
            ignored += 1;
            continue;
        }

        let files: Vec<FileContribution> = commit
            .files
            .iter()
            .filter_map(|change| {
                let path = change.path()?;
                Some(FileContribution {
                    path: path.to_string(),
                    skills: classifier.classify(path),
                    lines_added: change.added.unwrap_or(0),
                    lines_deleted: change.deleted.unwrap_or(0),
                    change_type: change.change_type,
                })
            })
            .collect();

        if files.is_empty() {
            empty += 1;
            continue;
        }

        records.push(CommitRecord::new(commit.hash, author, commit.date, files));
    }

    debug!(
        total,
        kept = records.len(),
        ignored,
        empty,
        "commit records built"
    );
    records
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod tests;
