//! Decayed score aggregation over commit records.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorSkillScores, CommitRecord, MonthlyScores};
use crate::config::Weights;
use crate::decay::decay;

/// One (commit, file, skill) contribution with its decayed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub commit: String,
    pub author: String,
    pub date: DateTime<FixedOffset>,
    pub path: String,
    pub skill: String,
    pub lines_added: usize,
    pub lines_deleted: usize,
    pub score: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregates {
    pub per_author_skill: AuthorSkillScores,
    pub trend_monthly: MonthlyScores,
    pub raw_rows: Vec<RawRow>,
}

/// `YYYY-MM` of the commit's own calendar date (its recorded offset, not UTC).
pub fn month_bucket(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m").to_string()
}

/// Fold commits into per-author and per-month skill scores.
///
/// Every skill of a file receives the file's full decayed score. Decay is
/// measured against the single `now` shared by both maps.
pub fn aggregate(
    commits: &[CommitRecord],
    weights: &Weights,
    half_life_days: f64,
    now: &DateTime<Utc>,
) -> Aggregates {
    let mut agg = Aggregates::default();

    for commit in commits {
        let month = month_bucket(&commit.date);
        for file in &commit.files {
            let base = weights.base_score(file.lines_added + file.lines_deleted);
            let decayed = decay(base, &commit.date, now, half_life_days);

            for skill in &file.skills {
                *agg.per_author_skill
                    .entry(commit.author.clone())
                    .or_default()
                    .entry(skill.clone())
                    .or_default() += decayed;

                *agg.trend_monthly
                    .entry(month.clone())
                    .or_default()
                    .entry(commit.author.clone())
                    .or_default()
                    .entry(skill.clone())
                    .or_default() += decayed;

                agg.raw_rows.push(RawRow {
                    commit: commit.hash.clone(),
                    author: commit.author.clone(),
                    date: commit.date,
                    path: file.path.clone(),
                    skill: skill.clone(),
                    lines_added: file.lines_added,
                    lines_deleted: file.lines_deleted,
                    score: decayed,
                });
            }
        }
    }

    agg
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
