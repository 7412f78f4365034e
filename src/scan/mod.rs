//! Repository scan: history walk plus decayed skill aggregation.
//!
//! A scan is a pure function of the repository history, the configuration
//! and the evaluation instant `now`. Its result is written as JSON and read
//! back by the `matrix`, `dashboard` and `top` commands.

pub mod aggregate;
pub mod walker;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::Classifier;
use crate::config::{Config, TimeWindow};
use crate::error::{Result, SkillmapError};
use crate::git::{ChangeType, GitRepo, History};
use crate::util::parse_instant;

pub use aggregate::{Aggregates, RawRow, aggregate};
pub use walker::build_commits;

/// skill -> score
pub type SkillScores = BTreeMap<String, f64>;
/// author -> skill -> score
pub type AuthorSkillScores = BTreeMap<String, SkillScores>;
/// month -> author -> skill -> score
pub type MonthlyScores = BTreeMap<String, AuthorSkillScores>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContribution {
    pub path: String,
    pub skills: Vec<String>,
    pub lines_added: usize,
    pub lines_deleted: usize,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub date: DateTime<FixedOffset>,
    pub files: Vec<FileContribution>,
    pub total_lines_changed: usize,
}

impl CommitRecord {
    pub fn new(
        hash: String,
        author: String,
        date: DateTime<FixedOffset>,
        files: Vec<FileContribution>,
    ) -> Self {
        let total_lines_changed = files.iter().map(|f| f.lines_added + f.lines_deleted).sum();
        Self {
            hash,
            author,
            date,
            files,
            total_lines_changed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub repo: PathBuf,
    pub scanned_at: DateTime<Utc>,
    pub commits: Vec<CommitRecord>,
    pub per_author_skill: AuthorSkillScores,
    pub trend_monthly: MonthlyScores,
    pub raw_rows: Vec<RawRow>,
}

/// A validated configuration ready to walk and score histories.
///
/// Building one parses the time window and compiles the regex rules, so
/// configuration problems surface before any history is read.
pub struct Pipeline<'a> {
    config: &'a Config,
    window: TimeWindow,
    classifier: Classifier,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            window: config.time_window()?,
            classifier: Classifier::from_config(config)?,
        })
    }

    /// Walk `history` and aggregate against `now`.
    pub fn run<H: History + ?Sized>(
        &self,
        history: &H,
        now: &DateTime<Utc>,
    ) -> Result<(Vec<CommitRecord>, Aggregates)> {
        let raw = history.commits(&self.window)?;
        let commits = build_commits(raw, self.config, &self.classifier);
        let aggregates = aggregate(
            &commits,
            &self.config.weights,
            self.config.decay_half_life_days,
            now,
        );
        Ok((commits, aggregates))
    }
}

/// Scan the repository enclosing `path`.
pub fn scan_repo(path: &Path, config: &Config, now: &DateTime<Utc>) -> Result<ScanResult> {
    let pipeline = Pipeline::new(config)?;
    let repo = GitRepo::open(path)?;
    let (commits, aggregates) = pipeline.run(&repo, now)?;
    info!(
        repo = %repo.root().display(),
        commits = commits.len(),
        authors = aggregates.per_author_skill.len(),
        "scan complete"
    );

    Ok(ScanResult {
        repo: repo.root().to_path_buf(),
        scanned_at: Utc::now(),
        commits,
        per_author_skill: aggregates.per_author_skill,
        trend_monthly: aggregates.trend_monthly,
        raw_rows: aggregates.raw_rows,
    })
}

/// Write `result` as pretty JSON, creating parent directories.
pub fn save(result: &ScanResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SkillmapError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| SkillmapError::io(path, e))
}

pub fn load(path: &Path) -> Result<ScanResult> {
    let text = fs::read_to_string(path).map_err(|e| SkillmapError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| SkillmapError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// `skm scan`: load the config, scan `repo` and write the result to `out`.
pub fn run(repo: &Path, config_path: &Path, out: &Path, now: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let now = match now {
        Some(value) => parse_instant("now", value)?,
        None => Utc::now(),
    };

    let result = scan_repo(repo, &config, &now)?;
    save(&result, out)?;
    info!(path = %out.display(), "scan written");
    println!("Wrote scan to {}", out.display());
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
