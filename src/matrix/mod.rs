//! Author x skill matrix and monthly trend rows, raw and normalized.
//!
//! Normalization rescales a group of scores so its top value becomes
//! 100, rounded to two decimals. For the matrix a group is one skill
//! column; for trends it is one (month, skill) pair. A group whose top
//! value is not positive normalizes to all zeros.

pub mod export;
pub mod rank;
mod report;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::report_helpers::{self, print_artifacts, print_json_stdout};
use crate::scan::{self, AuthorSkillScores, MonthlyScores};
use crate::util::round2;

pub use export::export_csvs;
pub use rank::rank_authors;

/// Rows are authors, columns are skills, both sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatrix {
    pub authors: Vec<String>,
    pub skills: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<f64>>,
}

impl SkillMatrix {
    fn column_max(&self, col: usize) -> f64 {
        self.cells
            .iter()
            .map(|row| row[col])
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    pub month: String,
    pub author: String,
    pub skill: String,
    pub score: f64,
    pub norm: f64,
}

fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        round2(value / max * 100.0)
    } else {
        0.0
    }
}

pub fn build_matrix(per_author_skill: &AuthorSkillScores) -> SkillMatrix {
    let authors: Vec<String> = per_author_skill.keys().cloned().collect();
    let mut skills: Vec<String> = per_author_skill
        .values()
        .flat_map(|by_skill| by_skill.keys().cloned())
        .collect();
    skills.sort();
    skills.dedup();

    let cells = per_author_skill
        .values()
        .map(|by_skill| {
            skills
                .iter()
                .map(|skill| by_skill.get(skill).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    SkillMatrix {
        authors,
        skills,
        cells,
    }
}

pub fn normalize_matrix(matrix: &SkillMatrix) -> SkillMatrix {
    let maxima: Vec<f64> = (0..matrix.skills.len())
        .map(|col| matrix.column_max(col))
        .collect();

    let cells = matrix
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(&maxima)
                .map(|(value, max)| scale(*value, *max))
                .collect()
        })
        .collect();

    SkillMatrix {
        authors: matrix.authors.clone(),
        skills: matrix.skills.clone(),
        cells,
    }
}

/// One row per (month, author, skill), ordered by month, author, skill.
pub fn build_trends(trend_monthly: &MonthlyScores) -> Vec<TrendRow> {
    let mut maxima: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for (month, by_author) in trend_monthly {
        for (skill, score) in by_author.values().flatten() {
            let top = maxima
                .entry((month.as_str(), skill.as_str()))
                .or_insert(f64::NEG_INFINITY);
            *top = top.max(*score);
        }
    }

    let mut rows = Vec::new();
    for (month, by_author) in trend_monthly {
        for (author, by_skill) in by_author {
            for (skill, score) in by_skill {
                let max = maxima
                    .get(&(month.as_str(), skill.as_str()))
                    .copied()
                    .unwrap_or(0.0);
                rows.push(TrendRow {
                    month: month.clone(),
                    author: author.clone(),
                    skill: skill.clone(),
                    score: *score,
                    norm: scale(*score, max),
                });
            }
        }
    }
    rows
}

/// `skm matrix`: export the CSV artifacts of a saved scan.
pub fn run(scan_path: &Path, out_dir: &Path, json: bool) -> Result<()> {
    let scan = scan::load(scan_path)?;
    let artifacts = export_csvs(&scan, out_dir)?;
    info!(dir = %out_dir.display(), files = artifacts.len(), "matrix exported");

    if json {
        print_json_stdout(&normalize_matrix(&build_matrix(&scan.per_author_skill)))
    } else {
        print_artifacts(&artifacts);
        Ok(())
    }
}

/// `skm top`: rank authors by normalized score.
pub fn run_top(scan_path: &Path, skill: Option<&str>, limit: usize, json: bool) -> Result<()> {
    let scan = scan::load(scan_path)?;
    let normalized = normalize_matrix(&build_matrix(&scan.per_author_skill));
    let mut ranking = rank_authors(&normalized, skill)?;
    report_helpers::output_results(
        &mut ranking,
        limit,
        json,
        |rows| print_json_stdout(&rows),
        |rows| report::print_ranking(rows, skill),
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
