//! Author leaderboard over a normalized matrix.

use serde::Serialize;

use super::SkillMatrix;
use crate::error::{Result, SkillmapError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub author: String,
    /// Normalized score for one skill, or the sum across all skills.
    pub score: f64,
    /// Skills in which the author has a non-zero score.
    pub skills: usize,
}

/// Rank authors by normalized score, highest first, ties by name.
///
/// With `skill` the score is that column; without it the sum of the row.
/// Authors scoring zero are left out. An unknown skill is a usage error.
pub fn rank_authors(normalized: &SkillMatrix, skill: Option<&str>) -> Result<Vec<Ranking>> {
    let column = match skill {
        Some(name) => Some(
            normalized
                .skills
                .iter()
                .position(|s| s == name)
                .ok_or_else(|| unknown_skill(name, &normalized.skills))?,
        ),
        None => None,
    };

    let mut ranking: Vec<Ranking> = normalized
        .authors
        .iter()
        .zip(&normalized.cells)
        .map(|(author, row)| Ranking {
            author: author.clone(),
            score: match column {
                Some(col) => row[col],
                None => row.iter().sum(),
            },
            skills: row.iter().filter(|v| **v > 0.0).count(),
        })
        .filter(|r| r.score > 0.0)
        .collect();

    ranking.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.author.cmp(&b.author))
    });
    Ok(ranking)
}

fn unknown_skill(name: &str, known: &[String]) -> SkillmapError {
    if known.is_empty() {
        return SkillmapError::Usage(format!("unknown skill '{name}': the scan has no skills"));
    }
    SkillmapError::Usage(format!(
        "unknown skill '{name}' (known: {})",
        known.join(", ")
    ))
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
