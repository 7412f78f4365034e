//! CSV artifacts of a scan.

use std::fs::{self, File};
use std::path::Path;

use csv::{Writer, WriterBuilder};
use serde::Serialize;
use tracing::debug;

use super::{SkillMatrix, build_matrix, build_trends, normalize_matrix};
use crate::error::{Result, SkillmapError};
use crate::report_helpers::Artifact;
use crate::scan::ScanResult;

const TREND_HEADER: [&str; 5] = ["month", "author", "skill", "score", "norm"];
const RAW_HEADER: [&str; 8] = [
    "commit",
    "author",
    "date",
    "path",
    "skill",
    "lines_added",
    "lines_deleted",
    "score",
];

/// Write the raw and normalized matrices, the trend rows and the raw
/// contribution rows into `out_dir`, creating it if needed.
pub fn export_csvs(scan: &ScanResult, out_dir: &Path) -> Result<Vec<Artifact>> {
    fs::create_dir_all(out_dir).map_err(|e| SkillmapError::io(out_dir, e))?;

    let matrix = build_matrix(&scan.per_author_skill);
    let normalized = normalize_matrix(&matrix);
    let trends = build_trends(&scan.trend_monthly);

    let artifacts = vec![
        Artifact {
            name: "skill_matrix",
            path: out_dir.join("skill_matrix.csv"),
        },
        Artifact {
            name: "skill_matrix_normalized",
            path: out_dir.join("skill_matrix_normalized.csv"),
        },
        Artifact {
            name: "skill_trends",
            path: out_dir.join("skill_trends.csv"),
        },
        Artifact {
            name: "raw_contributions",
            path: out_dir.join("raw_contributions.csv"),
        },
    ];

    write_matrix(&matrix, &artifacts[0].path)?;
    write_matrix(&normalized, &artifacts[1].path)?;
    write_rows(&TREND_HEADER, &trends, &artifacts[2].path)?;
    write_rows(&RAW_HEADER, &scan.raw_rows, &artifacts[3].path)?;

    debug!(
        authors = matrix.authors.len(),
        skills = matrix.skills.len(),
        trend_rows = trends.len(),
        raw_rows = scan.raw_rows.len(),
        "csv export done"
    );
    Ok(artifacts)
}

fn open(path: &Path) -> Result<Writer<File>> {
    let file = File::create(path).map_err(|e| SkillmapError::io(path, e))?;
    Ok(WriterBuilder::new().has_headers(false).from_writer(file))
}

fn finish(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| SkillmapError::io(path, e))
}

/// `author,<skill...>` header, one row per author.
fn write_matrix(matrix: &SkillMatrix, path: &Path) -> Result<()> {
    let mut writer = open(path)?;
    writer.write_record(std::iter::once("author").chain(matrix.skills.iter().map(String::as_str)))?;
    for (author, row) in matrix.authors.iter().zip(&matrix.cells) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(author.clone());
        record.extend(row.iter().map(float_field));
        writer.write_record(&record)?;
    }
    finish(writer, path)
}

/// Shortest round-trip form with a fractional part (`10.0`), matching how
/// `serialize` writes the float columns of the other files.
fn float_field(value: &f64) -> String {
    format!("{value:?}")
}

/// Fixed header even when there are no rows.
fn write_rows<T: Serialize>(header: &[&str], rows: &[T], path: &Path) -> Result<()> {
    let mut writer = open(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    finish(writer, path)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
