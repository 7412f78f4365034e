//! Static HTML dashboard over a saved scan.
//!
//! Produces `data.json` and an `index.html` that embeds the same document,
//! so the page works when opened straight from disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::{Result, SkillmapError};
use crate::matrix::{SkillMatrix, TrendRow, build_matrix, build_trends, normalize_matrix};
use crate::report_helpers::{Artifact, print_artifacts};
use crate::scan::{self, ScanResult};

const TEMPLATE: &str = include_str!("template.html");
const DATA_PLACEHOLDER: &str = "__SKILLMAP_DATA__";

#[derive(Debug, Serialize)]
pub struct Meta {
    pub repo: PathBuf,
    pub scanned_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub meta: Meta,
    pub matrix_raw: SkillMatrix,
    pub matrix_norm: SkillMatrix,
    pub trends: Vec<TrendRow>,
}

impl DashboardData {
    pub fn from_scan(scan: &ScanResult) -> Self {
        let matrix_raw = build_matrix(&scan.per_author_skill);
        let matrix_norm = normalize_matrix(&matrix_raw);
        Self {
            meta: Meta {
                repo: scan.repo.clone(),
                scanned_at: scan.scanned_at,
            },
            matrix_raw,
            matrix_norm,
            trends: build_trends(&scan.trend_monthly),
        }
    }
}

/// Fill the page template with `data_json`. `</` is escaped so author or
/// skill names cannot close the embedding script element.
pub fn render_html(data_json: &str) -> String {
    TEMPLATE.replace(DATA_PLACEHOLDER, &data_json.replace("</", "<\\/"))
}

pub fn generate_dashboard(scan: &ScanResult, out_dir: &Path) -> Result<Vec<Artifact>> {
    fs::create_dir_all(out_dir).map_err(|e| SkillmapError::io(out_dir, e))?;

    let data_json = serde_json::to_string(&DashboardData::from_scan(scan))?;
    let artifacts = vec![
        Artifact {
            name: "index_html",
            path: out_dir.join("index.html"),
        },
        Artifact {
            name: "data_json",
            path: out_dir.join("data.json"),
        },
    ];

    write(&artifacts[0].path, &render_html(&data_json))?;
    write(&artifacts[1].path, &data_json)?;
    Ok(artifacts)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| SkillmapError::io(path, e))
}

/// `skm dashboard`: build the static dashboard of a saved scan.
pub fn run(scan_path: &Path, out_dir: &Path) -> Result<()> {
    let scan = scan::load(scan_path)?;
    let artifacts = generate_dashboard(&scan, out_dir)?;
    info!(dir = %out_dir.display(), "dashboard written");
    print_artifacts(&artifacts);
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
