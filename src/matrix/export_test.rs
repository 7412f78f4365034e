use super::*;
use crate::scan::{AuthorSkillScores, MonthlyScores, RawRow};
use chrono::DateTime;
use std::path::PathBuf;

fn scan() -> ScanResult {
    let mut per_author_skill = AuthorSkillScores::new();
    per_author_skill
        .entry("Alice".to_string())
        .or_default()
        .insert("Python".to_string(), 10.0);
    per_author_skill
        .entry("Alice".to_string())
        .or_default()
        .insert("SQL".to_string(), 5.0);
    per_author_skill
        .entry("Bob".to_string())
        .or_default()
        .insert("Python".to_string(), 5.0);

    let mut trend_monthly = MonthlyScores::new();
    let january = trend_monthly.entry("2024-01".to_string()).or_default();
    january
        .entry("Alice".to_string())
        .or_default()
        .insert("Python".to_string(), 8.0);
    january
        .entry("Bob".to_string())
        .or_default()
        .insert("Python".to_string(), 4.0);

    ScanResult {
        repo: PathBuf::from("/srv/repo"),
        scanned_at: DateTime::from_timestamp(1_717_200_000, 0).unwrap(),
        commits: Vec::new(),
        per_author_skill,
        trend_monthly,
        raw_rows: vec![RawRow {
            commit: "abc".to_string(),
            author: "Alice".to_string(),
            date: DateTime::parse_from_rfc3339("2024-01-10T12:00:00+01:00").unwrap(),
            path: "etl, v2.py".to_string(),
            skill: "Python".to_string(),
            lines_added: 7,
            lines_deleted: 3,
            score: 10.0,
        }],
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn writes_four_named_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a").join("b");
    let artifacts = export_csvs(&scan(), &out).unwrap();

    let names: Vec<&str> = artifacts.iter().map(|a| a.name).collect();
    assert_eq!(
        names,
        vec![
            "skill_matrix",
            "skill_matrix_normalized",
            "skill_trends",
            "raw_contributions"
        ]
    );
    assert!(artifacts.iter().all(|a| a.path.starts_with(&out) && a.path.is_file()));
}

#[test]
fn matrix_csv_layout() {
    let dir = tempfile::tempdir().unwrap();
    export_csvs(&scan(), dir.path()).unwrap();

    assert_eq!(
        read(&dir.path().join("skill_matrix.csv")),
        "author,Python,SQL\nAlice,10.0,5.0\nBob,5.0,0.0\n"
    );
    assert_eq!(
        read(&dir.path().join("skill_matrix_normalized.csv")),
        "author,Python,SQL\nAlice,100.0,100.0\nBob,50.0,0.0\n"
    );
}

#[test]
fn matrix_floats_match_trend_floats() {
    assert_eq!(float_field(&100.0), "100.0");
    assert_eq!(float_field(&33.33), "33.33");
    assert_eq!(float_field(&0.0), "0.0");
}

#[test]
fn trend_csv_has_score_and_norm() {
    let dir = tempfile::tempdir().unwrap();
    export_csvs(&scan(), dir.path()).unwrap();
    assert_eq!(
        read(&dir.path().join("skill_trends.csv")),
        "month,author,skill,score,norm\n2024-01,Alice,Python,8.0,100.0\n2024-01,Bob,Python,4.0,50.0\n"
    );
}

#[test]
fn raw_csv_quotes_and_keeps_offset() {
    let dir = tempfile::tempdir().unwrap();
    export_csvs(&scan(), dir.path()).unwrap();
    let text = read(&dir.path().join("raw_contributions.csv"));
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("commit,author,date,path,skill,lines_added,lines_deleted,score")
    );
    assert_eq!(
        lines.next(),
        Some("abc,Alice,2024-01-10T12:00:00+01:00,\"etl, v2.py\",Python,7,3,10.0")
    );
}

#[test]
fn empty_scan_still_writes_headers() {
    let dir = tempfile::tempdir().unwrap();
    let empty = ScanResult {
        per_author_skill: AuthorSkillScores::new(),
        trend_monthly: MonthlyScores::new(),
        raw_rows: Vec::new(),
        ..scan()
    };
    export_csvs(&empty, dir.path()).unwrap();
    assert_eq!(read(&dir.path().join("skill_matrix.csv")), "author\n");
    assert_eq!(
        read(&dir.path().join("skill_trends.csv")),
        "month,author,skill,score,norm\n"
    );
}

#[test]
fn unwritable_output_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();
    let err = export_csvs(&scan(), &blocker).unwrap_err();
    assert!(matches!(err, SkillmapError::Io { ref path, .. } if path == &blocker));
}
