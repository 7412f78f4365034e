use std::path::PathBuf;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::error::Result;

/// A file written by an export step, keyed by a stable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub name: &'static str,
    pub path: PathBuf,
}

/// Terminal column width of `s` (wide glyphs count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Widest of `values`, never below `min`.
pub fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(display_width).max().unwrap_or(min).max(min)
}

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Truncate results to `top` and output as JSON or table.
pub fn output_results<T>(
    results: &mut Vec<T>,
    top: usize,
    json: bool,
    print_json_fn: impl FnOnce(&[T]) -> Result<()>,
    print_report_fn: impl FnOnce(&[T]),
) -> Result<()> {
    results.truncate(top);
    if json {
        print_json_fn(results)
    } else {
        print_report_fn(results);
        Ok(())
    }
}

pub fn print_artifacts(artifacts: &[Artifact]) {
    let name_width = column_width(artifacts.iter().map(|a| a.name), "Artifact".len());
    let paths: Vec<String> = artifacts
        .iter()
        .map(|a| a.path.display().to_string())
        .collect();
    let path_width = column_width(paths.iter().map(String::as_str), "Path".len());
    let line = separator(name_width + path_width + 3);

    println!("{line}");
    println!(" {}  Path", pad_right("Artifact", name_width));
    println!("{line}");
    for (artifact, path) in artifacts.iter().zip(&paths) {
        println!(" {}  {path}", pad_right(artifact.name, name_width));
    }
    println!("{line}");
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
