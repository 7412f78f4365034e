//! Scan configuration: classification rules, weights, decay and filters.
//!
//! The same document layout is read from TOML (default) or YAML (files
//! ending in `.yml` / `.yaml`). All fields are optional; missing ones take
//! the defaults below.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SkillmapError};
use crate::util::parse_timestamp;

/// Pattern → skill labels, in declaration order.
pub type RuleMap = IndexMap<String, Vec<String>>;

/// Raw `"Name <email>"` identity → canonical author.
pub type AliasMap = IndexMap<String, String>;

// YAML `key:` with no body parses as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-file contribution coefficients.
///
/// A key missing from the `weights` table counts as 0; a missing table
/// falls back to [`Weights::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default)]
    pub lines_changed: f64,
    #[serde(default)]
    pub files_touched: f64,
    #[serde(default)]
    pub commit_bonus: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            lines_changed: 1.0,
            files_touched: 0.3,
            commit_bonus: 0.2,
        }
    }
}

impl Weights {
    /// Undecayed score for one file touched in one commit.
    pub fn base_score(&self, lines_changed: usize) -> f64 {
        self.lines_changed * lines_changed as f64 + self.files_touched * 1.0 + self.commit_bonus
    }
}

pub const DEFAULT_HALF_LIFE_DAYS: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Half-life of a contribution in days; `<= 0` disables decay.
    pub decay_half_life_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_until: Option<String>,
    /// Case-insensitive substrings; a matching author is skipped entirely.
    pub ignore_authors: Vec<String>,
    pub weights: Weights,
    #[serde(deserialize_with = "null_as_empty")]
    pub extension_skills: RuleMap,
    #[serde(deserialize_with = "null_as_empty")]
    pub path_skills: RuleMap,
    #[serde(deserialize_with = "null_as_empty")]
    pub regex_skills: RuleMap,
    #[serde(deserialize_with = "null_as_empty")]
    pub author_aliases: AliasMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decay_half_life_days: DEFAULT_HALF_LIFE_DAYS,
            time_since: None,
            time_until: None,
            ignore_authors: Vec::new(),
            weights: Weights::default(),
            extension_skills: RuleMap::new(),
            path_skills: RuleMap::new(),
            regex_skills: RuleMap::new(),
            author_aliases: AliasMap::new(),
        }
    }
}

/// Inclusive commit-date bounds; `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub since: Option<DateTime<FixedOffset>>,
    pub until: Option<DateTime<FixedOffset>>,
}

impl TimeWindow {
    pub fn contains(&self, when: &DateTime<FixedOffset>) -> bool {
        self.since.is_none_or(|s| *when >= s) && self.until.is_none_or(|u| *when <= u)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                Format::Yaml
            }
            _ => Format::Toml,
        }
    }
}

fn rule(pattern: &str, skills: &[&str]) -> (String, Vec<String>) {
    (
        pattern.to_string(),
        skills.iter().map(|s| s.to_string()).collect(),
    )
}

fn config_error(path: &Path, message: impl ToString) -> SkillmapError {
    SkillmapError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

impl Config {
    /// Starter configuration written by `skm init`.
    pub fn starter() -> Self {
        Self {
            ignore_authors: vec!["[bot]".to_string(), "dependabot".to_string()],
            extension_skills: RuleMap::from_iter([
                rule(".py", &["Python"]),
                rule(".rs", &["Rust"]),
                rule(".go", &["Go"]),
                rule(".java", &["Java"]),
                rule(".kt", &["Kotlin"]),
                rule(".tsx", &["React", "TypeScript"]),
                rule(".jsx", &["React", "JavaScript"]),
                rule(".ts", &["TypeScript"]),
                rule(".js", &["JavaScript"]),
                rule(".sql", &["SQL"]),
                rule(".sh", &["Shell"]),
                rule(".tf", &["Terraform"]),
                rule(".css", &["CSS"]),
                rule(".scss", &["CSS"]),
                rule(".html", &["HTML"]),
                rule(".md", &["Documentation"]),
            ]),
            path_skills: RuleMap::from_iter([
                rule(".github/workflows/", &["CI/CD"]),
                rule("docs/", &["Documentation"]),
                rule("infra/", &["Infrastructure"]),
            ]),
            regex_skills: RuleMap::from_iter([
                rule(r"(.*/)?Dockerfile(\..*)?$", &["Docker"]),
                rule(r"(.*/)?(tests?|spec)/", &["Testing"]),
            ]),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SkillmapError::io(path, e))?;
        let config = Self::parse(&text, path)?;
        if config.extension_skills.is_empty()
            && config.path_skills.is_empty()
            && config.regex_skills.is_empty()
        {
            warn!(path = %path.display(), "no classification rules, every file counts as Other");
        }
        Ok(config)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let config: Config = match Format::of(path) {
            Format::Toml => toml::from_str(text).map_err(|e| config_error(path, e))?,
            // An empty YAML document is null, not a mapping.
            Format::Yaml if text.trim().is_empty() => Config::default(),
            Format::Yaml => serde_yaml::from_str(text).map_err(|e| config_error(path, e))?,
        };
        if config.decay_half_life_days.is_nan() {
            return Err(config_error(path, "decay_half_life_days must be a number"));
        }
        Ok(config)
    }

    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        match Format::of(path) {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| config_error(path, e)),
            Format::Yaml => serde_yaml::to_string(self).map_err(|e| config_error(path, e)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_string_for(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SkillmapError::io(parent, e))?;
        }
        fs::write(path, text).map_err(|e| SkillmapError::io(path, e))
    }

    /// Parse `time_since` / `time_until`. Fails before any traversal starts.
    pub fn time_window(&self) -> Result<TimeWindow> {
        let since = self
            .time_since
            .as_deref()
            .map(|s| parse_timestamp("time_since", s))
            .transpose()?;
        let until = self
            .time_until
            .as_deref()
            .map(|s| parse_timestamp("time_until", s))
            .transpose()?;
        Ok(TimeWindow { since, until })
    }
}

/// `skm init`: write [`Config::starter`] to `path`.
pub fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(SkillmapError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::starter().save(path)?;
    info!(path = %path.display(), "starter config written");
    println!("Wrote config to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
