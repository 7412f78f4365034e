//! File path → skill labels.
//!
//! Rules are consulted in three tiers and the first tier that matches
//! decides:
//!
//! 1. regex rules, in declaration order, anchored at the start of the path;
//! 2. path-prefix rules, longest prefix wins (ties: first declared); a
//!    winning prefix with no skills hands the path on to the next tier;
//! 3. extension rules, in declaration order, matched as a path suffix.
//!
//! A path no rule claims is labelled [`FALLBACK_SKILL`]. Regex and
//! extension rules with an empty skill list never match, so the result is
//! never empty.

use regex::Regex;

use crate::config::{Config, RuleMap};
use crate::error::{Result, SkillmapError};

pub const FALLBACK_SKILL: &str = "Other";

pub struct Classifier {
    regex: Vec<(Regex, Vec<String>)>,
    prefixes: Vec<(String, Vec<String>)>,
    extensions: Vec<(String, Vec<String>)>,
}

fn literal_rules(rules: &RuleMap) -> Vec<(String, Vec<String>)> {
    rules
        .iter()
        .map(|(pattern, skills)| (pattern.clone(), skills.clone()))
        .collect()
}

impl Classifier {
    /// Compile the rule sets. Fails on the first regex that does not compile.
    pub fn new(extensions: &RuleMap, paths: &RuleMap, regexes: &RuleMap) -> Result<Self> {
        let mut regex = Vec::with_capacity(regexes.len());
        for (pattern, skills) in regexes.iter() {
            if skills.is_empty() {
                continue;
            }
            let re = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
                SkillmapError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;
            regex.push((re, skills.clone()));
        }

        Ok(Self {
            regex,
            prefixes: literal_rules(paths),
            extensions: literal_rules(extensions),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.extension_skills,
            &config.path_skills,
            &config.regex_skills,
        )
    }

    pub fn classify(&self, path: &str) -> Vec<String> {
        if let Some((_, skills)) = self.regex.iter().find(|(re, _)| re.is_match(path)) {
            return skills.clone();
        }

        let mut best: Option<&(String, Vec<String>)> = None;
        for rule in self.prefixes.iter().filter(|(p, _)| path.starts_with(p.as_str())) {
            if best.is_none_or(|b| rule.0.len() > b.0.len()) {
                best = Some(rule);
            }
        }
        if let Some((_, skills)) = best.filter(|(_, skills)| !skills.is_empty()) {
            return skills.clone();
        }

        if let Some((_, skills)) = self
            .extensions
            .iter()
            .find(|(ext, skills)| !skills.is_empty() && path.ends_with(ext.as_str()))
        {
            return skills.clone();
        }

        vec![FALLBACK_SKILL.to_string()]
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
