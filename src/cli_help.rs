//! Long help text constants for CLI subcommands.

/// Starter configuration.
pub const INIT: &str = "\
Write a starter configuration file.

The format follows the file extension: `.yml` / `.yaml` is written as YAML,
anything else as TOML. The starter maps common extensions to skills, adds a
few path and regex rules, and ignores bot authors.

Keys:
  decay_half_life_days   half-life in days, <= 0 disables decay (default 120)
  time_since, time_until inclusive commit-date bounds (RFC 3339 or YYYY-MM-DD)
  ignore_authors         case-insensitive substrings; matching authors are skipped
  weights                lines_changed, files_touched, commit_bonus
  extension_skills       suffix -> skills, first declared match wins
  path_skills            prefix -> skills, longest prefix wins
  regex_skills           pattern -> skills, anchored at the path start
  author_aliases         \"Name <email>\" -> canonical name (case-insensitive)

Examples:
  skm init                       # writes config.toml
  skm init --out skills.yaml     # YAML instead
  skm init --force               # overwrite an existing file";

/// History scan and scoring.
pub const SCAN: &str = "\
Scan a git repository and write per-author skill scores as JSON.

Every file touched by a non-merge commit is classified into skills:
  1. regex_skills    first matching pattern (declaration order)
  2. path_skills     longest matching path prefix
  3. extension_skills first matching suffix (declaration order)
  4. Other           when nothing matched

Each file contributes, to every one of its skills:
  base    = lines_changed * (added + deleted) + files_touched + commit_bonus
  decayed = base * 0.5 ^ (age_days / decay_half_life_days)

Scores are summed per author and skill, and per month (YYYY-MM) for trends.
`--now` pins the instant ages are measured from, for reproducible output.

Examples:
  skm scan -c config.toml                      # scan the current repository
  skm scan --repo ../api -c config.toml --out out/api.json
  skm scan -c config.toml --now 2024-06-30     # fixed decay reference";

/// CSV export.
pub const MATRIX: &str = "\
Export CSV artifacts from a scan file.

Files written to the output directory:
  skill_matrix.csv              author x skill, decayed scores
  skill_matrix_normalized.csv   same, each skill column scaled so its top author is 100
  skill_trends.csv              month, author, skill, score, norm
  raw_contributions.csv         one row per (commit, file, skill)

Trend normalization is done per (month, skill): the top author for that
skill in that month is 100.

Examples:
  skm matrix --scan scan.json
  skm matrix --scan scan.json --out reports/
  skm matrix --scan scan.json --json         # print the normalized matrix";

/// Static dashboard.
pub const DASHBOARD: &str = "\
Build a static HTML dashboard from a scan file.

Writes index.html (with the data embedded) and data.json. The page offers
author, skill and month filters, free-text search, summary cards, paginated
matrix and trend tables, a dark theme, and a data download link. It needs no
server: open index.html directly.

Examples:
  skm dashboard --scan scan.json
  skm dashboard --scan scan.json --out site/";

/// Leaderboard.
pub const TOP: &str = "\
Rank authors by normalized skill score.

Without --skill the score is the sum of an author's normalized scores over
all skills; with --skill it is that skill's column (top author = 100).
Authors with a zero score are not listed.

Examples:
  skm top --scan scan.json
  skm top --scan scan.json --skill Rust --limit 5
  skm top --scan scan.json --json";
