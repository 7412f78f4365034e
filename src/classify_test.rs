use super::*;

fn rules(entries: &[(&str, &[&str])]) -> RuleMap {
    let mut map = RuleMap::new();
    for (pattern, skills) in entries {
        map.insert(pattern.to_string(), skills.iter().map(|s| s.to_string()).collect());
    }
    map
}

fn classify(path: &str, ext: &RuleMap, paths: &RuleMap, regex: &RuleMap) -> Vec<String> {
    Classifier::new(ext, paths, regex).unwrap().classify(path)
}

#[test]
fn regex_beats_path_and_extension() {
    let ext = rules(&[(".tsx", &["React", "TypeScript"]), (".ts", &["TypeScript"])]);
    let paths = rules(&[("frontend/", &["React", "JavaScript"])]);
    let regex = rules(&[(r"^frontend/src/.*\.tsx$", &["React"]), (r".*\.ts$", &["TypeScript"])]);
    assert_eq!(
        classify("frontend/src/app.tsx", &ext, &paths, &regex),
        vec!["React"]
    );
}

#[test]
fn precedence_falls_through_each_tier() {
    let ext = rules(&[(".py", &["Python"])]);
    let paths = rules(&[("services/", &["Backend"])]);
    let regex = rules(&[(r"services/ml/", &["ML"])]);
    let empty = RuleMap::new();
    let path = "services/ml/train.py";

    assert_eq!(classify(path, &ext, &paths, &regex), vec!["ML"]);
    assert_eq!(classify(path, &ext, &paths, &empty), vec!["Backend"]);
    assert_eq!(classify(path, &ext, &empty, &empty), vec!["Python"]);
    assert_eq!(classify(path, &empty, &empty, &empty), vec![FALLBACK_SKILL]);
}

#[test]
fn regex_first_declared_wins() {
    let empty = RuleMap::new();
    let regex = rules(&[(r".*\.sql$", &["SQL"]), (r"db/", &["Database"])]);
    assert_eq!(classify("db/schema.sql", &empty, &empty, &regex), vec!["SQL"]);

    let reversed = rules(&[(r"db/", &["Database"]), (r".*\.sql$", &["SQL"])]);
    assert_eq!(
        classify("db/schema.sql", &empty, &empty, &reversed),
        vec!["Database"]
    );
}

#[test]
fn regex_is_anchored_at_start() {
    let empty = RuleMap::new();
    let regex = rules(&[(r"src/", &["Source"])]);
    assert_eq!(classify("src/main.rs", &empty, &empty, &regex), vec!["Source"]);
    assert_eq!(
        classify("vendor/src/main.rs", &empty, &empty, &regex),
        vec![FALLBACK_SKILL]
    );
}

#[test]
fn regex_alternation_is_anchored_as_a_whole() {
    let empty = RuleMap::new();
    let regex = rules(&[(r"a/|b/", &["AB"])]);
    assert_eq!(classify("b/x", &empty, &empty, &regex), vec!["AB"]);
    assert_eq!(classify("x/b/y", &empty, &empty, &regex), vec![FALLBACK_SKILL]);
}

#[test]
fn longest_prefix_wins_regardless_of_order() {
    let empty = RuleMap::new();
    let paths = rules(&[("src/", &["Backend"]), ("src/web/", &["Frontend"])]);
    assert_eq!(
        classify("src/web/app.js", &empty, &paths, &empty),
        vec!["Frontend"]
    );
    assert_eq!(classify("src/db.rs", &empty, &paths, &empty), vec!["Backend"]);
}

#[test]
fn prefix_is_literal_not_pattern() {
    let empty = RuleMap::new();
    let paths = rules(&[("src/*.rs", &["Glob"]), ("lib", &["Lib"])]);
    assert_eq!(classify("src/main.rs", &empty, &paths, &empty), vec![FALLBACK_SKILL]);
    assert_eq!(classify("library/x.c", &empty, &paths, &empty), vec!["Lib"]);
    assert_eq!(classify("a/lib/x.c", &empty, &paths, &empty), vec![FALLBACK_SKILL]);
}

#[test]
fn extension_first_declared_wins() {
    let ext = rules(&[(".test.ts", &["Testing"]), (".ts", &["TypeScript"])]);
    let empty = RuleMap::new();
    assert_eq!(classify("a.test.ts", &ext, &empty, &empty), vec!["Testing"]);
    assert_eq!(classify("a.ts", &ext, &empty, &empty), vec!["TypeScript"]);
}

#[test]
fn extension_is_case_sensitive_suffix() {
    let ext = rules(&[(".py", &["Python"])]);
    let empty = RuleMap::new();
    assert_eq!(classify("setup.PY", &ext, &empty, &empty), vec![FALLBACK_SKILL]);
    assert_eq!(classify("py", &ext, &empty, &empty), vec![FALLBACK_SKILL]);
}

#[test]
fn empty_skill_lists_never_match() {
    let ext = rules(&[(".py", &["Python"])]);
    let paths = rules(&[("scripts/", &[])]);
    let regex = rules(&[(r"scripts/", &[])]);
    assert_eq!(
        classify("scripts/run.py", &ext, &paths, &regex),
        vec!["Python"]
    );
}

#[test]
fn empty_longest_prefix_skips_to_extension() {
    let ext = rules(&[(".py", &["Python"])]);
    let paths = rules(&[("src/", &["Backend"]), ("src/gen/", &[])]);
    let empty = RuleMap::new();
    assert_eq!(classify("src/gen/a.py", &ext, &paths, &empty), vec!["Python"]);
    assert_eq!(classify("src/gen/a.c", &empty, &paths, &empty), vec![FALLBACK_SKILL]);
    assert_eq!(classify("src/app.py", &ext, &paths, &empty), vec!["Backend"]);
}

#[test]
fn multiple_skills_kept_in_order() {
    let ext = rules(&[(".tsx", &["React", "TypeScript"])]);
    let empty = RuleMap::new();
    assert_eq!(
        classify("ui/button.tsx", &ext, &empty, &empty),
        vec!["React", "TypeScript"]
    );
}

#[test]
fn invalid_regex_names_pattern() {
    let empty = RuleMap::new();
    let regex = rules(&[(r"src/(unclosed", &["X"])]);
    let err = Classifier::new(&empty, &empty, &regex).err().unwrap();
    assert!(matches!(err, SkillmapError::InvalidPattern { .. }));
    assert!(err.to_string().contains("src/(unclosed"), "got: {err}");
}

#[test]
fn from_config_uses_all_rule_sets() {
    let cfg = Config::starter();
    let classifier = Classifier::from_config(&cfg).unwrap();
    assert_eq!(classifier.classify("api/handler.py"), vec!["Python"]);
    assert_eq!(classifier.classify("docs/guide.rst"), vec!["Documentation"]);
    assert_eq!(classifier.classify("deploy/Dockerfile"), vec!["Docker"]);
    assert_eq!(classifier.classify("tests/test_api.py"), vec!["Testing"]);
    assert_eq!(classifier.classify("LICENSE"), vec![FALLBACK_SKILL]);
}
