use super::*;

fn matrix() -> SkillMatrix {
    SkillMatrix {
        authors: vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Carol".to_string(),
            "Dan".to_string(),
        ],
        skills: vec!["Python".to_string(), "SQL".to_string()],
        cells: vec![
            vec![100.0, 20.0],
            vec![50.0, 100.0],
            vec![0.0, 70.0],
            vec![0.0, 0.0],
        ],
    }
}

fn names(ranking: &[Ranking]) -> Vec<&str> {
    ranking.iter().map(|r| r.author.as_str()).collect()
}

#[test]
fn overall_sums_rows() {
    let ranking = rank_authors(&matrix(), None).unwrap();
    assert_eq!(names(&ranking), vec!["Bob", "Alice", "Carol"]);
    assert_eq!(ranking[0].score, 150.0);
    assert_eq!(ranking[0].skills, 2);
    assert_eq!(ranking[2].skills, 1);
}

#[test]
fn single_skill_uses_column_and_drops_zeros() {
    let ranking = rank_authors(&matrix(), Some("Python")).unwrap();
    assert_eq!(names(&ranking), vec!["Alice", "Bob"]);
    assert_eq!(ranking[1].score, 50.0);
}

#[test]
fn ties_broken_by_name() {
    let mut m = matrix();
    m.cells[0] = vec![70.0, 0.0];
    let ranking = rank_authors(&m, Some("SQL")).unwrap();
    assert_eq!(names(&ranking), vec!["Bob", "Carol"]);

    let ranking = rank_authors(&m, None).unwrap();
    assert_eq!(names(&ranking), vec!["Bob", "Alice", "Carol"]);
}

#[test]
fn unknown_skill_is_usage_error() {
    let err = rank_authors(&matrix(), Some("Go")).unwrap_err();
    assert!(matches!(err, SkillmapError::Usage(_)));
    assert!(err.to_string().contains("known: Python, SQL"));

    let err = rank_authors(&SkillMatrix::default(), Some("Go")).unwrap_err();
    assert!(err.to_string().contains("no skills"));
}
