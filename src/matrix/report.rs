use super::rank::Ranking;
use crate::report_helpers::{column_width, pad_right, separator};

pub(super) fn print_ranking(rows: &[Ranking], skill: Option<&str>) {
    if rows.is_empty() {
        println!("No contributions found.");
        return;
    }

    let author_width = column_width(rows.iter().map(|r| r.author.as_str()), "Author".len());
    // rank(4) + 2 + author + 2 + score(8) + 2 + skills(6)
    let line = separator((author_width + 24).max(40));

    match skill {
        Some(name) => println!("Top contributors: {name}"),
        None => println!("Top contributors: all skills"),
    }
    println!("{line}");
    println!(
        " {:>4}  {}  {:>8}  {:>6}",
        "#",
        pad_right("Author", author_width),
        "Score",
        "Skills"
    );
    println!("{line}");

    for (i, row) in rows.iter().enumerate() {
        println!(
            " {:>4}  {}  {:>8.2}  {:>6}",
            i + 1,
            pad_right(&row.author, author_width),
            row.score,
            row.skills
        );
    }
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_ranking_empty() {
        print_ranking(&[], None);
    }

    #[test]
    fn print_ranking_rows() {
        let rows = vec![
            Ranking {
                author: "山田 <y@x>".to_string(),
                score: 100.0,
                skills: 2,
            },
            Ranking {
                author: "Bob".to_string(),
                score: 50.0,
                skills: 1,
            },
        ];
        print_ranking(&rows, Some("Python"));
        print_ranking(&rows, None);
    }
}
