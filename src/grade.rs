use anyhow::{Result, anyhow};

/// Letter grades accepted on input, with the grade points they stand for.
static LETTER_POINTS: &[(&str, i64)] = &[
    ("A+", 10),
    ("A", 9),
    ("B+", 8),
    ("B", 7),
    ("C+", 6),
    ("C", 5),
    ("D", 4),
    ("F", 0),
];

/// Looks up the grade points for a letter grade (case-insensitive).
pub fn letter_points(letter: &str) -> Option<i64> {
    LETTER_POINTS
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(letter))
        .map(|&(_, p)| p)
}

/// Parses one grade token: either an integer or a letter grade.
///
/// Integers are taken as-is; the 0–10 range is not enforced here.
pub fn parse_grade(token: &str) -> Result<i64> {
    if let Ok(points) = token.parse::<i64>() {
        return Ok(points);
    }
    letter_points(token).ok_or_else(|| anyhow!("invalid grade '{token}'"))
}

/// Whether a grade falls inside the expected 0–10 scale.
pub fn in_range(points: i64) -> bool {
    (0..=10).contains(&points)
}

/// Converts a grade-point average (0.0–10.0) into a letter band.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 10.0 | A+    |
/// | >= 9.0  | A     |
/// | >= 8.0  | B+    |
/// | >= 7.0  | B     |
/// | >= 6.0  | C+    |
/// | >= 5.0  | C     |
/// | >= 4.0  | D     |
/// | < 4.0   | F     |
pub fn letter_grade(avg: f64) -> String {
    match avg {
        a if a >= 10.0 => "A+".into(),
        a if a >= 9.0 => "A".into(),
        a if a >= 8.0 => "B+".into(),
        a if a >= 7.0 => "B".into(),
        a if a >= 6.0 => "C+".into(),
        a if a >= 5.0 => "C".into(),
        a if a >= 4.0 => "D".into(),
        _ => "F".into(),
    }
}
