use sgpa_calc::catalog::Term;
use sgpa_calc::compute::compute;
use sgpa_calc::output::Format;
use sgpa_calc::session::{run_cgpa, run_sgpa};
use std::io::Cursor;

fn transcript(term: Term, input: &str) -> String {
    let mut out = Vec::new();
    run_sgpa(term, Format::Text, Cursor::new(input.to_string()), &mut out)
        .expect("session failed");
    String::from_utf8(out).expect("non-utf8 output")
}

#[test]
fn test_sem3_full_transcript() {
    let text = transcript(Term::Sem3, "8\n7\n9\n6\n8\n9\n10\n7\n8\n");

    let expected = "Enter grades (out of 10) for the following subjects:\n\
        Computer Organization: DSA: Analog and Digital Electronics: Mathematics: \
        Economics: Computer Organization Lab: DSA Lab: \
        Analog and Digital Electronics Lab: Python Lab: \n\
        Total Credits: 22\n\
        SGPA: 8.00\n";
    assert_eq!(text, expected);
}

#[test]
fn test_sem4_all_tens_transcript() {
    let text = transcript(Term::Sem4, "10 10 10 10 10 10 10 10\n");

    assert!(text.contains("Discrete Mathematics: Computer Architecture: Automata: "));
    assert!(text.ends_with("Computer Architecture Lab: \nTotal Credits: 21\nSGPA: 10.00\n"));
}

#[test]
fn test_all_zero_grades() {
    for term in Term::ALL {
        let input = vec!["0"; term.subjects().len()].join("\n");
        let text = transcript(term, &input);
        assert!(text.ends_with(&format!(
            "Total Credits: {}\nSGPA: 0.00\n",
            term.total_credits()
        )));
    }
}

#[test]
fn test_reported_values_match_formula() {
    let grades = [3, 10, 0, 7, 5, 9, 4, 6];
    let input = grades.map(|g| g.to_string()).join(" ");
    let text = transcript(Term::Sem4, &input);

    let points: i64 = Term::Sem4
        .subjects()
        .iter()
        .zip(grades)
        .map(|(s, g)| g * s.credit as i64)
        .sum();
    let expected = points as f64 / 21.0;
    assert!(text.ends_with(&format!("SGPA: {:.2}\n", expected)));

    let summary = compute(Term::Sem4.subjects(), &grades).unwrap();
    assert_eq!(summary.total_grade_points, points as f64);
}

#[test]
fn test_malformed_input_is_an_error() {
    let mut out = Vec::new();
    let result = run_sgpa(Term::Sem3, Format::Text, Cursor::new("8 7 nine"), &mut out);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Analog and Digital Electronics"));
}

#[test]
fn test_extreme_integer_grade_completes() {
    let mut out = Vec::new();
    let summary = run_sgpa(
        Term::Sem3,
        Format::Text,
        Cursor::new("9223372036854775807 8 8 8 8 8 8 8 8"),
        &mut out,
    )
    .expect("extreme grade should not abort the session");

    assert_eq!(summary.total_credits, 22);
    assert!(summary.sgpa.is_finite());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total Credits: 22\nSGPA: "));
}

#[test]
fn test_json_format() {
    let mut out = Vec::new();
    run_sgpa(
        Term::Sem3,
        Format::Json,
        Cursor::new("A B+ A A+ B C+ A+ B B+"),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    let json_start = text.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();

    assert_eq!(value["total_credits"], 22);
    assert_eq!(value["entries"][3]["grade"], 10);
}

#[test]
fn test_cgpa_json() {
    let mut out = Vec::new();
    let total = run_cgpa(
        &[Term::Sem4],
        Format::Json,
        Cursor::new("10 10 10 10 10 10 10 10"),
        &mut out,
    )
    .unwrap();
    assert_eq!(total.sgpa, 10.0);

    let text = String::from_utf8(out).unwrap();
    let json_start = text.find('{').unwrap();
    let value: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
    assert_eq!(value["cgpa"], 10.0);
    assert_eq!(value["terms"].as_array().unwrap().len(), 1);
}
