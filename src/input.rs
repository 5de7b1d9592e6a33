//! Interactive grade collection.

use anyhow::{Context, Result, anyhow};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::catalog::Subject;
use crate::grade::{in_range, parse_grade};

pub const BANNER: &str = "Enter grades (out of 10) for the following subjects:";

/// Splits a line-oriented reader into whitespace-separated tokens.
///
/// Several grades may share one line; a token never spans lines.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Prompts for and reads one grade per subject, in table order.
///
/// # Errors
///
/// Fails if input ends early, a token is not a grade, or writing a prompt fails.
pub fn prompt_grades<R: BufRead, W: Write>(
    table: &[Subject],
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Vec<i64>> {
    writeln!(out, "{BANNER}")?;

    let mut grades = Vec::with_capacity(table.len());
    for subject in table {
        write!(out, "{}: ", subject.name)?;
        out.flush()?;

        let token = reader.next_token()?.ok_or_else(|| {
            anyhow!(
                "unexpected end of input while reading grade for {}",
                subject.name
            )
        })?;
        let grade = parse_grade(&token)
            .with_context(|| format!("reading grade for {}", subject.name))?;

        if !in_range(grade) {
            warn!(subject = subject.name, grade, "Grade outside 0-10 scale");
        }
        debug!(subject = subject.name, credit = subject.credit, grade, "Grade read");

        grades.push(grade);
    }

    Ok(grades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Term;
    use std::io::Cursor;

    fn reader(text: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_tokens_across_lines() {
        let mut r = reader("8 7\n\n  9\n10");
        let mut tokens = Vec::new();
        while let Some(t) = r.next_token().unwrap() {
            tokens.push(t);
        }
        assert_eq!(tokens, vec!["8", "7", "9", "10"]);
    }

    #[test]
    fn test_empty_reader() {
        let mut r = reader("");
        assert!(r.next_token().unwrap().is_none());
    }

    #[test]
    fn test_prompts_in_table_order() {
        let mut r = reader("10\n10\n10\n10\n10\n10\n10\n10\n");
        let mut out = Vec::new();
        let grades = prompt_grades(Term::Sem4.subjects(), &mut r, &mut out).unwrap();

        assert_eq!(grades, vec![10; 8]);
        let text = String::from_utf8(out).unwrap();
        let expected: String = Term::Sem4
            .subjects()
            .iter()
            .map(|s| format!("{}: ", s.name))
            .collect();
        assert_eq!(text, format!("{BANNER}\n{expected}"));
    }

    #[test]
    fn test_letter_grades_accepted() {
        let mut r = reader("A+ A B+ B C+ C D F");
        let mut out = Vec::new();
        let grades = prompt_grades(Term::Sem4.subjects(), &mut r, &mut out).unwrap();
        assert_eq!(grades, vec![10, 9, 8, 7, 6, 5, 4, 0]);
    }

    #[test]
    fn test_malformed_token_names_subject() {
        let mut r = reader("8 x");
        let mut out = Vec::new();
        let err = prompt_grades(Term::Sem3.subjects(), &mut r, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "reading grade for DSA");

        let chain = format!("{:#}", err);
        assert_eq!(chain, "reading grade for DSA: invalid grade 'x'");
    }

    #[test]
    fn test_early_eof() {
        let mut r = reader("8 7 9");
        let mut out = Vec::new();
        let err = prompt_grades(Term::Sem3.subjects(), &mut r, &mut out).unwrap_err();
        assert!(err.to_string().contains("end of input"));
        assert!(err.to_string().contains("Mathematics"));
    }
}
