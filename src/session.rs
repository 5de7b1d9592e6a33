//! One interactive run: prompt, compute, report.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::catalog::Term;
use crate::compute::{Summary, compute, cumulative};
use crate::grade::letter_grade;
use crate::input::{TokenReader, prompt_grades};
use crate::output::{
    CumulativeReport, Format, TermReport, write_cgpa, write_json, write_summary,
};

/// Collects grades for `term` and returns them with their summary.
fn collect_term<R: BufRead, W: Write>(
    term: Term,
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<(Vec<i64>, Summary)> {
    let grades = prompt_grades(term.subjects(), reader, out)?;
    let summary = compute(term.subjects(), &grades)?;

    info!(
        term = term.label(),
        total_credits = summary.total_credits,
        sgpa = summary.sgpa,
        letter = %letter_grade(summary.sgpa),
        "Term computed"
    );

    Ok((grades, summary))
}

/// Runs the SGPA prompt for a single term and prints its result.
#[tracing::instrument(skip(input, out))]
pub fn run_sgpa<R: BufRead, W: Write>(
    term: Term,
    format: Format,
    input: R,
    out: &mut W,
) -> Result<Summary> {
    let mut reader = TokenReader::new(input);
    let (grades, summary) = collect_term(term, &mut reader, out)?;

    match format {
        Format::Text => write_summary(out, &summary)?,
        Format::Json => write_json(out, &TermReport::new(term, &grades, summary))?,
    }

    Ok(summary)
}

/// Prompts each term in turn, then prints the cumulative average over all of them.
#[tracing::instrument(skip(input, out))]
pub fn run_cgpa<R: BufRead, W: Write>(
    terms: &[Term],
    format: Format,
    input: R,
    out: &mut W,
) -> Result<Summary> {
    let mut reader = TokenReader::new(input);
    let mut reports = Vec::with_capacity(terms.len());

    for (i, &term) in terms.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", term.label())?;

        let (grades, summary) = collect_term(term, &mut reader, out)?;
        if format == Format::Text {
            write_summary(out, &summary)?;
        }
        reports.push(TermReport::new(term, &grades, summary));
    }

    let summaries: Vec<Summary> = reports.iter().map(|r| r.summary).collect();
    let total = cumulative(&summaries);
    info!(
        terms = terms.len(),
        total_credits = total.total_credits,
        cgpa = total.sgpa,
        "Cumulative computed"
    );

    match format {
        Format::Text => write_cgpa(out, &total)?,
        Format::Json => write_json(
            out,
            &CumulativeReport {
                terms: reports,
                total_credits: total.total_credits,
                cgpa: total.sgpa,
                letter: letter_grade(total.sgpa),
            },
        )?,
    }

    Ok(total)
}
