//! Rendering of computed summaries.
//!
//! Supports the plain console format and pretty JSON.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::catalog::{Subject, Term};
use crate::compute::Summary;
use crate::grade::letter_grade;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// One subject's line in a JSON report.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    pub subject: &'static str,
    pub credit: u32,
    pub grade: i64,
}

/// Full result for one term, as emitted with `--format json`.
#[derive(Debug, Serialize)]
pub struct TermReport {
    pub term: Term,
    pub entries: Vec<EntryReport>,
    #[serde(flatten)]
    pub summary: Summary,
    pub letter: String,
}

impl TermReport {
    pub fn new(term: Term, grades: &[i64], summary: Summary) -> Self {
        let entries = term
            .subjects()
            .iter()
            .zip(grades)
            .map(|(s, &grade)| EntryReport {
                subject: s.name,
                credit: s.credit,
                grade,
            })
            .collect();

        Self {
            term,
            entries,
            summary,
            letter: letter_grade(summary.sgpa),
        }
    }
}

/// Cumulative result across several terms.
#[derive(Debug, Serialize)]
pub struct CumulativeReport {
    pub terms: Vec<TermReport>,
    pub total_credits: u32,
    pub cgpa: f64,
    pub letter: String,
}

/// Writes the two-line credit/SGPA summary, preceded by a blank line.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Credits: {}", summary.total_credits)?;
    writeln!(out, "SGPA: {:.2}", summary.sgpa)?;
    Ok(())
}

pub fn write_cgpa<W: Write>(out: &mut W, cumulative: &Summary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Credits: {}", cumulative.total_credits)?;
    writeln!(out, "CGPA: {:.2}", cumulative.sgpa)?;
    Ok(())
}

/// Writes any serializable report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    writeln!(out)?;
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Lists a subject table with its credit total.
pub fn write_subjects<W: Write>(out: &mut W, table: &[Subject]) -> Result<()> {
    for subject in table {
        writeln!(out, "{} ({} credits)", subject.name, subject.credit)?;
    }
    let total: u32 = table.iter().map(|s| s.credit).sum();
    writeln!(out, "Total Credits: {}", total)?;
    Ok(())
}
