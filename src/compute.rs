//! Credit-weighted grade averaging.
//!
//! Nothing in this module performs I/O.

use anyhow::{Result, ensure};
use serde::Serialize;

use crate::catalog::Subject;

/// Running totals for one pass over a subject table.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub total_credits: u32,
    pub total_grade_points: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one subject's contribution.
    pub fn add(&mut self, subject: &Subject, grade: i64) {
        self.total_grade_points += grade as f64 * f64::from(subject.credit);
        self.total_credits += subject.credit;
    }

    pub fn finish(self) -> Summary {
        Summary {
            total_credits: self.total_credits,
            total_grade_points: self.total_grade_points,
            sgpa: weighted_mean(self.total_grade_points, self.total_credits),
        }
    }
}

/// Result of averaging one term (or several, for a cumulative figure).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_credits: u32,
    pub total_grade_points: f64,
    pub sgpa: f64,
}

fn weighted_mean(points: f64, credits: u32) -> f64 {
    if credits == 0 {
        0.0
    } else {
        points / credits as f64
    }
}

/// Computes totals and the SGPA for `grades` entered against `table`.
///
/// # Errors
///
/// Returns an error if `grades` and `table` differ in length.
pub fn compute(table: &[Subject], grades: &[i64]) -> Result<Summary> {
    ensure!(
        table.len() == grades.len(),
        "expected {} grades, got {}",
        table.len(),
        grades.len()
    );

    let mut acc = Accumulator::new();
    for (subject, &grade) in table.iter().zip(grades) {
        acc.add(subject, grade);
    }

    Ok(acc.finish())
}

/// Combines per-term summaries into a cumulative average over all their credits.
pub fn cumulative(summaries: &[Summary]) -> Summary {
    let total_credits = summaries.iter().map(|s| s.total_credits).sum();
    let total_grade_points = summaries.iter().map(|s| s.total_grade_points).sum();

    Summary {
        total_credits,
        total_grade_points,
        sgpa: weighted_mean(total_grade_points, total_credits),
    }
}
