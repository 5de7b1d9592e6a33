//! Built-in subject tables for each supported term.

use clap::ValueEnum;
use serde::Serialize;

/// A single subject and the credit weight it carries in the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub credit: u32,
}

impl Subject {
    pub const fn new(name: &'static str, credit: u32) -> Self {
        Self { name, credit }
    }
}

static SEM3: &[Subject] = &[
    Subject::new("Computer Organization", 3),
    Subject::new("DSA", 3),
    Subject::new("Analog and Digital Electronics", 3),
    Subject::new("Mathematics", 2),
    Subject::new("Economics", 3),
    Subject::new("Computer Organization Lab", 2),
    Subject::new("DSA Lab", 2),
    Subject::new("Analog and Digital Electronics Lab", 2),
    Subject::new("Python Lab", 2),
];

static SEM4: &[Subject] = &[
    Subject::new("Discrete Mathematics", 4),
    Subject::new("Computer Architecture", 3),
    Subject::new("Automata", 3),
    Subject::new("DAA", 3),
    Subject::new("Biology", 3),
    Subject::new("EVS", 1),
    Subject::new("DAA Lab", 2),
    Subject::new("Computer Architecture Lab", 2),
];

/// Academic term with a fixed subject table.
///
/// Only terms whose credits are whole numbers are built in.
///
/// - `sem3` → 9 subjects, 22 credits
/// - `sem4` → 8 subjects, 21 credits
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Sem3,
    Sem4,
}

impl Term {
    /// Every built-in term, in academic order.
    pub const ALL: [Term; 2] = [Term::Sem3, Term::Sem4];

    /// Returns the ordered subject table for this term.
    pub fn subjects(&self) -> &'static [Subject] {
        match self {
            Term::Sem3 => SEM3,
            Term::Sem4 => SEM4,
        }
    }

    /// Human-readable heading, e.g. `Semester 3`.
    pub fn label(&self) -> &'static str {
        match self {
            Term::Sem3 => "Semester 3",
            Term::Sem4 => "Semester 4",
        }
    }

    pub fn total_credits(&self) -> u32 {
        self.subjects().iter().map(|s| s.credit).sum()
    }
}
