use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::levenshtein;
use crate::sequence::Sequence;

pub const REFERENCE_WORD: &str = "kitten";
pub const COMPARISON_WORDS: [&str; 5] = ["smitten", "mitten", "kitty", "fitting", "written"];

/// One fixed input pair and the distance it must produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    pub a: Sequence,
    pub b: Sequence,
    pub expected: usize,
}

impl Case {
    pub fn new(a: impl Into<Sequence>, b: impl Into<Sequence>, expected: usize) -> Self {
        Case { a: a.into(), b: b.into(), expected }
    }

    /// Runs the tabulated evaluator and reports the case only when it disagrees.
    pub fn check(&self) -> Option<Mismatch> {
        let actual = self.a.distance_to(&self.b);
        if actual == self.expected {
            return None;
        }
        Some(Mismatch {
            a: self.a.clone(),
            b: self.b.clone(),
            expected: self.expected,
            actual,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub a: Sequence,
    pub b: Sequence,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "a: {}", self.a)?;
        writeln!(f, "b: {}", self.b)?;
        writeln!(f, "expected: {}", self.expected)?;
        write!(f, "distance: {}", self.actual)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub reference: String,
    pub word: String,
    pub distance: usize,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Distance between {} and {}: {}", self.reference, self.word, self.distance)
    }
}

pub fn standard_cases() -> Vec<Case> {
    let n = |values: &[i64]| Sequence::numbers(values);
    vec![
        Case::new("", "", 0),
        Case::new("1", "1", 0),
        Case::new("1", "2", 1),
        Case::new("12", "12", 0),
        Case::new("123", "12", 1),
        Case::new("1234", "1", 3),
        Case::new("1234", "1233", 1),
        Case::new(n(&[1, 2, 4, 8]), n(&[1, 3, 4, 16]), 2),
        Case::new("", "12345", 5),
        Case::new(n(&[5, 6, 7, 7]), n(&[1, 2, 3, 4]), 4),
        Case::new(n(&[1, 2, 3, 4, 5, 6]), n(&[1, 2, 3, 4, 5]), 1),
        Case::new(n(&[1, 3, 5, 7, 9]), n(&[1, 2, 3, 4, 5]), 4),
        Case::new(n(&[1, 2, 3]), n(&[]), 3),
        Case::new("kitten", "mittens", 2),
    ]
}

/// Checks every case; never stops at the first failure.
pub fn run_cases(cases: &[Case]) -> Vec<Mismatch> {
    cases.iter().filter_map(Case::check).collect()
}

/// Demonstration pass, not correctness-bearing.
pub fn compare_against(reference: &str, words: &[&str]) -> Vec<Comparison> {
    let reference_chars: Vec<char> = reference.chars().collect();
    words
        .iter()
        .map(|word| {
            let word_chars: Vec<char> = word.chars().collect();
            Comparison {
                reference: reference.to_string(),
                word: word.to_string(),
                distance: levenshtein::levenshtein_distance(&reference_chars, &word_chars),
            }
        })
        .collect()
}

/// Outcome of one full harness run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarnessReport {
    pub total_cases: usize,
    pub mismatches: Vec<Mismatch>,
    pub comparisons: Vec<Comparison>,
}

impl HarnessReport {
    pub fn run() -> Self {
        Self::from_cases(&standard_cases())
    }

    pub fn from_cases(cases: &[Case]) -> Self {
        HarnessReport {
            total_cases: cases.len(),
            mismatches: run_cases(cases),
            comparisons: compare_against(REFERENCE_WORD, &COMPARISON_WORDS),
        }
    }

    /// Mismatch blocks, each followed by an empty line, then one line per comparison.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for mismatch in &self.mismatches {
            writeln!(out, "{}", mismatch)?;
            writeln!(out)?;
        }
        for comparison in &self.comparisons {
            writeln!(out, "{}", comparison)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn into_result(self) -> Result<Self> {
        if self.mismatches.is_empty() {
            Ok(self)
        } else {
            Err(Error::Mismatches { count: self.mismatches.len(), total: self.total_cases })
        }
    }
}
