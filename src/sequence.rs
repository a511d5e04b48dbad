use std::fmt;

use serde::Serialize;

use crate::levenshtein;

/// Input to the fixed suite: either text compared per `char`, or an array of
/// integers compared per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Sequence {
    Text(String),
    Numbers(Vec<i64>),
}

/// A single comparable element. Chars and integers never compare equal,
/// so a text/number pair costs one edit per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Char(char),
    Number(i64),
}

impl Sequence {
    pub fn text(s: &str) -> Self {
        Sequence::Text(s.to_string())
    }

    pub fn numbers(values: &[i64]) -> Self {
        Sequence::Numbers(values.to_vec())
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Text(s) => s.chars().count(),
            Sequence::Numbers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn elements(&self) -> Vec<Element> {
        match self {
            Sequence::Text(s) => s.chars().map(Element::Char).collect(),
            Sequence::Numbers(v) => v.iter().copied().map(Element::Number).collect(),
        }
    }

    /// Tabulated distance to `other`.
    pub fn distance_to(&self, other: &Sequence) -> usize {
        match (self, other) {
            (Sequence::Text(a), Sequence::Text(b)) => {
                let a: Vec<char> = a.chars().collect();
                let b: Vec<char> = b.chars().collect();
                levenshtein::levenshtein_distance(&a, &b)
            }
            (Sequence::Numbers(a), Sequence::Numbers(b)) => levenshtein::levenshtein_distance(a, b),
            _ => levenshtein::levenshtein_distance(&self.elements(), &other.elements()),
        }
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence::text(s)
    }
}

impl From<&[i64]> for Sequence {
    fn from(values: &[i64]) -> Self {
        Sequence::numbers(values)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sequence::Text(s) => write!(f, "{}", s),
            Sequence::Numbers(v) => {
                write!(f, "[")?;
                for (idx, value) in v.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}
