//! Strength labels, criteria and evaluation results.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordinal strength of a password, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub const ALL: [StrengthLabel; 4] = [
        StrengthLabel::Weak,
        StrengthLabel::Medium,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    /// Maps the number of satisfied criteria to a label.
    ///
    /// | count | label |
    /// |---|---|
    /// | 0, 1 | weak |
    /// | 2, 3 | medium |
    /// | 4 | strong |
    /// | 5 | very strong |
    pub fn from_satisfied(count: usize) -> Self {
        match count {
            0 | 1 => StrengthLabel::Weak,
            2 | 3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// External form of the label, as shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0:?}")]
pub struct ParseLabelError(pub String);

impl FromStr for StrengthLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthLabel::Weak),
            "medium" => Ok(StrengthLabel::Medium),
            "strong" => Ok(StrengthLabel::Strong),
            "very strong" | "very-strong" => Ok(StrengthLabel::VeryStrong),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

/// One of the five checks a password is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Runs this criterion's predicate against `password`.
    pub fn is_met(self, password: &str) -> bool {
        crate::criteria::check_for(self)(password)
    }

    /// Short description used in feedback reasons.
    pub fn requirement(self) -> &'static str {
        match self {
            Criterion::MinLength => "at least 8 characters",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digit => "numbers",
            Criterion::Special => "special characters",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of satisfied (or missing) criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CriteriaSet(u8);

impl CriteriaSet {
    pub const fn empty() -> Self {
        CriteriaSet(0)
    }

    pub fn all() -> Self {
        Criterion::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, criterion: Criterion) {
        self.0 |= criterion.bit();
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        self.0 & criterion.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_superset(&self, other: &CriteriaSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Criteria in the set, in `Criterion::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = Criterion> + '_ {
        Criterion::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Criteria not in the set.
    pub fn missing(&self) -> CriteriaSet {
        CriteriaSet(!self.0 & CriteriaSet::all().0)
    }
}

impl FromIterator<Criterion> for CriteriaSet {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut set = CriteriaSet::empty();
        for criterion in iter {
            set.insert(criterion);
        }
        set
    }
}

/// Detailed result of a password evaluation.
///
/// `reasons` explains what is missing, suitable for display next to the
/// strength meter. The label is derived from `satisfied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub satisfied: CriteriaSet,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn satisfied_count(&self) -> usize {
        self.satisfied.len()
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_satisfied(self.satisfied_count())
    }
}
