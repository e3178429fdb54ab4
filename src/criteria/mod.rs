//! Password strength criteria
//!
//! Each criterion is an independent predicate over the untrimmed password.
//! Character classes are plain ASCII code-point ranges, never locale-aware.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, meets_min_length};
pub use special::{SPECIAL_CHARACTERS, has_special};
pub use variety::{has_digit, has_lowercase, has_uppercase};

use crate::types::{CriteriaSet, Criterion};

/// Predicate signature shared by every criterion.
pub type CriterionCheck = fn(&str) -> bool;

/// Evaluation table: every entry runs for every password.
pub const CRITERIA: [(Criterion, CriterionCheck); 5] = [
    (Criterion::MinLength, meets_min_length),
    (Criterion::Uppercase, has_uppercase),
    (Criterion::Lowercase, has_lowercase),
    (Criterion::Digit, has_digit),
    (Criterion::Special, has_special),
];

/// Returns the predicate backing `criterion`.
pub fn check_for(criterion: Criterion) -> CriterionCheck {
    match criterion {
        Criterion::MinLength => meets_min_length,
        Criterion::Uppercase => has_uppercase,
        Criterion::Lowercase => has_lowercase,
        Criterion::Digit => has_digit,
        Criterion::Special => has_special,
    }
}

/// Evaluates all criteria against `password` and collects the satisfied ones.
pub fn evaluate_criteria(password: &str) -> CriteriaSet {
    evaluate_with(&CRITERIA, password)
}

pub(crate) fn evaluate_with(checks: &[(Criterion, CriterionCheck)], password: &str) -> CriteriaSet {
    let mut satisfied = CriteriaSet::empty();
    for (criterion, check) in checks {
        if check(password) {
            satisfied.insert(*criterion);
        }
    }
    satisfied
}
