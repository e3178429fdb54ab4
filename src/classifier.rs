//! Password strength classifier - guard, criteria aggregation and labeling.

#[cfg(feature = "async")]
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::candidate::Candidate;
use crate::criteria::{MIN_LENGTH, evaluate_criteria};
use crate::types::{CriteriaSet, Criterion, StrengthEvaluation, StrengthLabel};

/// Classifies a password into one of four strength labels.
///
/// Never fails: non-text, empty and whitespace-only input is `Weak`.
///
/// ```rust
/// use pwd_strength_meter::{classify, StrengthLabel};
///
/// assert_eq!(classify("Password1!"), StrengthLabel::VeryStrong);
/// assert_eq!(classify(None::<&str>), StrengthLabel::Weak);
/// ```
pub fn classify<'a>(input: impl Into<Candidate<'a>>) -> StrengthLabel {
    let Some(password) = input.into().usable_text() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by guard");
        return StrengthLabel::Weak;
    };

    let satisfied = evaluate_criteria(password);
    let label = StrengthLabel::from_satisfied(satisfied.len());

    #[cfg(feature = "tracing")]
    tracing::debug!("password classified: {} ({} criteria)", label, satisfied.len());

    label
}

/// Evaluates password strength and returns the satisfied criteria together
/// with the reasons the password falls short.
///
/// The evaluation's label always equals [`classify`] for the same input.
pub fn evaluate_password_strength<'a>(input: impl Into<Candidate<'a>>) -> StrengthEvaluation {
    let candidate = input.into();
    let Some(password) = candidate.usable_text() else {
        let reason = match candidate {
            Candidate::NotText => "Password is not text",
            Candidate::Text(_) => "Password is empty",
        };
        return StrengthEvaluation {
            satisfied: CriteriaSet::empty(),
            reasons: vec![reason.to_string()],
        };
    };

    let satisfied = evaluate_criteria(password);
    let missing = satisfied.missing();
    let mut reasons = Vec::new();

    if missing.contains(Criterion::MinLength) {
        reasons.push(format!("Password must be at least {} characters", MIN_LENGTH));
    }

    let missing_classes: Vec<_> = missing
        .iter()
        .filter(|c| *c != Criterion::MinLength)
        .map(Criterion::requirement)
        .collect();
    if !missing_classes.is_empty() {
        reasons.push(format!("Missing: {}", missing_classes.join(", ")));
    }

    StrengthEvaluation { satisfied, reasons }
}

/// Async version for live feedback: waits for the debounce delay, then sends
/// the evaluation via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, which is
/// how a caller drops evaluations made stale by further typing.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(crate::config::debounce()) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
