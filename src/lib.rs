//! Password strength meter library
//!
//! Classifies a password as `weak`, `medium`, `strong` or `very strong` from
//! five criteria: minimum length of 8, an ASCII uppercase letter, an ASCII
//! lowercase letter, a digit and a special character from
//! `!@#$%^&*()_+-=[]{}|;:,.<>?`.
//!
//! Classification is total: input that is not text, empty or only whitespace
//! is `weak`, never an error.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced async sender with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_STRENGTH_DEBOUNCE_MS`: Delay before the async sender evaluates
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_meter::{classify, evaluate_password_strength, Candidate, StrengthLabel};
//! use secrecy::SecretString;
//!
//! assert_eq!(classify("Password1"), StrengthLabel::Strong);
//! assert_eq!(classify(Candidate::from_any(&42)), StrengthLabel::Weak);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Strength: {}", evaluation.label());
//! println!("Reasons: {:?}", evaluation.reasons);
//! ```

// Internal modules
mod candidate;
mod classifier;
mod criteria;
mod types;

#[cfg(feature = "async")]
mod config;

// Public API
pub use candidate::Candidate;
pub use classifier::{classify, evaluate_password_strength};
pub use criteria::{MIN_LENGTH, SPECIAL_CHARACTERS, evaluate_criteria};
pub use types::{CriteriaSet, Criterion, ParseLabelError, StrengthEvaluation, StrengthLabel};

#[cfg(feature = "async")]
pub use classifier::evaluate_password_strength_tx;

#[cfg(feature = "async")]
pub use config::{ConfigError, DEBOUNCE_ENV, DEFAULT_DEBOUNCE, debounce_from_env};
