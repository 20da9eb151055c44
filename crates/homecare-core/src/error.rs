//! Error Types

use thiserror::Error;

use crate::config::ConfigViolation;
use crate::intake::{NETWORK_FAILURE_MESSAGE, RELAY_FALLBACK_MESSAGE};

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Configuration errors.
///
/// Only raised by verification passes (tests, `homecare-server verify`),
/// never by the rendered page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more invariants do not hold
    #[error("Invalid site configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    /// A boolean variable held something other than `true`/`false`
    #[error("Configuration error: {var} must be `true` or `false`, got `{value}`")]
    InvalidFlag { var: &'static str, value: String },
}

impl ConfigError {
    /// Violations carried by this error, if any
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::InvalidFlag { .. } => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Intake submission errors.
///
/// Both variants end up in the same `Error` state on the page; the split only
/// matters for which message the visitor sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// No response was received from the relay
    #[error("Network error: {0}")]
    Network(String),

    /// The relay answered with a non-success status
    #[error("Relay rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl IntakeError {
    /// Message shown under the intake form
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.into(),
            Self::Rejected { message, .. } if message.trim().is_empty() => {
                RELAY_FALLBACK_MESSAGE.into()
            }
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}
