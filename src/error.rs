//! The typed error hierarchy for the pipeline (§7 of the spec).
//!
//! `NoSolution` is not a member of this enum: an infeasible or timed-out
//! solve is a normal terminal outcome, reported as
//! `SolutionReport::NoSolution`, not a failure exit. Everything in
//! `CoreError` is a reason the pipeline could not produce a report at all.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub locator: String,
    pub message: String,
}

impl Violation {
    pub fn new(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Violation {
            locator: locator.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid instance: {} violation(s)", .0.len())]
    InvalidInstance(Vec<Violation>),

    #[error("solver error: {0}")]
    SolverError(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// The `{ error, traceback? }` payload described in §6, for callers that need
/// to render a `CoreError` as the external error contract.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    pub traceback: Option<String>,
}

impl From<&CoreError> for ErrorPayload {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::InvalidInstance(violations) => ErrorPayload {
                error: violations
                    .first()
                    .map(|v| format!("{}: {}", v.locator, v.message))
                    .unwrap_or_else(|| "invalid instance".to_string()),
                traceback: Some(
                    violations
                        .iter()
                        .map(|v| format!("{}: {}", v.locator, v.message))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
            },
            CoreError::SolverError(msg) => ErrorPayload {
                error: msg.clone(),
                traceback: None,
            },
            CoreError::Internal(err) => ErrorPayload {
                error: err.to_string(),
                traceback: Some(format!("{err:?}")),
            },
        }
    }
}
