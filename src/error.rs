//! Error types shared by the engine, goal book and report layer

use thiserror::Error;

/// Errors produced by planner operations
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Input that cannot produce a meaningful result (negative, non-finite,
    /// empty goal set, zero step, ...)
    #[error("invalid argument: {field} - {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    /// A user-submitted goal failed the creation rules
    #[error("goal rejected: {0}")]
    GoalRejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        PlannerError::InvalidArgument {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Reject NaN and infinities
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlannerError::invalid(field, format!("must be finite, got {}", value)))
    }
}

/// Reject negative or non-finite values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(PlannerError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}
