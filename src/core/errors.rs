/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("The base quantum must be a positive number of work units.")
    )]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchedulerError::InvalidConfiguration("base quantum must be positive".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: base quantum must be positive"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = SchedulerError::InvalidConfiguration("bad".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("invalid_configuration"));
        let back: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
