//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown pipeline stage: {0}")]
    UnknownStage(String),

    #[error("Iteration budget must be at least 1")]
    EmptyIterationBudget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::UnknownStage("review".to_string()).to_string(),
            "Unknown pipeline stage: review"
        );
        assert_eq!(
            DomainError::EmptyIterationBudget.to_string(),
            "Iteration budget must be at least 1"
        );
    }
}
