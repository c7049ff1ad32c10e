//! Ranking error types.

/// Errors raised while resolving or running a ranking strategy.
///
/// None of these are retried. An invalid journey fails the whole call,
/// because the aggregation pass is global and dropping one journey would
/// change every other journey's score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The algorithm name matches no registered strategy
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A journey violates the selected strategy's precondition
    #[error("invalid journey at index {index}: {reason}")]
    InvalidJourney { index: usize, reason: &'static str },

    /// Ranking was requested before a strategy was bound
    #[error("no ranking algorithm selected")]
    NoAlgorithmSelected,
}

impl RankError {
    /// Returns true if the caller can fix the request and try again.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RankError::UnknownAlgorithm(_) | RankError::InvalidJourney { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RankError::UnknownAlgorithm("bogus".into());
        assert_eq!(err.to_string(), "unknown algorithm: \"bogus\"");

        let err = RankError::InvalidJourney {
            index: 2,
            reason: "journey has no locations",
        };
        assert_eq!(
            err.to_string(),
            "invalid journey at index 2: journey has no locations"
        );

        let err = RankError::NoAlgorithmSelected;
        assert_eq!(err.to_string(), "no ranking algorithm selected");
    }

    #[test]
    fn caller_errors() {
        assert!(RankError::UnknownAlgorithm("x".into()).is_caller_error());
        assert!(
            RankError::InvalidJourney {
                index: 0,
                reason: "r"
            }
            .is_caller_error()
        );
        assert!(!RankError::NoAlgorithmSelected.is_caller_error());
    }
}
