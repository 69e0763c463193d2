//! Errors raised while assembling a data meter

/// Failures the meter itself can produce
///
/// Errors from the wrapped collaborators are never converted into this type;
/// they reach the caller exactly as the collaborator returned them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeterError {
    /// No bandwidth estimator was supplied
    #[error("data meter requires a bandwidth estimator")]
    MissingEstimator,

    /// No transfer observer was supplied
    #[error("data meter requires a transfer observer")]
    MissingObserver,
}
