//! Errors raised by the scoring domain.

use thiserror::Error;

/// Errors returned when a scoring request cannot be evaluated.
///
/// Sparse or malformed statistics never produce an error; they are absorbed
/// by the per-factor fallbacks. The only failure is a request for a mode
/// with no weight table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The optimisation mode is not one of the known literals.
    #[error("unknown optimisation mode '{mode}' (expected balanced, irating_push or safety_recovery)")]
    InvalidMode {
        /// Literal supplied by the caller.
        mode: String,
    },
}
