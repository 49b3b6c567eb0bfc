//! Error types for polynomial operations.

use thiserror::Error;

/// Errors produced by polynomial operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A term sequence is not in strictly decreasing power order.
    #[error("malformed polynomial: power {prev} is followed by power {next}")]
    Malformed {
        /// Power at the earlier storage position.
        prev: u32,
        /// The following power, which fails to decrease.
        next: u32,
    },

    /// Evaluation was attempted on a polynomial with no terms.
    #[error("cannot evaluate a polynomial with no terms")]
    Empty,
}
