//! Error types for the probability-rs library.

use thiserror::Error;

/// The error type for the probability-rs library.
///
/// The combinator formulas are total over in-range operands, so the
/// only failure anywhere in the crate is a value escaping the closed
/// interval [0, 1].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProbabilityError {
    /// Error when a value outside [0, 1] is supplied or produced.
    #[error("Invalid probability: {value} (must be in range [0, 1])")]
    InvalidProbability {
        /// The offending value
        value: f64,
    },
}

/// A specialized `Result` type for probability operations.
pub type Result<T> = std::result::Result<T, ProbabilityError>;

impl ProbabilityError {
    /// Create an error for an out-of-range probability value.
    ///
    /// # Example
    /// ```
    /// use probability_rs::error::ProbabilityError;
    ///
    /// let error = ProbabilityError::invalid_probability(1.5);
    /// assert!(error.to_string().contains("1.5"));
    /// ```
    pub fn invalid_probability(value: f64) -> Self {
        Self::InvalidProbability { value }
    }
}
