use crate::error::{ProbabilityError, Result};
use std::fmt;

/// The probability of a single independent event.
///
/// A `Probability` wraps a scalar constrained to the closed interval
/// [0, 1]. Values enter through the validating constructor or setter,
/// and the combinators in [`crate::operations`] compose probabilities
/// under the independence assumption. Out-of-range input is rejected,
/// never clamped.
///
/// # Example
/// ```rust
/// use probability_rs::Probability;
///
/// let p = Probability::new(0.25).unwrap();
/// assert_eq!(p.value(), 0.25);
///
/// assert!(Probability::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Probability {
    value: f64,
}

impl Probability {
    /// The impossible event.
    pub const ZERO: Self = Self { value: 0.0 };

    /// The certain event.
    pub const ONE: Self = Self { value: 1.0 };

    /// Creates a probability from a scalar in [0, 1].
    ///
    /// Construction is all-or-nothing: on failure no value exists.
    /// Non-finite input falls outside the interval and is rejected.
    ///
    /// # Errors
    /// Returns [`ProbabilityError::InvalidProbability`] if `value` is
    /// outside [0, 1].
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::Probability;
    ///
    /// let heads = Probability::new(0.5).unwrap();
    /// assert_eq!(heads.value(), 0.5);
    /// ```
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ProbabilityError::invalid_probability(value));
        }
        Ok(Self { value })
    }

    /// Returns the underlying scalar.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the underlying scalar with a new value in [0, 1].
    ///
    /// On failure the previous value is left untouched.
    ///
    /// # Errors
    /// Returns [`ProbabilityError::InvalidProbability`] if `value` is
    /// outside [0, 1].
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::Probability;
    ///
    /// let mut p = Probability::new(0.5).unwrap();
    /// assert!(p.set_value(1.5).is_err());
    /// assert_eq!(p.value(), 0.5);
    /// ```
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_new_accepts_unit_interval() {
        for value in [0.0, 0.25, 0.5, 0.999, 1.0] {
            let p = Probability::new(value).unwrap();
            assert_eq!(p.value(), value);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for value in [1.1, -0.1, 1e19, -1e19] {
            let result = Probability::new(value);
            assert_eq!(
                result,
                Err(ProbabilityError::InvalidProbability { value }),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Probability::new(f64::NAN).is_err());
        assert!(Probability::new(f64::INFINITY).is_err());
        assert!(Probability::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_default_is_zero() {
        let p = Probability::default();
        assert_eq!(p.value(), 0.0);
        assert_eq!(p, Probability::ZERO);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_interval_endpoints() {
        assert_eq!(Probability::ZERO.value(), 0.0);
        assert_eq!(Probability::ONE.value(), 1.0);
        assert!(Probability::ZERO < Probability::ONE);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_set_value_replaces() {
        let mut p = Probability::default();
        p.set_value(0.6).unwrap();
        assert_eq!(p.value(), 0.6);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_set_value_failure_preserves_prior() {
        let mut p = Probability::new(0.6).unwrap();
        for value in [1.5, -0.5, f64::NAN] {
            assert!(p.set_value(value).is_err());
            assert_eq!(p.value(), 0.6, "prior value lost after rejecting {value}");
        }
    }

    #[test]
    fn test_ordering() {
        let low = Probability::new(0.2).unwrap();
        let high = Probability::new(0.8).unwrap();
        assert!(low < high);
        assert!(high <= Probability::ONE);
    }

    #[test]
    fn test_display_is_bare_scalar() {
        assert_eq!(Probability::new(0.25).unwrap().to_string(), "0.25");
        assert_eq!(Probability::default().to_string(), "0");
        assert_eq!(Probability::ONE.to_string(), "1");
    }

    #[test]
    fn test_display_forwards_precision() {
        let p = Probability::new(0.5).unwrap();
        assert_eq!(format!("{p:.3}"), "0.500");
    }
}
