use crate::error::Result;
use crate::Probability;

/// Trait for logical combinators over independent event probabilities.
///
/// Every binary combinator assumes its operands describe independent,
/// non-mutually-exclusive events. Operands are read by value and never
/// mutated; each result is re-validated against [0, 1] through the
/// same constructor that guards external input, so a formula output
/// escaping the interval surfaces as an error instead of a clamped
/// value.
pub trait LogicalOps: Sized {
    /// Joint probability: both events occur.
    fn and(self, other: Self) -> Result<Self>;

    /// Probability at least one event occurs (inclusion-exclusion).
    fn or(self, other: Self) -> Result<Self>;

    /// Probability exactly one of the two events occurs.
    fn xor(self, other: Self) -> Result<Self>;

    /// Probability the first event occurs and the second does not.
    fn difference(self, other: Self) -> Result<Self>;

    /// Complement probability: the event does not occur.
    fn complement(self) -> Result<Self>;

    /// Negated conjunction: not both events occur.
    fn nand(self, other: Self) -> Result<Self>;

    /// Negated disjunction: neither event occurs.
    fn nor(self, other: Self) -> Result<Self>;
}

impl LogicalOps for Probability {
    /// Joint probability of two independent events, `a * b`.
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::{LogicalOps, Probability};
    ///
    /// let rain = Probability::new(0.5).unwrap();
    /// let wind = Probability::new(0.25).unwrap();
    /// assert_eq!(rain.and(wind).unwrap().value(), 0.125);
    /// ```
    fn and(self, other: Self) -> Result<Self> {
        Probability::new(self.value() * other.value())
    }

    /// Probability of at least one event, `a + b - (a AND b)`.
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::{LogicalOps, Probability};
    ///
    /// let rain = Probability::new(0.5).unwrap();
    /// let wind = Probability::new(0.25).unwrap();
    /// assert_eq!(rain.or(wind).unwrap().value(), 0.625);
    /// ```
    fn or(self, other: Self) -> Result<Self> {
        let joint = self.and(other)?;
        Probability::new(self.value() + other.value() - joint.value())
    }

    /// Probability of exactly one event, `a + b - 2 * (a AND b)`.
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::{LogicalOps, Probability};
    ///
    /// let coin = Probability::new(0.5).unwrap();
    /// assert_eq!(coin.xor(coin).unwrap().value(), 0.5);
    /// ```
    fn xor(self, other: Self) -> Result<Self> {
        let joint = self.and(other)?;
        Probability::new(self.value() + other.value() - 2.0 * joint.value())
    }

    /// Probability of the first event without the second,
    /// `a AND (NOT b)`.
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::{LogicalOps, Probability};
    ///
    /// let rain = Probability::new(0.5).unwrap();
    /// let wind = Probability::new(0.25).unwrap();
    /// assert_eq!(rain.difference(wind).unwrap().value(), 0.375);
    /// ```
    fn difference(self, other: Self) -> Result<Self> {
        self.and(other.complement()?)
    }

    /// Complement probability, `1 - a`.
    ///
    /// # Example
    /// ```rust
    /// use probability_rs::{LogicalOps, Probability};
    ///
    /// let rain = Probability::new(0.25).unwrap();
    /// assert_eq!(rain.complement().unwrap().value(), 0.75);
    /// ```
    fn complement(self) -> Result<Self> {
        Probability::new(1.0 - self.value())
    }

    /// Negated conjunction, `NOT (a AND b)`.
    fn nand(self, other: Self) -> Result<Self> {
        self.and(other)?.complement()
    }

    /// Negated disjunction, `NOT (a OR b)`.
    fn nor(self, other: Self) -> Result<Self> {
        self.or(other)?.complement()
    }
}

// Operator sugar over the trait methods. A combinator only fails when
// rounding lands its result an ulp outside [0, 1], which needs both
// operands adjacent to the boundary; the operators treat that as a
// contract violation and panic. Call sites that want the error instead
// should use the LogicalOps methods directly.
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

impl BitAnd for Probability {
    type Output = Probability;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs).expect("AND result in [0, 1]")
    }
}

impl BitOr for Probability {
    type Output = Probability;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs).expect("OR result in [0, 1]")
    }
}

impl BitXor for Probability {
    type Output = Probability;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs).expect("XOR result in [0, 1]")
    }
}

impl Sub for Probability {
    type Output = Probability;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).expect("difference result in [0, 1]")
    }
}

impl Not for Probability {
    type Output = Probability;

    fn not(self) -> Self::Output {
        self.complement().expect("complement result in [0, 1]")
    }
}

// The compound-assignment forms mutate the left operand to the binary
// result. They delegate to the binary impls so the formulas live in
// exactly one place.

impl BitAndAssign for Probability {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Probability {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for Probability {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl SubAssign for Probability {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
