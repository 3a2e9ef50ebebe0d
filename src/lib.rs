//! # probability-rs
//!
//! A small algebra over the probabilities of independent,
//! non-mutually-exclusive events.
//!
//! ## Core Concept: Combining Independent Events
//!
//! A [`Probability`] is a scalar constrained to the closed interval
//! [0, 1]. The [`LogicalOps`] combinators compose probabilities under
//! the independence assumption: AND is the joint probability `a * b`,
//! OR follows inclusion-exclusion, and everything else derives from
//! those two plus the complement.
//!
//! ```rust
//! use probability_rs::{LogicalOps, Probability};
//!
//! let rain = Probability::new(0.5).unwrap();
//! let wind = Probability::new(0.25).unwrap();
//!
//! // Joint probability of two independent events
//! let both = rain.and(wind).unwrap();
//! assert_eq!(both.value(), 0.125);
//!
//! // Operator sugar over the same formulas
//! let either = rain | wind;
//! assert_eq!(either.value(), 0.625);
//! ```
//!
//! The algebra models independent events, not classical logic:
//! `p.or(p.complement())` evaluates to `1 - p * (1 - p)`, which is
//! only 1 at the interval endpoints.
//!
//! ## Features
//!
//! - **Validated range**: values outside [0, 1] are rejected at every
//!   entry point, never clamped
//! - **Combinator algebra**: AND, OR, XOR, set-subtraction, NOT, plus
//!   derived NAND and NOR
//! - **Operator overloads**: `&`, `|`, `^`, `-`, `!` and their
//!   compound-assignment forms

pub mod error;
pub mod operations;
pub mod probability;

pub use error::{ProbabilityError, Result};
pub use probability::Probability;

pub use operations::LogicalOps;
