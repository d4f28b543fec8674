//! Error types for Boolean function construction and analysis.
//!
//! Every failure that can be caused by caller input is reported through
//! [`Error`]. Broken internal invariants are still assertions.

use thiserror::Error;

/// Errors produced at the API boundary of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Arity is below 1 or above [`MAX_ARITY`][crate::types::MAX_ARITY].
    #[error("invalid arity {arity}: expected a value in 1..={max}", max = crate::types::MAX_ARITY)]
    InvalidArity {
        /// The offending arity.
        arity: usize,
    },

    /// Two functions (or cubes) of different arity were combined.
    #[error("arity mismatch: {left} vs {right}")]
    ArityMismatch {
        /// Arity of the left operand.
        left: usize,
        /// Arity of the right operand.
        right: usize,
    },

    /// A binary expansion was requested wider than the native integer width.
    #[error("binary expansion of width {width} exceeds {max} bits")]
    OutOfRange {
        /// Requested width in bits.
        width: usize,
        /// Largest supported width.
        max: usize,
    },

    /// A bit string contained something other than `'0'` or `'1'`.
    #[error("ill-formed input: unexpected {found:?} at position {position}")]
    IllFormedInput {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The minimizer generated more cubes than its budget allows.
    #[error("cube budget exceeded: generated {generated} cubes, limit is {limit}")]
    BudgetExceeded {
        /// Configured limit.
        limit: usize,
        /// Number of cubes alive when the limit was hit.
        generated: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_display_invalid_arity() {
        let e = Error::InvalidArity { arity: 0 };
        assert_eq!(e.to_string(), "invalid arity 0: expected a value in 1..=20");
    }

    #[test]
    fn test_display_ill_formed() {
        let e = Error::IllFormedInput { position: 2, found: 'x' };
        assert_eq!(e.to_string(), "ill-formed input: unexpected 'x' at position 2");
    }

    #[test]
    fn test_display_budget() {
        let e = Error::BudgetExceeded { limit: 10, generated: 11 };
        assert!(e.to_string().contains("limit is 10"));
    }
}
