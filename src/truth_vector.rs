//! Truth-vector representation of Boolean functions.
//!
//! A Boolean function `f: {0,1}^n → {0,1}` is represented by its truth vector,
//! a sequence of `2^n` values indexed by the input assignments. Row `i`
//! denotes the assignment given by the big-endian binary expansion of `i`
//! over the variables `A, B, C, ...`, so `A` is the most significant bit.
//!
//! ```
//! use boolfn_rs::truth_vector::TruthVector;
//!
//! let xor: TruthVector = "0110".parse().unwrap();
//! assert_eq!(xor.arity(), 2);
//! assert!(xor.get(&[false, true]));
//! assert!(!xor.get(&[true, true]));
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::classify::{classify, PostClasses};
use crate::cnf::Cnf;
use crate::cube::Cube;
use crate::dnf::Dnf;
use crate::error::{Error, Result};
use crate::minimize::Minimizer;
use crate::types::MAX_ARITY;
use crate::utils::{padded_len, parse_bits};
use crate::zhegalkin::Zhegalkin;

/// The truth vector of an `n`-ary Boolean function.
///
/// # Invariants
///
/// - `bits.len() == 2^arity` and `arity >= 1`
/// - Immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthVector {
    bits: Vec<bool>,
    arity: usize,
}

impl TruthVector {
    /// Creates a truth vector from raw bits.
    ///
    /// A length that is not a power of two (or is below 2) is normalized by
    /// left-padding with `false`, so `[true]` becomes `[false, true]` and
    /// `[true, false, true]` becomes `[false, true, false, true]`.
    ///
    /// # Panics
    ///
    /// Panics if the padded length exceeds `2^MAX_ARITY` rows.
    pub fn from_bits(bits: impl Into<Vec<bool>>) -> Self {
        let mut bits = bits.into();
        let len = padded_len(bits.len());
        assert!(len <= 1 << MAX_ARITY, "Arity must be at most {}", MAX_ARITY);
        if len != bits.len() {
            let mut padded = vec![false; len - bits.len()];
            padded.append(&mut bits);
            bits = padded;
        }
        let arity = len.trailing_zeros() as usize;
        assert_eq!(bits.len(), 1 << arity);
        Self { bits, arity }
    }

    /// Tabulates `f` over every row index of an `arity`-ary function.
    ///
    /// The closure receives the row index; use [`Cube::minterm`] or
    /// [`crate::utils::to_binary`] to get at individual variable values.
    pub fn from_fn(arity: usize, f: impl FnMut(usize) -> bool) -> Result<Self> {
        check_arity(arity)?;
        let bits = (0..1usize << arity).map(f).collect();
        Ok(Self { bits, arity })
    }

    /// Reconstructs a function from its number, i.e. the truth vector read
    /// as a big-endian binary literal (`"0110"` is function 6).
    pub fn from_biguint(arity: usize, number: &BigUint) -> Result<Self> {
        check_arity(arity)?;
        let len = 1u64 << arity;
        Self::from_fn(arity, |i| number.bit(len - 1 - i as u64))
    }

    /// The function number: the inverse of [`TruthVector::from_biguint`].
    pub fn to_biguint(&self) -> BigUint {
        let mut number = BigUint::ZERO;
        let len = self.len() as u64;
        for (i, &b) in self.bits.iter().enumerate() {
            if b {
                number.set_bit(len - 1 - i as u64, true);
            }
        }
        number
    }

    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rows, `2^arity`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a truth vector has at least two rows.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The raw rows.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Value on the row with the given index.
    pub fn value_at(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Value on the given assignment (`assignment[0]` is variable `A`).
    ///
    /// # Panics
    ///
    /// Panics if `assignment.len() != self.arity()`.
    pub fn get(&self, assignment: &[bool]) -> bool {
        assert_eq!(assignment.len(), self.arity, "Assignment length must match arity");
        let index = assignment.iter().fold(0, |acc, &b| (acc << 1) | b as usize);
        self.bits[index]
    }

    /// The vector as a `"0"`/`"1"` string.
    pub fn value(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// Number of rows where the function is true.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Check if this is the constant zero function.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| !b)
    }

    /// Check if this is the constant one function.
    pub fn is_one(&self) -> bool {
        self.bits.iter().all(|&b| b)
    }

    /// Indices of the rows where the function is true.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter(|(_, &b)| b).map(|(i, _)| i)
    }

    /// Indices of the rows where the function is false.
    pub fn zeros(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter(|(_, &b)| !b).map(|(i, _)| i)
    }

    /// Hamming distance between two functions of the same arity.
    pub fn distance(&self, other: &TruthVector) -> Result<usize> {
        if self.arity != other.arity {
            return Err(Error::ArityMismatch {
                left: self.arity,
                right: other.arity,
            });
        }
        Ok(self.bits.iter().zip(&other.bits).filter(|(a, b)| a != b).count())
    }

    /// Perfect disjunctive normal form: one minterm per true row.
    pub fn pdnf(&self) -> Dnf {
        Dnf::new(self.arity, self.ones().map(|i| Cube::minterm(i, self.arity)).collect())
    }

    /// Perfect conjunctive normal form: one maxterm per false row.
    pub fn pcnf(&self) -> Cnf {
        Cnf::new(self.arity, self.zeros().map(|i| Cube::minterm(i, self.arity)).collect())
    }

    /// Zhegalkin (algebraic normal form) polynomial.
    pub fn zhegalkin(&self) -> Zhegalkin {
        Zhegalkin::new(self)
    }

    /// Membership in Post's five closed classes.
    pub fn classify(&self) -> PostClasses {
        classify(self)
    }

    /// Minimal DNF with the default [`Minimizer`].
    pub fn minimize(&self) -> Result<Dnf> {
        Minimizer::default().minimize(self)
    }
}

fn check_arity(arity: usize) -> Result<()> {
    if arity == 0 || arity > MAX_ARITY {
        return Err(Error::InvalidArity { arity });
    }
    Ok(())
}

impl FromStr for TruthVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidArity { arity: 0 });
        }
        let bits = parse_bits(s)?;
        check_arity(padded_len(bits.len()).trailing_zeros() as usize)?;
        Ok(Self::from_bits(bits))
    }
}

impl fmt::Display for TruthVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
