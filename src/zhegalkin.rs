//! Zhegalkin polynomials (algebraic normal form).
//!
//! Every Boolean function has a unique representation as an XOR of
//! conjunctions of variables. Coefficient `i` belongs to the monomial made of
//! the variables whose bit is set in `i` (with the same big-endian variable
//! order as truth-vector rows), so coefficient 0 is the constant term.
//!
//! Classically the coefficients are read off a triangular difference table
//! whose row 0 is the truth vector and whose row `k + 1` is the pairwise XOR of
//! row `k`; coefficient `k` is the first entry of row `k`. The same values come
//! out of the in-place butterfly (Möbius) transform used here in `O(n·2^n)`.

use std::fmt;

use crate::truth_vector::TruthVector;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Zhegalkin {
    arity: usize,
    coefficients: Vec<bool>,
}

impl Zhegalkin {
    pub fn new(f: &TruthVector) -> Self {
        let mut coefficients = f.bits().to_vec();
        let len = coefficients.len();
        let mut step = 1;
        while step < len {
            for i in 0..len {
                if i & step != 0 {
                    coefficients[i] ^= coefficients[i ^ step];
                }
            }
            step <<= 1;
        }
        Self {
            arity: f.arity(),
            coefficients,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Coefficients indexed by monomial mask.
    pub fn coefficients(&self) -> &[bool] {
        &self.coefficients
    }

    /// Masks of the monomials with a nonzero coefficient.
    pub fn monomials(&self) -> impl Iterator<Item = usize> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(mask, _)| mask)
    }

    /// Highest monomial degree, 0 for constants.
    pub fn degree(&self) -> usize {
        self.monomials().map(|m| m.count_ones() as usize).max().unwrap_or(0)
    }

    /// No monomial has more than one variable.
    pub fn is_affine(&self) -> bool {
        self.monomials().all(|m| m.count_ones() <= 1)
    }

    /// Variables of the monomial `mask`, in alphabet order.
    fn variables(&self, mask: usize) -> impl Iterator<Item = Var> + '_ {
        Var::all(self.arity).filter(move |v| mask & v.mask(self.arity) != 0)
    }
}

/// Renders the polynomial as `1 ⊕ A ⊕ A·B`: terms by degree, then alphabetically.
impl fmt::Display for Zhegalkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<Vec<Var>> = self.monomials().map(|m| self.variables(m).collect()).collect();
        if terms.is_empty() {
            return f.write_str("0");
        }
        terms.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ⊕ ")?;
            }
            if term.is_empty() {
                f.write_str("1")?;
            }
            for (j, var) in term.iter().enumerate() {
                if j > 0 {
                    f.write_str("·")?;
                }
                write!(f, "{}", var)?;
            }
        }
        Ok(())
    }
}
