//! Disjunctive normal forms.
//!
//! A [`Dnf`] is an ordered disjunction of cubes. It is both the perfect DNF of
//! a truth vector (one minterm per true row) and the result of minimization.

use std::collections::HashSet;
use std::fmt;

use crate::cube::Cube;
use crate::truth_vector::TruthVector;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Dnf {
    arity: usize,
    cubes: Vec<Cube>,
}

impl Dnf {
    /// # Panics
    ///
    /// Panics if a cube's length differs from `arity`.
    pub fn new(arity: usize, cubes: Vec<Cube>) -> Self {
        for cube in &cubes {
            assert_eq!(cube.len(), arity, "Cube length must match arity");
        }
        Self { arity, cubes }
    }

    /// The empty disjunction (constant false).
    pub fn zero(arity: usize) -> Self {
        Self::new(arity, Vec::new())
    }

    /// The single universe cube (constant true).
    pub fn one(arity: usize) -> Self {
        Self::new(arity, vec![Cube::universe(arity)])
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Total number of literals over all terms.
    pub fn literal_count(&self) -> usize {
        self.cubes.iter().map(Cube::literal_count).sum()
    }

    /// Value on row `index`.
    pub fn evaluate(&self, index: usize) -> bool {
        self.cubes.iter().any(|c| c.contains_index(index))
    }

    pub fn to_truth_vector(&self) -> TruthVector {
        TruthVector::from_bits((0..1usize << self.arity).map(|i| self.evaluate(i)).collect::<Vec<_>>())
    }

    /// Same arity and the same set of terms, regardless of order.
    pub fn same_terms(&self, other: &Dnf) -> bool {
        if self.arity != other.arity {
            return false;
        }
        let lhs: HashSet<&Cube> = self.cubes.iter().collect();
        let rhs: HashSet<&Cube> = other.cubes.iter().collect();
        lhs == rhs
    }
}

/// Renders `!A·B ∨ A·!B`; no terms render as `0`.
impl fmt::Display for Dnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cubes.is_empty() {
            return f.write_str("0");
        }
        for (i, cube) in self.cubes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∨ ")?;
            }
            write!(f, "{}", cube)?;
        }
        Ok(())
    }
}
