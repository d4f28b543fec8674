//! Conjunctive normal forms.
//!
//! A [`Cnf`] stores each clause as the cube of the row it excludes, so the
//! perfect CNF of a truth vector holds one maxterm per false row. A clause
//! literal is positive where the row bit is 0 and negated where it is 1.

use std::fmt;

use crate::cube::Cube;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Cnf {
    arity: usize,
    clauses: Vec<Cube>,
}

impl Cnf {
    /// # Panics
    ///
    /// Panics if a clause's length differs from `arity`.
    pub fn new(arity: usize, clauses: Vec<Cube>) -> Self {
        for clause in &clauses {
            assert_eq!(clause.len(), arity, "Clause length must match arity");
        }
        Self { arity, clauses }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Excluded cubes, one per clause.
    pub fn clauses(&self) -> &[Cube] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Value on row `index`: true unless some clause excludes it.
    pub fn evaluate(&self, index: usize) -> bool {
        !self.clauses.iter().any(|c| c.contains_index(index))
    }
}

/// Renders `(A ∨ B)·(A ∨ !B)`; no clauses render as `1`.
impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str("1");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str("·")?;
            }
            f.write_str("(")?;
            let mut first = true;
            for (k, trit) in clause.trits().iter().enumerate() {
                let Some(value) = trit.value() else { continue };
                if !first {
                    f.write_str(" ∨ ")?;
                }
                first = false;
                if value {
                    f.write_str("!")?;
                }
                write!(f, "{}", Var::new(k))?;
            }
            if first {
                // Excludes every row.
                f.write_str("0")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::truth_vector::TruthVector;

    #[test]
    fn test_pcnf_of_and() {
        let f: TruthVector = "0001".parse().unwrap();
        let cnf = f.pcnf();
        assert_eq!(cnf.len(), 3);
        assert_eq!(cnf.to_string(), "(A ∨ B)·(A ∨ !B)·(!A ∨ B)");
    }

    #[test]
    fn test_pcnf_of_constants() {
        let one: TruthVector = "11".parse().unwrap();
        assert_eq!(one.pcnf().to_string(), "1");
        let zero: TruthVector = "00".parse().unwrap();
        assert_eq!(zero.pcnf().to_string(), "(A)·(!A)");
    }

    #[test]
    fn test_evaluate_reproduces_function() {
        let f: TruthVector = "01101001".parse().unwrap();
        let cnf = f.pcnf();
        for i in 0..f.len() {
            assert_eq!(cnf.evaluate(i), f.value_at(i));
        }
    }

    #[test]
    fn test_universe_clause() {
        let cnf = Cnf::new(2, vec![Cube::universe(2)]);
        assert_eq!(cnf.to_string(), "(0)");
        assert!(!cnf.evaluate(3));
    }
}
