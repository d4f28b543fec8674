//! Ternary cubes (implicants).
//!
//! A [`Cube`] fixes some variables to `true`/`false` and leaves the rest
//! [`Trit::Unset`]. A cube with no unset position is a minterm and names
//! exactly one row of a truth vector.
//!
//! Equality and hashing are structural over the whole trit sequence, which
//! the consensus rounds of the minimizer rely on for de-duplication.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::{Var, MAX_ARITY};

/// A tri-state position of a cube.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Trit {
    /// The variable must be false.
    False,
    /// The variable must be true.
    True,
    /// Don't care.
    Unset,
}

impl Trit {
    /// `Some(value)` for determined positions.
    pub fn value(self) -> Option<bool> {
        match self {
            Trit::False => Some(false),
            Trit::True => Some(true),
            Trit::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != Trit::Unset
    }
}

impl From<bool> for Trit {
    fn from(value: bool) -> Self {
        if value {
            Trit::True
        } else {
            Trit::False
        }
    }
}

/// A cube over `n` variables; position `k` belongs to variable `k` (`A` = 0).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cube(Vec<Trit>);

impl Cube {
    pub fn from_trits(trits: impl Into<Vec<Trit>>) -> Self {
        Cube(trits.into())
    }

    /// The minterm for row `index` of an `arity`-ary function.
    pub fn minterm(index: usize, arity: usize) -> Self {
        Cube(
            Var::all(arity)
                .map(|v| Trit::from(index & v.mask(arity) != 0))
                .collect(),
        )
    }

    /// The cube with every position unset (constant true).
    pub fn universe(arity: usize) -> Self {
        Cube(vec![Trit::Unset; arity])
    }

    /// Number of positions (the arity).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn trits(&self) -> &[Trit] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Trit {
        self.0[position]
    }

    /// Number of positions determined `true`.
    pub fn ones_count(&self) -> usize {
        self.0.iter().filter(|&&t| t == Trit::True).count()
    }

    /// Number of determined positions (literals in the rendered conjunction).
    pub fn literal_count(&self) -> usize {
        self.0.iter().filter(|t| t.is_set()).count()
    }

    pub fn unset_count(&self) -> usize {
        self.len() - self.literal_count()
    }

    pub fn is_minterm(&self) -> bool {
        self.0.iter().all(|t| t.is_set())
    }

    /// `self ⪯ other`: every position determined in `self` holds the same
    /// value in `other`. Unset positions of `self` are wildcards.
    ///
    /// # Panics
    ///
    /// Panics if the cubes differ in length.
    pub fn precedes(&self, other: &Cube) -> bool {
        assert_eq!(self.len(), other.len(), "Cube lengths must match");
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| a == Trit::Unset || a == b)
    }

    /// Does this cube cover row `index` of a function of arity `self.len()`?
    pub fn contains_index(&self, index: usize) -> bool {
        let arity = self.len();
        Var::all(arity).zip(&self.0).all(|(v, t)| match t.value() {
            None => true,
            Some(value) => (index & v.mask(arity) != 0) == value,
        })
    }

    /// The single position where two mergeable cubes differ.
    ///
    /// Cubes are adjacent iff they have identical unset positions and differ
    /// in exactly one determined position.
    fn adjacent_position(&self, other: &Cube) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        let mut position = None;
        for (i, (&a, &b)) in self.0.iter().zip(&other.0).enumerate() {
            if a == b {
                continue;
            }
            if a == Trit::Unset || b == Trit::Unset || position.is_some() {
                return None;
            }
            position = Some(i);
        }
        position
    }

    pub fn can_merge(&self, other: &Cube) -> bool {
        self.adjacent_position(other).is_some()
    }

    /// Merges two adjacent cubes, unsetting the position where they differ.
    ///
    /// Returns `None` when [`Cube::can_merge`] does not hold.
    pub fn merge(&self, other: &Cube) -> Option<Cube> {
        let position = self.adjacent_position(other)?;
        let mut trits = self.0.clone();
        trits[position] = Trit::Unset;
        Some(Cube(trits))
    }
}

impl FromStr for Cube {
    type Err = Error;

    /// Parses `"1-0"` notation: `1` true, `0` false, `-` unset.
    ///
    /// The empty string is rejected, as a cube needs at least one position.
    fn from_str(s: &str) -> Result<Self> {
        let arity = s.chars().count();
        if arity == 0 || arity > MAX_ARITY {
            return Err(Error::InvalidArity { arity });
        }
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(Trit::False),
                '1' => Ok(Trit::True),
                '-' => Ok(Trit::Unset),
                found => Err(Error::IllFormedInput { position, found }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Cube)
    }
}

/// Renders the cube as a literal conjunction, e.g. `A·!C`; the universe cube is `1`.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, t) in self.0.iter().enumerate() {
            let Some(value) = t.value() else { continue };
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if !value {
                f.write_str("!")?;
            }
            write!(f, "{}", Var::new(i))?;
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
