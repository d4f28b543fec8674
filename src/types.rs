//! Variables and the fixed variable alphabet.
//!
//! Variables are identified by their position in [`ALPHABET`]. Position 0
//! (`A`) is the most significant bit of a truth-vector row index.
use std::fmt;

/// The fixed, ordered variable alphabet used when rendering formulas.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V',
    'W', 'X', 'Y', 'Z',
];

/// Largest supported arity.
///
/// Truth vectors grow as `2^n` and the prime-implicant search can blow up
/// combinatorially well before that, so inputs are capped here.
pub const MAX_ARITY: usize = 20;

/// A variable, identified by its 0-based position in [`ALPHABET`].
///
/// # Invariants
///
/// - `index < MAX_ARITY`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a variable at the given alphabet position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_ARITY`.
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_ARITY, "Variable index must be < {}", MAX_ARITY);
        Var(index as u32)
    }

    /// Returns the 0-based position of the variable.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the alphabet letter naming this variable.
    pub fn name(self) -> char {
        ALPHABET[self.index()]
    }

    /// Bit mask selecting this variable inside a row index of a function with `arity` inputs.
    pub fn mask(self, arity: usize) -> usize {
        debug_assert!(self.index() < arity);
        1 << (arity - 1 - self.index())
    }

    /// Iterates over the first `arity` variables in alphabet order.
    pub fn all(arity: usize) -> impl Iterator<Item = Var> {
        (0..arity).map(Var::new)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> Self {
        var.index()
    }
}
