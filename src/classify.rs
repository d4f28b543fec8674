//! Classification into Post's five closed classes.
//!
//! - **T0**: `f(0…0) = 0`
//! - **T1**: `f(1…1) = 1`
//! - **Ts** (self-dual): `f(x) = !f(!x)` for every `x`
//! - **Tm** (monotone): flipping any input from 0 to 1 never turns `f` from 1 to 0
//! - **Tl** (linear/affine): the Zhegalkin polynomial has no monomial of degree above 1
//!
//! Every check is a pure function of the truth vector.

use std::fmt;

use log::debug;

use crate::truth_vector::TruthVector;
use crate::zhegalkin::Zhegalkin;

/// One of Post's five maximal closed classes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PostClass {
    T0,
    T1,
    Ts,
    Tm,
    Tl,
}

impl PostClass {
    /// All classes, in table order.
    pub const ALL: [PostClass; 5] = [PostClass::T0, PostClass::T1, PostClass::Ts, PostClass::Tm, PostClass::Tl];

    pub fn name(self) -> &'static str {
        match self {
            PostClass::T0 => "T0",
            PostClass::T1 => "T1",
            PostClass::Ts => "Ts",
            PostClass::Tm => "Tm",
            PostClass::Tl => "Tl",
        }
    }
}

impl fmt::Display for PostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Membership of one function in each of the five classes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct PostClasses {
    pub t0: bool,
    pub t1: bool,
    pub ts: bool,
    pub tm: bool,
    pub tl: bool,
}

impl PostClasses {
    pub fn contains(&self, class: PostClass) -> bool {
        match class {
            PostClass::T0 => self.t0,
            PostClass::T1 => self.t1,
            PostClass::Ts => self.ts,
            PostClass::Tm => self.tm,
            PostClass::Tl => self.tl,
        }
    }

    /// Row of the Post table, in [`PostClass::ALL`] order.
    pub fn as_row(&self) -> [bool; 5] {
        PostClass::ALL.map(|c| self.contains(c))
    }
}

/// Computes class membership for `f`.
pub fn classify(f: &TruthVector) -> PostClasses {
    let classes = PostClasses {
        t0: preserves_zero(f),
        t1: preserves_one(f),
        ts: is_self_dual(f),
        tm: is_monotone(f),
        tl: is_linear(f),
    };
    debug!("classify({}) = {:?}", f, classes);
    classes
}

pub fn preserves_zero(f: &TruthVector) -> bool {
    !f.value_at(0)
}

pub fn preserves_one(f: &TruthVector) -> bool {
    f.value_at(f.len() - 1)
}

/// `f(i) != f(2^n - 1 - i)` for every row. Only the second half is scanned
/// since the relation is symmetric.
pub fn is_self_dual(f: &TruthVector) -> bool {
    let last = f.len() - 1;
    (f.len() / 2..f.len()).all(|i| f.value_at(i) != f.value_at(last - i))
}

/// No row `i` with `f(i) = 1` has a superset row `j` (`i & j == i`) with `f(j) = 0`.
///
/// The submask order is the transitive closure of single-bit flips, so it is
/// enough to compare each row against the rows one bit above it.
pub fn is_monotone(f: &TruthVector) -> bool {
    let n = f.arity();
    f.ones().all(|i| {
        (0..n)
            .map(|bit| 1 << bit)
            .filter(|mask| i & mask == 0)
            .all(|mask| f.value_at(i | mask))
    })
}

pub fn is_linear(f: &TruthVector) -> bool {
    Zhegalkin::new(f).is_affine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_submask;

    use test_log::test;

    fn classes(s: &str) -> PostClasses {
        classify(&s.parse().unwrap())
    }

    /// Monotonicity straight from the definition, over every submask pair.
    fn is_monotone_naive(f: &TruthVector) -> bool {
        (0..f.len()).all(|i| {
            (i + 1..f.len())
                .filter(|&j| is_submask(i, j))
                .all(|j| !(f.value_at(i) && !f.value_at(j)))
        })
    }

    #[test]
    fn test_and() {
        let c = classes("0001");
        assert_eq!(
            c,
            PostClasses {
                t0: true,
                t1: true,
                ts: false,
                tm: true,
                tl: false
            }
        );
    }

    #[test]
    fn test_not() {
        let c = classes("10");
        assert_eq!(
            c,
            PostClasses {
                t0: false,
                t1: false,
                ts: true,
                tm: false,
                tl: true
            }
        );
    }

    #[test]
    fn test_xor() {
        let c = classes("0110");
        assert_eq!(
            c,
            PostClasses {
                t0: true,
                t1: false,
                ts: false,
                tm: false,
                tl: true
            }
        );
    }

    #[test]
    fn test_nand_outside_everything() {
        let c = classes("1110");
        assert_eq!(c.as_row(), [false; 5]);
    }

    #[test]
    fn test_majority_is_self_dual_and_monotone() {
        // maj(A, B, C)
        let c = classes("00010111");
        assert!(c.ts);
        assert!(c.tm);
        assert!(c.t0);
        assert!(c.t1);
        assert!(!c.tl);
    }

    #[test]
    fn test_constants() {
        let zero = classes("00");
        assert_eq!(zero.as_row(), [true, false, false, true, true]);
        let one = classes("11");
        assert_eq!(one.as_row(), [false, true, false, true, true]);
    }

    #[test]
    fn test_monotone_matches_definition() {
        for n in 1..=3 {
            for number in 0u32..(1 << (1 << n)) {
                let f = TruthVector::from_fn(n, |i| (number >> i) & 1 == 1).unwrap();
                assert_eq!(is_monotone(&f), is_monotone_naive(&f), "f = {}", f);
            }
        }
    }

    #[test]
    fn test_class_names() {
        let names: Vec<String> = PostClass::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["T0", "T1", "Ts", "Tm", "Tl"]);
    }
}
