//! # boolfn-rs: Boolean functions in Rust
//!
//! **`boolfn-rs`** works with Boolean functions given by their truth vectors:
//! it classifies them into Post's closed classes, decides functional
//! completeness, builds Zhegalkin polynomials and perfect normal forms, and
//! minimizes DNFs with the Quine–McCluskey method.
//!
//! ## Conventions
//!
//! - A function of arity `n` is a [`TruthVector`][crate::truth_vector::TruthVector] of `2^n` rows.
//! - Row `i` is the big-endian binary expansion of `i`: variable `A` is the most significant bit.
//! - Variables are named from the fixed alphabet `A..Z`; arity is capped at [`types::MAX_ARITY`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolfn_rs::post::is_complete;
//! use boolfn_rs::truth_vector::TruthVector;
//!
//! // 1. Parse a truth vector: XOR of A and B
//! let xor: TruthVector = "0110".parse().unwrap();
//!
//! // 2. Classify it
//! let classes = xor.classify();
//! assert!(classes.t0 && classes.tl);
//! assert!(!classes.t1 && !classes.tm && !classes.ts);
//!
//! // 3. Normal forms
//! assert_eq!(xor.pdnf().to_string(), "!A·B ∨ A·!B");
//! assert_eq!(xor.zhegalkin().to_string(), "A ⊕ B");
//!
//! // 4. Minimize
//! let or: TruthVector = "0111".parse().unwrap();
//! assert_eq!(or.minimize().unwrap().to_string(), "B ∨ A");
//!
//! // 5. Post's criterion: NAND alone is complete
//! let nand: TruthVector = "1110".parse().unwrap();
//! assert!(is_complete(&[nand.classify()]));
//! ```
//!
//! ## Core Components
//!
//! - **[`truth_vector`]**: the function representation.
//! - **[`cube`]**: ternary implicants.
//! - **[`classify`]**: Post classes T0, T1, Ts, Tm, Tl.
//! - **[`minimize`]**: prime implicants and the greedy covering table.
//! - **[`post`]**: completeness checking and the Post table.

pub mod bitset;
pub mod classify;
pub mod cnf;
pub mod cube;
pub mod dnf;
pub mod error;
pub mod minimize;
pub mod post;
pub mod truth_vector;
pub mod types;
pub mod utils;
pub mod zhegalkin;

pub use error::{Error, Result};
