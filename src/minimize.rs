//! Quine–McCluskey minimization.
//!
//! Minimization runs in two phases:
//!
//! 1. **Prime implicants.** Starting from the minterms of `f`, every
//!    consensus round merges all adjacent pairs of the current generation
//!    into the next one. Cubes of a generation that took part in no merge
//!    are prime. The rounds stop at a fixpoint (no merges).
//! 2. **Cover.** A [`QuineTable`] relates primes (rows) to minterms
//!    (columns). Columns are covered greedily: take the column with the
//!    fewest covering rows, cover it with the row having the most positive
//!    literals, drop every column that row covers, repeat.
//!
//! The greedy cover is the classical hand-calculation heuristic. It is not
//! guaranteed to find a minimum cover.
//!
//! ```
//! use boolfn_rs::minimize::Minimizer;
//! use boolfn_rs::truth_vector::TruthVector;
//!
//! let f: TruthVector = "00010111".parse().unwrap(); // majority
//! let dnf = Minimizer::default().minimize(&f).unwrap();
//! assert_eq!(dnf.len(), 3);
//! assert_eq!(dnf.to_truth_vector(), f);
//! ```
//!
//! # Resource use
//!
//! The number of implicants can grow combinatorially with the arity, so the
//! search is bounded by [`MinimizeConfig::max_cubes`].

use std::collections::HashSet;

use log::{debug, warn};

use crate::bitset::BitSet;
use crate::cube::Cube;
use crate::dnf::Dnf;
use crate::error::{Error, Result};
use crate::truth_vector::TruthVector;

/// Configuration options for [`Minimizer`].
///
/// # Examples
///
/// ```
/// use boolfn_rs::minimize::{MinimizeConfig, Minimizer};
///
/// let minimizer = Minimizer::new(MinimizeConfig {
///     max_cubes: 1 << 10,
///     ..MinimizeConfig::default()
/// });
/// assert_eq!(minimizer.config().max_cubes, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// Upper bound on the number of cubes produced by merging, over all
    /// rounds (default: 65536). Exceeding it fails with
    /// [`Error::BudgetExceeded`].
    pub max_cubes: usize,
    /// Upper bound on consensus rounds (default: unbounded). When reached,
    /// the unmerged candidates are kept as they are: the cover stays exact
    /// but may use larger terms.
    pub max_rounds: Option<usize>,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        Self {
            max_cubes: 1 << 16,
            max_rounds: None,
        }
    }
}

/// Counters describing one minimization.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MinimizeStats {
    /// Consensus rounds run, including the final one without merges.
    pub rounds: usize,
    /// Number of prime implicants found.
    pub primes: usize,
    /// Number of terms in the selected cover.
    pub cover: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: MinimizeConfig,
}

impl Minimizer {
    pub fn new(config: MinimizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizeConfig {
        &self.config
    }

    /// Minimal DNF of `f` (with respect to the greedy cover).
    pub fn minimize(&self, f: &TruthVector) -> Result<Dnf> {
        self.minimize_with_stats(f).map(|(dnf, _)| dnf)
    }

    pub fn minimize_with_stats(&self, f: &TruthVector) -> Result<(Dnf, MinimizeStats)> {
        let arity = f.arity();

        if f.is_zero() {
            debug!("minimize({}): constant 0", f);
            return Ok((Dnf::zero(arity), MinimizeStats::default()));
        }
        if f.is_one() {
            debug!("minimize({}): constant 1", f);
            let stats = MinimizeStats {
                rounds: 0,
                primes: 1,
                cover: 1,
            };
            return Ok((Dnf::one(arity), stats));
        }

        let minterms: Vec<Cube> = f.ones().map(|i| Cube::minterm(i, arity)).collect();
        let (primes, rounds) = self.consensus(minterms.clone())?;
        let num_primes = primes.len();

        let cover = QuineTable::new(primes, minterms).select_cover();
        let stats = MinimizeStats {
            rounds,
            primes: num_primes,
            cover: cover.len(),
        };
        debug!("minimize({}): {:?}", f, stats);
        Ok((Dnf::new(arity, cover), stats))
    }

    /// All prime implicants of `f`, in discovery order.
    pub fn prime_implicants(&self, f: &TruthVector) -> Result<Vec<Cube>> {
        if f.is_zero() {
            return Ok(Vec::new());
        }
        if f.is_one() {
            return Ok(vec![Cube::universe(f.arity())]);
        }
        let minterms = f.ones().map(|i| Cube::minterm(i, f.arity())).collect();
        self.consensus(minterms).map(|(primes, _)| primes)
    }

    /// Runs consensus rounds to a fixpoint. Returns the primes and the number of rounds.
    ///
    /// Each round builds a fresh generation. Survivors of a round are the
    /// current cubes minus the ones that took part in some merge.
    fn consensus(&self, minterms: Vec<Cube>) -> Result<(Vec<Cube>, usize)> {
        let mut primes = Vec::new();
        let mut current = minterms;
        let mut generated = 0;
        let mut rounds = 0;

        while !current.is_empty() {
            if self.config.max_rounds.is_some_and(|max| rounds >= max) {
                warn!(
                    "consensus: round limit {} reached, keeping {} unmerged candidates",
                    rounds,
                    current.len()
                );
                primes.append(&mut current);
                break;
            }
            rounds += 1;

            let (next, survivors) = self.merge_round(&current, &mut generated)?;
            debug!(
                "consensus: round {}: {} candidates, {} merged, {} new primes",
                rounds,
                current.len(),
                next.len(),
                survivors.len()
            );
            primes.extend(survivors);
            current = next;
        }

        Ok((primes, rounds))
    }

    /// One consensus round over `current`.
    ///
    /// Returns the next generation (distinct merge results, in discovery
    /// order) and the cubes of `current` that merged with nothing.
    fn merge_round(&self, current: &[Cube], generated: &mut usize) -> Result<(Vec<Cube>, Vec<Cube>)> {
        let mut next = Vec::new();
        let mut seen = HashSet::new();
        let mut merged: HashSet<&Cube> = HashSet::new();

        for (i, a) in current.iter().enumerate() {
            for b in &current[i + 1..] {
                let Some(c) = a.merge(b) else { continue };
                merged.insert(a);
                merged.insert(b);
                if seen.insert(c.clone()) {
                    next.push(c);
                    *generated += 1;
                    if *generated > self.config.max_cubes {
                        warn!("consensus: cube budget {} exceeded", self.config.max_cubes);
                        return Err(Error::BudgetExceeded {
                            limit: self.config.max_cubes,
                            generated: *generated,
                        });
                    }
                }
            }
        }

        let survivors = current.iter().filter(|c| !merged.contains(c)).cloned().collect();
        Ok((next, survivors))
    }
}

/// The covering table of a minimization: rows are prime implicants,
/// columns are minterms, and cell `(p, m)` is set iff `p ⪯ m`.
///
/// Columns are removed as they get covered, so a table is consumed by
/// [`QuineTable::select_cover`].
#[derive(Debug, Clone)]
pub struct QuineTable {
    rows: Vec<Cube>,
    columns: Vec<Cube>,
    /// Columns covered by each row.
    coverage: Vec<BitSet>,
    /// Columns not yet covered.
    remaining: BitSet,
}

impl QuineTable {
    pub fn new(rows: Vec<Cube>, columns: Vec<Cube>) -> Self {
        let coverage = rows
            .iter()
            .map(|p| {
                let mut covered = BitSet::new(columns.len());
                for (j, m) in columns.iter().enumerate() {
                    if p.precedes(m) {
                        covered.insert(j);
                    }
                }
                covered
            })
            .collect();
        let remaining = BitSet::full(columns.len());
        Self {
            rows,
            columns,
            coverage,
            remaining,
        }
    }

    pub fn rows(&self) -> &[Cube] {
        &self.rows
    }

    pub fn columns(&self) -> &[Cube] {
        &self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> bool {
        self.coverage[row].contains(column)
    }

    /// Indices of the columns still to be covered.
    pub fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.remaining.iter()
    }

    /// Rows covering `column`, in scan order.
    pub fn covering(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows.len()).filter(move |&r| self.coverage[r].contains(column))
    }

    /// Marks every column covered by `row` as done.
    fn take_row(&mut self, row: usize) {
        self.remaining.difference_with(&self.coverage[row]);
    }

    /// Greedily selects rows until every column is covered.
    pub fn select_cover(mut self) -> Vec<Cube> {
        let mut chosen = Vec::new();

        while !self.remaining.is_empty() {
            // Column with the fewest covering rows; `min_by_key` keeps the first on ties.
            let Some((column, count)) = self
                .remaining
                .iter()
                .map(|c| (c, self.covering(c).count()))
                .min_by_key(|&(_, count)| count)
            else {
                break;
            };

            // Row with the most positive literals; the first one wins ties.
            let mut best: Option<usize> = None;
            for r in self.covering(column) {
                if best.map_or(true, |b| self.rows[r].ones_count() > self.rows[b].ones_count()) {
                    best = Some(r);
                }
            }
            let Some(row) = best else {
                // Not reachable when rows are the primes of the columns.
                debug_assert!(false, "column {} is not covered by any row", column);
                self.remaining.remove(column);
                continue;
            };

            debug!(
                "select_cover: column {} ({} rows) -> row {} covering {} columns",
                self.columns[column],
                count,
                self.rows[row],
                self.coverage[row].intersection_len(&self.remaining)
            );
            self.take_row(row);
            chosen.push(row);
        }

        chosen.into_iter().map(|r| self.rows[r].clone()).collect()
    }
}
