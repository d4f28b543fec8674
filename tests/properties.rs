//! Whole-crate properties checked over complete families of small functions.

use boolfn_rs::classify::PostClasses;
use boolfn_rs::cube::Cube;
use boolfn_rs::minimize::Minimizer;
use boolfn_rs::post::is_complete;
use boolfn_rs::truth_vector::TruthVector;
use boolfn_rs::zhegalkin::Zhegalkin;

use test_log::test;

/// Function number `number` of arity `n`, row 0 being the lowest bit.
fn function(n: usize, number: u64) -> TruthVector {
    TruthVector::from_fn(n, |i| (number >> i) & 1 == 1).unwrap()
}

/// Every function of arity 1..=3, plus a strided sample of arity 4.
fn family() -> impl Iterator<Item = TruthVector> {
    let small = (1..=3).flat_map(|n| (0..1u64 << (1 << n)).map(move |k| function(n, k)));
    let sampled = (0..1u64 << 16).step_by(97).map(|k| function(4, k));
    small.chain(sampled)
}

/// Two minterms of `f` at Hamming distance one.
fn has_adjacent_minterms(f: &TruthVector) -> bool {
    let minterms: Vec<Cube> = f.ones().map(|i| Cube::minterm(i, f.arity())).collect();
    minterms
        .iter()
        .enumerate()
        .any(|(i, a)| minterms[i + 1..].iter().any(|b| a.can_merge(b)))
}

// ─── Minimization ──────────────────────────────────────────────────────────────

#[test]
fn minimal_dnf_is_sound() {
    let minimizer = Minimizer::default();
    for f in family() {
        let dnf = minimizer.minimize(&f).unwrap();
        assert_eq!(dnf.to_truth_vector(), f, "minimal DNF {} of {}", dnf, f);
    }
}

#[test]
fn minimal_dnf_never_expands() {
    let minimizer = Minimizer::default();
    for f in family() {
        let pdnf = f.pdnf();
        let dnf = minimizer.minimize(&f).unwrap();
        assert!(dnf.len() <= pdnf.len().max(1), "f = {}", f);
        if !f.is_one() && !has_adjacent_minterms(&f) {
            assert!(dnf.same_terms(&pdnf), "f = {}", f);
        }
        if has_adjacent_minterms(&f) {
            assert!(dnf.len() < pdnf.len(), "f = {}", f);
        }
    }
}

#[test]
fn minimization_is_idempotent() {
    let minimizer = Minimizer::default();
    for f in family() {
        let first = minimizer.minimize(&f).unwrap();
        let second = minimizer.minimize(&first.to_truth_vector()).unwrap();
        assert!(first.same_terms(&second), "f = {}: {} vs {}", f, first, second);
    }
}

#[test]
fn cover_uses_only_prime_implicants() {
    let minimizer = Minimizer::default();
    for f in family().filter(|f| !f.is_zero() && !f.is_one()) {
        let primes = minimizer.prime_implicants(&f).unwrap();
        let dnf = minimizer.minimize(&f).unwrap();
        for cube in dnf.cubes() {
            assert!(primes.contains(cube), "{} is not prime in {}", cube, f);
        }
        // No prime can be merged with another one.
        for (i, a) in primes.iter().enumerate() {
            assert!(primes[i + 1..].iter().all(|b| !a.can_merge(b)), "f = {}", f);
        }
    }
}

#[test]
fn constants_short_circuit() {
    let minimizer = Minimizer::default();
    for s in ["00", "11", "0000", "11111111"] {
        let f: TruthVector = s.parse().unwrap();
        let (dnf, stats) = minimizer.minimize_with_stats(&f).unwrap();
        assert_eq!(stats.rounds, 0);
        let expected = if f.is_one() { "1" } else { "0" };
        assert_eq!(dnf.to_string(), expected);
    }
}

// ─── Classification ────────────────────────────────────────────────────────────

#[test]
fn classification_examples() {
    let classes = |s: &str| s.parse::<TruthVector>().unwrap().classify();

    let and = classes("0001");
    assert_eq!(
        and,
        PostClasses {
            t0: true,
            t1: true,
            ts: false,
            tm: true,
            tl: false
        }
    );

    let not = classes("10");
    assert_eq!(
        not,
        PostClasses {
            t0: false,
            t1: false,
            ts: true,
            tm: false,
            tl: true
        }
    );

    let xor = classes("0110");
    assert_eq!(
        xor,
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
fn xor_pdnf_equals_minimal_dnf() {
    let xor: TruthVector = "0110".parse().unwrap();
    let pdnf = xor.pdnf();
    let dnf = xor.minimize().unwrap();
    assert!(pdnf.same_terms(&dnf));
    assert_eq!(pdnf.to_string(), "!A·B ∨ A·!B");
    assert_eq!(dnf.to_string(), "!A·B ∨ A·!B");
}

#[test]
fn linear_iff_affine_zhegalkin() {
    // An affine function is constant or an XOR of variables (with an optional 1).
    for n in 1..=3 {
        let mut affine = 0;
        for k in 0..1u64 << (1 << n) {
            let f = function(n, k);
            if f.classify().tl {
                affine += 1;
                assert!(Zhegalkin::new(&f).degree() <= 1);
            }
        }
        assert_eq!(affine, 1 << (n + 1));
    }
}

#[test]
fn self_dual_count() {
    // There are 2^(2^(n-1)) self-dual functions of arity n.
    for n in 1..=3 {
        let count = (0..1u64 << (1 << n)).filter(|&k| function(n, k).classify().ts).count();
        assert_eq!(count, 1 << (1 << (n - 1)));
    }
}

#[test]
fn monotone_count() {
    // Dedekind numbers: 3, 6, 20 monotone functions of arity 1, 2, 3.
    for (n, expected) in [(1, 3), (2, 6), (3, 20)] {
        let count = (0..1u64 << (1 << n)).filter(|&k| function(n, k).classify().tm).count();
        assert_eq!(count, expected);
    }
}

// ─── Completeness ──────────────────────────────────────────────────────────────

#[test]
fn sheffer_functions_of_arity_two() {
    // Only NAND and NOR are complete on their own.
    let complete: Vec<String> = (0..16)
        .map(|k| function(2, k))
        .filter(|f| is_complete(&[f.classify()]))
        .map(|f| f.value())
        .collect();
    assert_eq!(complete, vec!["1000", "1110"]);
}

#[test]
fn and_or_is_not_complete() {
    let and: TruthVector = "0001".parse().unwrap();
    let or: TruthVector = "0111".parse().unwrap();
    assert!(!is_complete(&[and.classify(), or.classify()]));
}
