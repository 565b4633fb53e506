// Host-side tests for the deterministic harmonic allocator.

mod common;

use common::core::constants::{FULL_TURN, LEGACY_PHASE3_STEP};
use common::core::harmonics::*;

fn is_permutation(n: u32, step: u32) -> bool {
    let mut seen = vec![false; n as usize];
    for c in 0..n {
        let r = ((c * step) % n) as usize;
        if seen[r] {
            return false;
        }
        seen[r] = true;
    }
    seen.iter().all(|s| *s)
}

#[test]
fn gcd_basic_values() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(7, 5), 1);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(gcd(9, 0), 9);
}

#[test]
fn coprime_step_spreads_every_residue() {
    for n in 2..=64u32 {
        let step = pick_coprime_step(n, &[]);
        assert_eq!(gcd(step, n), 1, "step {step} not coprime to {n}");
        assert!(is_permutation(n, step), "step {step} does not permute 0..{n}");
    }
}

#[test]
fn avoided_step_is_not_reused_above_three() {
    for n in 4..=64u32 {
        let first = pick_coprime_step(n, &[]);
        let second = pick_coprime_step(n, &[first]);
        assert_ne!(first, second, "n={n} returned {first} twice");
        assert_eq!(gcd(second, n), 1);
        assert!(is_permutation(n, second));
    }
}

#[test]
fn tiny_groups_use_unit_step() {
    assert_eq!(pick_coprime_step(0, &[]), 1);
    assert_eq!(pick_coprime_step(1, &[]), 1);
    assert_eq!(pick_coprime_step(2, &[]), 1);
    assert_eq!(pick_coprime_step(2, &[1]), 1);
}

#[test]
fn five_curves_pick_two_then_three() {
    assert_eq!(pick_coprime_step(5, &[]), 2);
    assert_eq!(pick_coprime_step(5, &[2]), 3);
    let alloc = HarmonicAllocator::new(8, 5, true);
    assert_eq!(alloc.steps(), (2, 3));
}

#[test]
fn fallback_scan_finds_last_coprime() {
    // 6: preferences reduce to 1, 5, 1, 5, 1, 5, 3, 2 -> 5, then nothing but 1
    assert_eq!(pick_coprime_step(6, &[]), 5);
    assert_eq!(pick_coprime_step(6, &[5]), 1);
}

#[test]
fn phase_hash_is_pure_and_in_unit_range() {
    for base in 1..=30u32 {
        for n in 1..=20u32 {
            for c in 0..n {
                for k in 1..=3u32 {
                    let a = phase_hash(base, n, c, k);
                    let b = phase_hash(base, n, c, k);
                    assert_eq!(a.to_bits(), b.to_bits());
                    assert!((0.0..1.0).contains(&a));
                }
            }
        }
    }
}

#[test]
fn phase_hash_matches_reference_values() {
    assert_eq!(
        phase_hash(8, 5, 2, 1).to_bits(),
        (2_591_596_960u32 as f64 / 4_294_967_296.0).to_bits()
    );
    assert_eq!(
        phase_hash(3, 8, 0, 1).to_bits(),
        (687_960_160u32 as f64 / 4_294_967_296.0).to_bits()
    );
}

#[test]
fn shared_frequencies_keep_all_curves_in_sync() {
    let alloc = HarmonicAllocator::new(4, 6, false);
    for c in 0..6 {
        let h = alloc.curve(c);
        assert_eq!((h.h1, h.h2, h.h3), (4, 8, 16));
        assert_eq!(h.phase1, 0.0);
        assert_eq!(h.phase2, 0.0);
        assert!((h.group_phase - c as f64 / 6.0 * FULL_TURN).abs() < 1e-12);
        assert!((h.phase3_term - c as f64 * LEGACY_PHASE3_STEP).abs() < 1e-12);
    }
}

#[test]
fn individual_frequencies_detune_and_spread() {
    let n = 7;
    let base = 5;
    let alloc = HarmonicAllocator::new(base, n, true);
    let (step2, step3) = alloc.steps();
    let mut h2_offsets = Vec::new();
    let mut h3_offsets = Vec::new();
    for c in 0..n {
        let h = alloc.curve(c);
        assert_eq!(h.h1, base + c);
        assert_eq!(h.h2, 2 * base + (c * step2) % n);
        assert_eq!(h.h3, 4 * base + (c * step3) % n);
        h2_offsets.push(h.h2 - 2 * base);
        h3_offsets.push(h.h3 - 4 * base);
        let expected3 = h.group_phase + phase_hash(base, n, c, 3) * FULL_TURN;
        assert_eq!(h.phase3_term.to_bits(), expected3.to_bits());
    }
    h2_offsets.sort_unstable();
    h3_offsets.sort_unstable();
    assert_eq!(h2_offsets, (0..n).collect::<Vec<_>>());
    assert_eq!(h3_offsets, (0..n).collect::<Vec<_>>());
}

#[test]
fn allocation_is_reproducible() {
    let a = HarmonicAllocator::new(12, 9, true);
    let b = HarmonicAllocator::new(12, 9, true);
    for c in 0..9 {
        assert_eq!(a.curve(c), b.curve(c));
    }
}

#[test]
fn zero_count_is_treated_as_one() {
    let alloc = HarmonicAllocator::new(3, 0, true);
    assert_eq!(alloc.count(), 1);
    let h = alloc.curve(0);
    assert_eq!((h.h1, h.h2, h.h3), (3, 6, 12));
    assert_eq!(h.group_phase, 0.0);
}
