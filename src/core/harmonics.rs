use super::constants::{
    COPRIME_STEP_PREFERENCE, FULL_TURN, HARMONIC_RATIOS, LEGACY_PHASE3_STEP, PHASE_HASH_SCALE,
    PHASE_MIX_MUL_A, PHASE_MIX_MUL_B, PHASE_SEED_BASE_MUL, PHASE_SEED_COUNT_MUL,
};

/// Harmonic numbers and phase terms for one curve of a group.
///
/// Everything here is derived from `(base_frequency, count, index)` so two
/// allocations with the same inputs are bit-identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveHarmonics {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    /// Even angular spacing of the curve inside its group, `(c / N) * 2π`.
    pub group_phase: f64,
    pub phase1: f64,
    pub phase2: f64,
    /// Complete phase term of the third harmonic (group phase already folded in
    /// when per-curve frequencies are on).
    pub phase3_term: f64,
}

#[inline]
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[inline]
fn qualifies(step: u32, n: u32, avoid: &[u32]) -> bool {
    step > 1 && !avoid.contains(&step) && gcd(step, n) == 1
}

/// Pick a step coprime to `n` so that `(c * step) % n` visits every residue once.
///
/// Tries the preference list (reduced modulo `n`) first, then scans `2..n`.
/// Returns 1 for `n <= 2` or when nothing qualifies.
pub fn pick_coprime_step(n: u32, avoid: &[u32]) -> u32 {
    let n = n.max(1);
    if n <= 2 {
        return 1;
    }
    COPRIME_STEP_PREFERENCE
        .iter()
        .map(|s| s % n)
        .find(|&s| qualifies(s, n, avoid))
        .or_else(|| (2..n).find(|&s| qualifies(s, n, avoid)))
        .unwrap_or(1)
}

/// Deterministic hash of a curve's identity into `[0, 1)`.
pub fn phase_hash(base_frequency: u32, n: u32, c: u32, component: u32) -> f64 {
    let seed = base_frequency
        .wrapping_mul(PHASE_SEED_BASE_MUL)
        .wrapping_add(n.wrapping_mul(PHASE_SEED_COUNT_MUL))
        .wrapping_add(c)
        .wrapping_add(component);
    let mut x = seed;
    x ^= x >> 16;
    x = x.wrapping_mul(PHASE_MIX_MUL_A);
    x ^= x >> 15;
    x = x.wrapping_mul(PHASE_MIX_MUL_B);
    x ^= x >> 16;
    x as f64 / PHASE_HASH_SCALE
}

/// Per-group allocator. The coprime steps are chosen once here, not per curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarmonicAllocator {
    base_frequency: u32,
    count: u32,
    individual: bool,
    step2: u32,
    step3: u32,
}

impl HarmonicAllocator {
    pub fn new(base_frequency: u32, count: u32, individual: bool) -> Self {
        let count = count.max(1);
        let step2 = pick_coprime_step(count, &[]);
        let step3 = pick_coprime_step(count, &[step2]);
        Self {
            base_frequency,
            count,
            individual,
            step2,
            step3,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn steps(&self) -> (u32, u32) {
        (self.step2, self.step3)
    }

    pub fn curve(&self, c: u32) -> CurveHarmonics {
        let n = self.count;
        let base = self.base_frequency;
        let [r1, r2, r3] = HARMONIC_RATIOS;
        let group_phase = (c as f64 / n as f64) * FULL_TURN;

        if !self.individual {
            return CurveHarmonics {
                h1: base * r1,
                h2: base * r2,
                h3: base * r3,
                group_phase,
                phase1: 0.0,
                phase2: 0.0,
                phase3_term: c as f64 * LEGACY_PHASE3_STEP,
            };
        }

        let spread = |step: u32| ((c as u64 * step as u64) % n as u64) as u32;
        let phase = |component: u32| phase_hash(base, n, c, component) * FULL_TURN;
        CurveHarmonics {
            h1: base * r1 + c,
            h2: base * r2 + spread(self.step2),
            h3: base * r3 + spread(self.step3),
            group_phase,
            phase1: phase(1),
            phase2: phase(2),
            phase3_term: group_phase + phase(3),
        }
    }
}
