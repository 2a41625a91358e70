use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Seed derivation: target name → 32-bit seed
// ---------------------------------------------------------------------------

/// Derive a reproducible 32-bit seed from a target name.
///
/// Accumulates `hash = hash*31 + char_code` over the string with 32-bit
/// signed wrapping, then takes the absolute value. The same name yields the
/// same seed on every run and every platform; distinct names almost always
/// yield distinct seeds.
pub fn seed_from_name(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in name.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

// ---------------------------------------------------------------------------
// Lcg – deterministic linear-congruential generator
// ---------------------------------------------------------------------------

const LCG_A: u64 = 9301;
const LCG_C: u64 = 49297;
const LCG_M: u64 = 233280;

/// Minimum uniform variate fed into `ln` by the Gaussian sampler.
/// `next()` can return exactly 0.0 for some states; `ln(0)` is -inf.
const MIN_UNIFORM: f64 = 1e-12;

/// Deterministic linear-congruential generator.
///
/// Each generation run owns its own `Lcg`; state is never shared across
/// invocations, so concurrent runs cannot interleave draws.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Seed directly from a 32-bit integer.
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed as u64 }
    }

    /// Seed from a target name via [`seed_from_name`].
    pub fn from_name(name: &str) -> Self {
        Lcg::new(seed_from_name(name))
    }

    /// Next uniform variate in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(LCG_A) + LCG_C) % LCG_M;
        self.state as f64 / LCG_M as f64
    }

    /// Box-Muller transform: one normal draw consuming two uniform variates.
    ///
    /// `u1` is clamped away from zero so the log term stays finite.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next().max(MIN_UNIFORM);
        let u2 = self.next();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}
