// ---------------------------------------------------------------------------
// Fixed simulation axes
// ---------------------------------------------------------------------------

/// Number of wavelength channels (NIRSpec-like coverage).
pub const N_WAVELENGTHS: usize = 200;
/// Simulated wavelength window in micrometers.
pub const WAVELENGTH_MIN_UM: f64 = 0.6;
pub const WAVELENGTH_MAX_UM: f64 = 5.3;

/// Number of time samples (integrations) across the transit.
pub const N_PHASE: usize = 100;
/// Orbital-phase window, centered on mid-transit.
pub const PHASE_MIN: f64 = -0.05;
pub const PHASE_MAX: f64 = 0.05;

/// `n` evenly spaced points over the closed interval `[start, stop]`.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Full-resolution wavelength axis: 200 ascending points over [0.6, 5.3] μm.
pub fn wavelength_grid() -> Vec<f64> {
    linspace(WAVELENGTH_MIN_UM, WAVELENGTH_MAX_UM, N_WAVELENGTHS)
}

/// Orbital-phase axis: 100 ascending points over [-0.05, 0.05].
pub fn phase_grid() -> Vec<f64> {
    linspace(PHASE_MIN, PHASE_MAX, N_PHASE)
}
