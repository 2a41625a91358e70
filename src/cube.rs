use crate::rng::Lcg;
use crate::transit::{transit_flux, NOISE_STD};

// ---------------------------------------------------------------------------
// FluxCube – the 2-D (time × wavelength) relative-flux array
// ---------------------------------------------------------------------------

/// Time-major flux matrix: `rows[t][w]` is the relative flux of wavelength
/// channel `w` at time sample `t`. Entries sit near 1.0 out of transit and
/// dip by up to the per-channel depth near mid-transit, plus Gaussian noise.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxCube {
    pub rows: Vec<Vec<f64>>,
}

impl FluxCube {
    /// Number of time samples.
    pub fn n_times(&self) -> usize {
        self.rows.len()
    }

    /// Number of wavelength channels.
    pub fn n_wavelengths(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// One wavelength channel as a time series.
    pub fn column(&self, w: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[w]).collect()
    }
}

/// Synthesize the flux cube: model flux plus one independent noise draw per
/// cell.
///
/// Draw order is fixed: outer loop over wavelength, inner loop over time, so
/// the same seed reproduces the identical cube bit for bit.
pub fn synthesize(phase: &[f64], depths: &[f64], rng: &mut Lcg) -> FluxCube {
    let mut rows = vec![vec![0.0; depths.len()]; phase.len()];
    for (w, &depth) in depths.iter().enumerate() {
        for (t, &ph) in phase.iter().enumerate() {
            rows[t][w] = transit_flux(ph, depth) + rng.gaussian(0.0, NOISE_STD);
        }
    }
    FluxCube { rows }
}
