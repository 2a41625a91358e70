// ---------------------------------------------------------------------------
// Molecular absorption bands – fixed reference table
// ---------------------------------------------------------------------------

/// One absorption range of a molecule: wavelengths inside `[min_um, max_um]`
/// receive a Gaussian depth bump of peak amplitude `extra_depth`.
#[derive(Debug, Clone, Copy)]
pub struct AbsorptionRange {
    pub min_um: f64,
    pub max_um: f64,
    pub extra_depth: f64,
}

/// A molecule with its display metadata and absorption ranges.
#[derive(Debug, Clone, Copy)]
pub struct MolecularBand {
    /// Chemical formula, e.g. "H2O".
    pub molecule: &'static str,
    /// Human-readable name for legends.
    pub label: &'static str,
    /// Display color (hex) used by plotting collaborators.
    pub color: &'static str,
    pub ranges: &'static [AbsorptionRange],
}

const fn range(min_um: f64, max_um: f64, extra_depth: f64) -> AbsorptionRange {
    AbsorptionRange {
        min_um,
        max_um,
        extra_depth,
    }
}

/// All molecular bands inside the simulated [0.6, 5.3] μm window.
pub const MOLECULAR_BANDS: [MolecularBand; 4] = [
    MolecularBand {
        molecule: "H2O",
        label: "Water",
        color: "#0077BB",
        ranges: &[
            range(1.35, 1.45, 0.003),
            range(1.8, 2.0, 0.004),
            range(2.7, 3.0, 0.005),
        ],
    },
    MolecularBand {
        molecule: "CO2",
        label: "Carbon Dioxide",
        color: "#EE7733",
        ranges: &[range(4.2, 4.4, 0.006)],
    },
    MolecularBand {
        molecule: "CO",
        label: "Carbon Monoxide",
        color: "#CC3311",
        ranges: &[range(4.5, 5.0, 0.004)],
    },
    MolecularBand {
        molecule: "CH4",
        label: "Methane",
        color: "#009988",
        ranges: &[range(2.2, 2.4, 0.002), range(3.3, 3.5, 0.003)],
    },
];

// ---------------------------------------------------------------------------
// Depth superposition
// ---------------------------------------------------------------------------

/// Wavelength-independent baseline transit depth (geometric planet/star
/// area ratio, ~12000 ppm).
pub const BASE_DEPTH: f64 = 0.012;

/// Transit depth at one wavelength: baseline plus the Gaussian bump of every
/// absorption range whose interval contains the wavelength. Overlapping
/// ranges accumulate additively; the result is always ≥ [`BASE_DEPTH`].
pub fn depth_at(wavelength_um: f64) -> f64 {
    let mut depth = BASE_DEPTH;
    for band in &MOLECULAR_BANDS {
        for r in band.ranges {
            if r.min_um <= wavelength_um && wavelength_um <= r.max_um {
                let center = (r.min_um + r.max_um) / 2.0;
                let width = (r.max_um - r.min_um) / 2.0;
                let sigma = width / 2.0;
                depth += r.extra_depth
                    * (-(wavelength_um - center).powi(2) / (2.0 * sigma.powi(2))).exp();
            }
        }
    }
    depth
}

/// Per-channel transit depth for a whole wavelength axis.
pub fn depth_profile(wavelengths: &[f64]) -> Vec<f64> {
    wavelengths.iter().map(|&wl| depth_at(wl)).collect()
}
