use log::{debug, info};
use serde::Serialize;

use crate::bands;
use crate::binning::{bin_cube, bin_spectrum, clamp_bin_size, lightcurve};
use crate::cube;
use crate::error::GenerateError;
use crate::grid::{phase_grid, wavelength_grid, WAVELENGTH_MAX_UM, WAVELENGTH_MIN_UM};
use crate::rng::Lcg;
use crate::spectrum;

// ---------------------------------------------------------------------------
// Result structure handed to rendering / export collaborators
// ---------------------------------------------------------------------------

/// Aggregated light curve: one mean-flux value per time sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCurve {
    pub phase: Vec<f64>,
    pub flux: Vec<f64>,
}

/// Descriptive labels for the simulated observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationMetadata {
    pub instrument: String,
    pub mode: String,
    pub wavelength_range: [f64; 2],
    pub n_integrations: usize,
}

/// The complete result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitObservation {
    pub target: String,
    pub data_source: String,
    /// Binned wavelength axis (μm).
    pub wavelengths: Vec<f64>,
    /// Unbinned orbital-phase axis.
    pub phase: Vec<f64>,
    /// Binned flux cube, time-major.
    pub flux: Vec<Vec<f64>>,
    pub transmission_spectrum: spectrum::TransmissionSpectrum,
    pub lightcurve: LightCurve,
    pub metadata: ObservationMetadata,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full generation pipeline for one target.
///
/// Deterministic: the target name seeds a locally owned RNG, so the same
/// (target, bin_size) pair always produces the same observation. The bin
/// size is clamped into [5, 100] before use.
pub fn generate(target: &str, bin_size: usize) -> Result<TransitObservation, GenerateError> {
    if target.is_empty() {
        return Err(GenerateError::EmptyTarget);
    }
    let bin_size = clamp_bin_size(bin_size);
    let mut rng = Lcg::from_name(target);
    info!("generating synthetic observation for {target:?}, bin size {bin_size}");

    let wavelengths = wavelength_grid();
    let phase = phase_grid();
    let depths = bands::depth_profile(&wavelengths);

    let cube = cube::synthesize(&phase, &depths, &mut rng);
    let full_spectrum = spectrum::estimate(&phase, &wavelengths, &cube)?;

    let binned_spectrum = bin_spectrum(&full_spectrum, bin_size);
    let binned_cube = bin_cube(&cube, bin_size);
    let lc_flux = lightcurve(&binned_cube);
    debug!(
        "binned {} channels into {} bins",
        wavelengths.len(),
        binned_spectrum.wavelengths.len()
    );

    Ok(TransitObservation {
        target: target.to_string(),
        data_source: "simulated".to_string(),
        wavelengths: binned_spectrum.wavelengths.clone(),
        flux: binned_cube.rows,
        transmission_spectrum: binned_spectrum,
        lightcurve: LightCurve {
            phase: phase.clone(),
            flux: lc_flux,
        },
        metadata: ObservationMetadata {
            instrument: "NIRSpec (simulated)".to_string(),
            mode: "G395H".to_string(),
            wavelength_range: [WAVELENGTH_MIN_UM, WAVELENGTH_MAX_UM],
            n_integrations: phase.len(),
        },
        phase,
    })
}

impl TransitObservation {
    /// Number of binned wavelength channels.
    pub fn n_bins(&self) -> usize {
        self.wavelengths.len()
    }
}
