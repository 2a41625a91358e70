use serde::Serialize;

use crate::cube::FluxCube;
use crate::error::{GenerateError, SampleSet};
use crate::transit::TRANSIT_DURATION;

// ---------------------------------------------------------------------------
// Transmission spectrum estimation
// ---------------------------------------------------------------------------

/// Gap left between the in-transit window and the out-of-transit baseline so
/// ingress/egress samples contaminate neither set.
pub const OUT_OF_TRANSIT_MARGIN: f64 = 0.01;

/// Per-channel transit depth and uncertainty, in parts per million.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransmissionSpectrum {
    pub wavelengths: Vec<f64>,
    pub transit_depth_ppm: Vec<f64>,
    pub transit_depth_err_ppm: Vec<f64>,
}

/// Sample mean and population standard deviation of a time series restricted
/// to the given sample indices.
fn mean_and_std(values: &[f64], indices: &[usize]) -> (f64, f64) {
    let n = indices.len() as f64;
    let mean = indices.iter().map(|&i| values[i]).sum::<f64>() / n;
    let mean_sq = indices.iter().map(|&i| values[i] * values[i]).sum::<f64>() / n;
    // E[x²]−E[x]² can round slightly negative for near-constant samples.
    let variance = (mean_sq - mean * mean).max(0.0);
    (mean, variance.sqrt())
}

/// Estimate the transmission spectrum from a flux cube.
///
/// Time samples with `|phase| < duration/2` form the in-transit set; samples
/// with `|phase| > duration/2 + margin` form the out-of-transit baseline.
/// Samples in the gap belong to neither. Depth is the fractional flux deficit
/// of the in-transit mean against the baseline mean; the uncertainty combines
/// both sets' scatter in quadrature.
pub fn estimate(
    phase: &[f64],
    wavelengths: &[f64],
    cube: &FluxCube,
) -> Result<TransmissionSpectrum, GenerateError> {
    let half_duration = TRANSIT_DURATION / 2.0;

    let in_idx: Vec<usize> = (0..phase.len())
        .filter(|&t| phase[t].abs() < half_duration)
        .collect();
    let out_idx: Vec<usize> = (0..phase.len())
        .filter(|&t| phase[t].abs() > half_duration + OUT_OF_TRANSIT_MARGIN)
        .collect();

    if in_idx.is_empty() {
        return Err(GenerateError::DegenerateStatistics {
            set: SampleSet::InTransit,
        });
    }
    if out_idx.is_empty() {
        return Err(GenerateError::DegenerateStatistics {
            set: SampleSet::OutOfTransit,
        });
    }

    let n = cube.n_wavelengths();
    let mut transit_depth_ppm = Vec::with_capacity(n);
    let mut transit_depth_err_ppm = Vec::with_capacity(n);

    for w in 0..n {
        let column = cube.column(w);
        let (in_mean, in_std) = mean_and_std(&column, &in_idx);
        let (out_mean, out_std) = mean_and_std(&column, &out_idx);

        transit_depth_ppm.push((1.0 - in_mean / out_mean) * 1e6);
        transit_depth_err_ppm
            .push((in_std * in_std + out_std * out_std).sqrt() / out_mean * 1e6);
    }

    Ok(TransmissionSpectrum {
        wavelengths: wavelengths.to_vec(),
        transit_depth_ppm,
        transit_depth_err_ppm,
    })
}
