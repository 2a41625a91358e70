use crate::cube::FluxCube;
use crate::spectrum::TransmissionSpectrum;

// ---------------------------------------------------------------------------
// Spectral binning
// ---------------------------------------------------------------------------

/// Smallest and largest accepted bin size; out-of-range requests are clamped.
pub const MIN_BIN_SIZE: usize = 5;
pub const MAX_BIN_SIZE: usize = 100;

/// Clamp a requested bin size into `[MIN_BIN_SIZE, MAX_BIN_SIZE]`.
pub fn clamp_bin_size(bin_size: usize) -> usize {
    bin_size.clamp(MIN_BIN_SIZE, MAX_BIN_SIZE)
}

/// Mean of each consecutive group of `bin_size` values. Trailing values past
/// `floor(len / bin_size) * bin_size` are dropped, not folded into the last
/// bin. Re-binning an already binned series is NOT equivalent to binning the
/// raw series once with the product bin size.
pub fn bin_mean(values: &[f64], bin_size: usize) -> Vec<f64> {
    let n_bins = values.len() / bin_size;
    (0..n_bins)
        .map(|b| {
            values[b * bin_size..(b + 1) * bin_size].iter().sum::<f64>() / bin_size as f64
        })
        .collect()
}

/// Bin a per-channel uncertainty series: mean per bin, then reduced by
/// `sqrt(bin_size)` (standard error of the mean over the bin).
pub fn bin_error(errors: &[f64], bin_size: usize) -> Vec<f64> {
    let scale = (bin_size as f64).sqrt();
    bin_mean(errors, bin_size)
        .into_iter()
        .map(|e| e / scale)
        .collect()
}

/// Bin a transmission spectrum channel-wise.
pub fn bin_spectrum(spectrum: &TransmissionSpectrum, bin_size: usize) -> TransmissionSpectrum {
    TransmissionSpectrum {
        wavelengths: bin_mean(&spectrum.wavelengths, bin_size),
        transit_depth_ppm: bin_mean(&spectrum.transit_depth_ppm, bin_size),
        transit_depth_err_ppm: bin_error(&spectrum.transit_depth_err_ppm, bin_size),
    }
}

/// Bin the wavelength axis of a flux cube: every time sample's row is reduced
/// with the same grouping as the spectrum arrays.
pub fn bin_cube(cube: &FluxCube, bin_size: usize) -> FluxCube {
    FluxCube {
        rows: cube.rows.iter().map(|row| bin_mean(row, bin_size)).collect(),
    }
}

// ---------------------------------------------------------------------------
// Light-curve aggregation
// ---------------------------------------------------------------------------

/// Disk-integrated light curve: per time sample, the mean flux across all
/// (binned) wavelength channels. Same length as the phase axis.
pub fn lightcurve(cube: &FluxCube) -> Vec<f64> {
    cube.rows
        .iter()
        .map(|row| row.iter().sum::<f64>() / row.len() as f64)
        .collect()
}
