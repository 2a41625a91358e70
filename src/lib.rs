//! Deterministic synthetic transit-spectroscopy data generator.
//!
//! Given a target name and a spectral bin size, produce a simulated
//! time-resolved flux cube, a transmission spectrum with uncertainties, and a
//! disk-integrated light curve. The whole pipeline is seeded from the target
//! name, so the same inputs always reproduce the same observation.
//!
//! Pipeline:
//! ```text
//!   grid ──► bands (per-channel depth) ──► transit model
//!                                             │
//!                            rng (LCG + Box-Muller noise)
//!                                             ▼
//!                                        flux cube
//!                                             │
//!                                             ▼
//!                              transmission spectrum estimate
//!                                             │
//!                                             ▼
//!                          spectral binning ──► light curve
//! ```

pub mod bands;
pub mod binning;
pub mod cube;
pub mod error;
pub mod export;
pub mod generate;
pub mod grid;
pub mod rng;
pub mod spectrum;
pub mod transit;


pub use error::GenerateError;
pub use generate::{generate, LightCurve, ObservationMetadata, TransitObservation};
pub use spectrum::TransmissionSpectrum;
