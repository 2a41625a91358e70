// ---------------------------------------------------------------------------
// Parametric transit light-curve model
// ---------------------------------------------------------------------------

/// Full transit duration in phase units (first to last contact).
pub const TRANSIT_DURATION: f64 = 0.03;
/// Width of the linear ingress/egress ramp in phase units.
pub const INGRESS_WIDTH: f64 = 0.005;
/// Standard deviation of the per-cell Gaussian photometric noise.
pub const NOISE_STD: f64 = 0.0005;

/// Normalized flux at a given orbital phase for a channel with transit
/// depth `depth`.
///
/// Flat-bottomed transit with linear ingress/egress ramps, symmetric about
/// phase 0:
/// * `|phase| >= duration/2` → 1 (out of transit)
/// * within `INGRESS_WIDTH` of the contact point → linear ramp between
///   `1 - depth` and 1
/// * otherwise → `1 - depth` (fully in transit)
pub fn transit_flux(phase: f64, depth: f64) -> f64 {
    let half_duration = TRANSIT_DURATION / 2.0;
    let t = phase.abs();

    if t >= half_duration {
        return 1.0;
    }
    if t > half_duration - INGRESS_WIDTH {
        // Fraction of the way through ingress/egress, 0 at full depth,
        // 1 at the contact point.
        let ramp = (t - (half_duration - INGRESS_WIDTH)) / INGRESS_WIDTH;
        return 1.0 - depth * (1.0 - ramp);
    }
    1.0 - depth
}
