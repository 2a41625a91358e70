use transit_forge::{generate, GenerateError};

/// Index of the binned channel whose wavelength is closest to `target_um`.
fn nearest_bin(wavelengths: &[f64], target_um: f64) -> usize {
    wavelengths
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - target_um).abs().total_cmp(&(*b - target_um).abs())
        })
        .map(|(i, _)| i)
        .unwrap()
}

#[test]
fn generation_is_deterministic() {
    let a = generate("WASP-39 b", 20).unwrap();
    let b = generate("WASP-39 b", 20).unwrap();
    assert_eq!(a, b, "same target and bin size must reproduce bit-identical output");
}

#[test]
fn distinct_targets_produce_distinct_observations() {
    let a = generate("WASP-39 b", 20).unwrap();
    let b = generate("WASP-96 b", 20).unwrap();
    assert_ne!(a.flux, b.flux);
    assert_ne!(
        a.transmission_spectrum.transit_depth_ppm,
        b.transmission_spectrum.transit_depth_ppm
    );
}

#[test]
fn output_shapes_follow_bin_size() {
    let obs = generate("WASP-39 b", 20).unwrap();
    assert_eq!(obs.n_bins(), 10);
    assert_eq!(obs.phase.len(), 100);
    assert_eq!(obs.flux.len(), 100);
    for row in &obs.flux {
        assert_eq!(row.len(), 10);
    }
    assert_eq!(obs.lightcurve.phase.len(), 100);
    assert_eq!(obs.lightcurve.flux.len(), 100);
    assert_eq!(obs.transmission_spectrum.wavelengths, obs.wavelengths);
    assert_eq!(obs.transmission_spectrum.transit_depth_ppm.len(), 10);
    assert_eq!(obs.transmission_spectrum.transit_depth_err_ppm.len(), 10);
}

#[test]
fn remainder_channels_are_dropped() {
    // 200 / 7 = 28 bins, 4 channels discarded.
    let obs = generate("HAT-P-18 b", 7).unwrap();
    assert_eq!(obs.n_bins(), 28);
}

#[test]
fn out_of_range_bin_sizes_are_clamped() {
    // 1 clamps to 5 → 40 bins; 500 clamps to 100 → 2 bins.
    assert_eq!(generate("K2-18 b", 1).unwrap().n_bins(), 40);
    assert_eq!(generate("K2-18 b", 500).unwrap().n_bins(), 2);
}

#[test]
fn empty_target_is_rejected() {
    match generate("", 20) {
        Err(GenerateError::EmptyTarget) => {}
        other => panic!("expected EmptyTarget, got {other:?}"),
    }
}

#[test]
fn water_bands_stand_out_of_the_continuum() {
    let obs = generate("WASP-39 b", 20).unwrap();
    let spectrum = &obs.transmission_spectrum;

    // The 0.6–1.06 μm bin has no molecular features: clean baseline. The
    // in-transit mean includes the ingress/egress ramp samples, so the
    // recovered depth sits ~17% below the 12000 ppm model baseline.
    let continuum = spectrum.transit_depth_ppm[0];
    assert!(
        (continuum - 9_900.0).abs() < 300.0,
        "continuum depth {} ppm should sit near 9900 ppm",
        continuum
    );

    // H2O bands at 1.4, 1.9 and 2.85 μm must rise above the continuum
    // even after binning down to 10 channels.
    for band_um in [1.4, 1.9, 2.85] {
        let bin = nearest_bin(&spectrum.wavelengths, band_um);
        let depth = spectrum.transit_depth_ppm[bin];
        assert!(
            depth > continuum + 150.0,
            "H2O band at {} μm (bin {}): depth {} ppm not above continuum {} ppm",
            band_um,
            bin,
            depth,
            continuum
        );
    }
}

#[test]
fn lightcurve_dips_at_mid_transit() {
    let obs = generate("WASP-39 b", 20).unwrap();
    let lc = &obs.lightcurve;

    let mid = lc.phase.iter().position(|p| p.abs() < 1e-3).unwrap();
    let first = lc.flux[0];
    let bottom = lc.flux[mid];
    assert!(
        first - bottom > 0.01,
        "transit should dim the aggregate light curve by ~1.2% (got {} → {})",
        first,
        bottom
    );
}

#[test]
fn uncertainties_shrink_with_coarser_binning() {
    let fine = generate("WASP-39 b", 10).unwrap();
    let coarse = generate("WASP-39 b", 20).unwrap();

    let mean_err = |errs: &[f64]| errs.iter().sum::<f64>() / errs.len() as f64;
    let fine_err = mean_err(&fine.transmission_spectrum.transit_depth_err_ppm);
    let coarse_err = mean_err(&coarse.transmission_spectrum.transit_depth_err_ppm);

    // Doubling the bin size halves the per-bin error by ~sqrt(2). The
    // per-channel errors vary slightly, so allow a loose window.
    let ratio = coarse_err / fine_err;
    let expected = 1.0 / 2f64.sqrt();
    assert!(
        (ratio - expected).abs() < 0.05,
        "error ratio {} should be near {}",
        ratio,
        expected
    );
}

#[test]
fn metadata_describes_the_simulated_instrument() {
    let obs = generate("WASP-39 b", 20).unwrap();
    assert_eq!(obs.target, "WASP-39 b");
    assert_eq!(obs.data_source, "simulated");
    assert_eq!(obs.metadata.instrument, "NIRSpec (simulated)");
    assert_eq!(obs.metadata.mode, "G395H");
    assert_eq!(obs.metadata.wavelength_range, [0.6, 5.3]);
    assert_eq!(obs.metadata.n_integrations, 100);
}

#[test]
fn observation_serializes_with_expected_keys() {
    let obs = generate("WASP-39 b", 20).unwrap();
    let json = serde_json::to_value(&obs).unwrap();

    for key in [
        "target",
        "data_source",
        "wavelengths",
        "phase",
        "flux",
        "transmission_spectrum",
        "lightcurve",
        "metadata",
    ] {
        assert!(json.get(key).is_some(), "missing key {key:?}");
    }
    let spectrum = &json["transmission_spectrum"];
    assert!(spectrum.get("transit_depth_ppm").is_some());
    assert!(spectrum.get("transit_depth_err_ppm").is_some());
}
