use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Float64Builder, ListBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::generate::TransitObservation;

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

/// Serialize an observation as pretty-printed JSON.
pub fn to_json(obs: &TransitObservation) -> Result<String> {
    serde_json::to_string_pretty(obs).context("serializing observation to JSON")
}

/// Write an observation to a JSON file.
pub fn write_json(obs: &TransitObservation, path: &Path) -> Result<()> {
    std::fs::write(path, to_json(obs)?)
        .with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Parquet export
// ---------------------------------------------------------------------------

/// Write an observation as a Parquet table: one row per binned wavelength
/// channel with columns
/// * `wavelength`: Float64 (μm)
/// * `transit_depth_ppm`, `transit_depth_err_ppm`: Float64
/// * `flux`: List<Float64> – the channel's time series over the phase axis
pub fn write_parquet(obs: &TransitObservation, path: &Path) -> Result<()> {
    let spectrum = &obs.transmission_spectrum;
    let n_bins = obs.wavelengths.len();

    let wavelength_array = Float64Array::from(obs.wavelengths.clone());
    let depth_array = Float64Array::from(spectrum.transit_depth_ppm.clone());
    let err_array = Float64Array::from(spectrum.transit_depth_err_ppm.clone());

    let mut flux_builder = ListBuilder::new(Float64Builder::new());
    for w in 0..n_bins {
        let values = flux_builder.values();
        for row in &obs.flux {
            values.append_value(row[w]);
        }
        flux_builder.append(true);
    }
    let flux_array = flux_builder.finish();

    let schema = Arc::new(Schema::new(vec![
        Field::new("wavelength", DataType::Float64, false),
        Field::new("transit_depth_ppm", DataType::Float64, false),
        Field::new("transit_depth_err_ppm", DataType::Float64, false),
        Field::new(
            "flux",
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(wavelength_array),
            Arc::new(depth_array),
            Arc::new(err_array),
            Arc::new(flux_array),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
