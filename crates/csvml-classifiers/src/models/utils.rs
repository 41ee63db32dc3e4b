use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::data_handling::LabelEncoder;
use crate::error::ModelError;

pub fn check_shapes(x: &Array2<f32>, y: &Array1<f32>) -> Result<(), ModelError> {
    if x.nrows() != y.len() {
        return Err(ModelError::ShapeMismatch {
            rows: x.nrows(),
            labels: y.len(),
        });
    }
    Ok(())
}

/// linfa models train on `f64` records.
pub fn to_f64(x: &Array2<f32>) -> Array2<f64> {
    x.mapv(|v| v as f64)
}

/// On-disk layout for the linfa models: the label classes plus the model itself.
#[derive(Serialize)]
pub struct SavedModel<'a, M: Serialize> {
    pub model_type: &'a str,
    pub classes: &'a LabelEncoder,
    pub model: M,
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create model file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write model file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write model file: {}", path.display()))?;
    Ok(())
}
