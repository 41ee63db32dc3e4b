use std::path::Path;

use anyhow::{anyhow, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Contract shared by the GBDT, random forest and SVM wrappers.
///
/// Labels are passed and returned in the dataset's own float values; each
/// implementation translates them to whatever its library expects.
pub trait ClassifierModel {
    /// Fit the model on `x` (one sample per row) and the matching labels `y`.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()>;

    /// Predict a label for every row of `x`.
    fn predict(&self, x: &Array2<f32>) -> Result<Array1<f32>>;

    /// Predict the label of a single sample.
    fn predict_row(&self, row: ArrayView1<'_, f32>) -> Result<f32> {
        let x = row.to_owned().insert_axis(Axis(0));
        let predictions = self.predict(&x)?;
        predictions
            .iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow!("{} returned no prediction", self.name()))
    }

    /// Serialize the fitted model in the library's own format.
    fn save(&self, path: &Path) -> Result<()>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
