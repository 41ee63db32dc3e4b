//! Held-out accuracy of a fitted classifier.
use anyhow::{Context, Result};
use ndarray::ArrayView1;
use serde::Serialize;

use crate::data_handling::{same_label, LabeledData};
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;

/// Counts of correctly and incorrectly classified test rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub correct: usize,
    pub incorrect: usize,
}

impl EvaluationReport {
    /// Compare predictions to ground truth element-wise.
    pub fn from_predictions(
        predicted: ArrayView1<f32>,
        truth: ArrayView1<f32>,
    ) -> Result<Self, ModelError> {
        if predicted.len() != truth.len() {
            return Err(ModelError::LengthMismatch {
                predicted: predicted.len(),
                labels: truth.len(),
            });
        }
        let mut report = Self::default();
        for (&p, &t) in predicted.iter().zip(truth.iter()) {
            report.record(p, t);
        }
        Ok(report)
    }

    /// A prediction is correct when it is within `f32::EPSILON` of the label.
    pub fn record(&mut self, predicted: f32, truth: f32) {
        if same_label(predicted, truth) {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    pub fn correct_pct(&self) -> f64 {
        percent(self.correct, self.total())
    }

    pub fn incorrect_pct(&self) -> f64 {
        percent(self.incorrect, self.total())
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Predict every test row one at a time and tally the outcome.
pub fn evaluate(model: &dyn ClassifierModel, data: &LabeledData) -> Result<EvaluationReport> {
    let mut report = EvaluationReport::default();
    for (idx, (row, &truth)) in data.x.outer_iter().zip(data.y.iter()).enumerate() {
        let predicted = model
            .predict_row(row)
            .with_context(|| format!("Prediction failed for test sample {}", idx))?;
        log::trace!("Sample {} -> class is ({})", idx, predicted);
        report.record(predicted, truth);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_empty_report_percentages() {
        let report = EvaluationReport::default();
        assert_eq!(report.total(), 0);
        assert_eq!(report.correct_pct(), 0.0);
        assert_eq!(report.incorrect_pct(), 0.0);
    }

    #[test]
    fn test_epsilon_tolerance() {
        let report = EvaluationReport::from_predictions(
            arr1(&[1.0 + f32::EPSILON / 4.0]).view(),
            arr1(&[1.0]).view(),
        )
        .unwrap();
        assert_eq!(report.correct, 1);
    }
}
