//! Dataset shapes, loaded samples and label encoding.
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::LabelError;

pub const TRAINING_SIZE: usize = 8672;
pub const TESTING_SIZE: usize = 8671;
pub const NUMBER_OF_ATTRIBUTES: usize = 10;
pub const NUMBER_OF_CLASSES: usize = 2;

/// Expected shape of an input file: `n_rows` lines of `n_attributes`
/// features followed by one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub n_rows: usize,
    pub n_attributes: usize,
}

impl Schema {
    pub fn new(n_rows: usize, n_attributes: usize) -> Self {
        Self {
            n_rows,
            n_attributes,
        }
    }

    pub fn training() -> Self {
        Self::new(TRAINING_SIZE, NUMBER_OF_ATTRIBUTES)
    }

    pub fn testing() -> Self {
        Self::new(TESTING_SIZE, NUMBER_OF_ATTRIBUTES)
    }

    /// Number of comma-separated fields on each line (features + label).
    pub fn n_fields(&self) -> usize {
        self.n_attributes + 1
    }
}

/// Feature matrix and label vector loaded from one file.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledData {
    pub x: Array2<f32>,
    pub y: Array1<f32>,
}

impl LabeledData {
    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }
}

/// Maps the float labels of a binary dataset onto class indices `0` and `1`.
///
/// Classes are ordered ascending, so for the usual `0.0` / `1.0` labels the
/// class index equals the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<f32>,
}

impl LabelEncoder {
    pub fn fit(labels: &Array1<f32>) -> Result<Self, LabelError> {
        if labels.is_empty() {
            return Err(LabelError::Empty);
        }

        let mut classes: Vec<f32> = Vec::with_capacity(NUMBER_OF_CLASSES);
        for &label in labels.iter() {
            if !classes.iter().any(|&c| same_label(c, label)) {
                classes.push(label);
            }
        }

        if classes.len() > NUMBER_OF_CLASSES {
            return Err(LabelError::TooManyClasses(classes.len()));
        }
        classes.sort_by(|a, b| a.total_cmp(b));

        Ok(Self { classes })
    }

    pub fn classes(&self) -> &[f32] {
        &self.classes
    }

    pub fn encode(&self, label: f32) -> Result<usize, LabelError> {
        self.classes
            .iter()
            .position(|&c| same_label(c, label))
            .ok_or(LabelError::UnknownLabel(label))
    }

    /// `true` when `label` is the upper of the two classes.
    pub fn is_positive(&self, label: f32) -> Result<bool, LabelError> {
        Ok(self.encode(label)? == self.classes.len() - 1 && self.classes.len() > 1)
    }

    pub fn decode(&self, class: usize) -> f32 {
        self.classes[class.min(self.classes.len() - 1)]
    }

    /// Label for a binary decision; single-class encoders always return their class.
    pub fn decode_positive(&self, positive: bool) -> f32 {
        if positive {
            self.decode(self.classes.len() - 1)
        } else {
            self.decode(0)
        }
    }
}

/// Labels count as equal when they differ by less than `f32::EPSILON`.
pub fn same_label(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_encoder_orders_classes() {
        let y = Array1::from_vec(vec![1.0, 0.0, 1.0, 0.0]);
        let encoder = LabelEncoder::fit(&y).unwrap();
        assert_eq!(encoder.classes(), &[0.0, 1.0]);
        assert_eq!(encoder.encode(0.0).unwrap(), 0);
        assert_eq!(encoder.encode(1.0).unwrap(), 1);
        assert!(encoder.is_positive(1.0).unwrap());
        assert!(!encoder.is_positive(0.0).unwrap());
        assert_eq!(encoder.decode_positive(true), 1.0);
        assert_eq!(encoder.decode_positive(false), 0.0);
    }

    #[test]
    fn test_label_encoder_non_unit_labels() {
        let y = Array1::from_vec(vec![2.0, -1.0, 2.0]);
        let encoder = LabelEncoder::fit(&y).unwrap();
        assert_eq!(encoder.classes(), &[-1.0, 2.0]);
        assert_eq!(encoder.decode(1), 2.0);
    }

    #[test]
    fn test_label_encoder_rejects_third_class() {
        let y = Array1::from_vec(vec![0.0, 1.0, 2.0]);
        assert_eq!(LabelEncoder::fit(&y), Err(LabelError::TooManyClasses(3)));
    }

    #[test]
    fn test_label_encoder_unknown_label() {
        let y = Array1::from_vec(vec![0.0, 1.0]);
        let encoder = LabelEncoder::fit(&y).unwrap();
        assert_eq!(encoder.encode(5.0), Err(LabelError::UnknownLabel(5.0)));
    }

    #[test]
    fn test_label_encoder_single_class() {
        let y = Array1::from_vec(vec![1.0, 1.0]);
        let encoder = LabelEncoder::fit(&y).unwrap();
        assert!(!encoder.is_positive(1.0).unwrap());
        assert_eq!(encoder.decode_positive(true), 1.0);
        assert_eq!(encoder.decode_positive(false), 1.0);
    }

    #[test]
    fn test_schema_fixed_shapes() {
        assert_eq!(Schema::training().n_rows, 8672);
        assert_eq!(Schema::testing().n_rows, 8671);
        assert_eq!(Schema::testing().n_fields(), 11);
    }
}
