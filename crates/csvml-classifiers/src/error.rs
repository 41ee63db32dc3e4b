use std::error::Error;
use std::fmt;

/// Failures when mapping CSV labels onto binary classes.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelError {
    Empty,
    TooManyClasses(usize), // Number of distinct labels found
    UnknownLabel(f32),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LabelError::Empty => write!(f, "Label vector is empty"),
            LabelError::TooManyClasses(count) => write!(
                f,
                "Found {} distinct labels; binary classification supports at most 2",
                count
            ),
            LabelError::UnknownLabel(label) => {
                write!(f, "Label {} was not seen during training", label)
            }
        }
    }
}

impl Error for LabelError {}

/// Misuse of a classifier wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    NotFitted(&'static str),
    ShapeMismatch { rows: usize, labels: usize },
    WrongModelType { expected: &'static str, found: &'static str },
    LengthMismatch { predicted: usize, labels: usize },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NotFitted(name) => write!(f, "{} model has not been fitted", name),
            ModelError::ShapeMismatch { rows, labels } => write!(
                f,
                "Feature matrix has {} rows but label vector has {} entries",
                rows, labels
            ),
            ModelError::WrongModelType { expected, found } => write!(
                f,
                "Expected {} parameters, got {} parameters",
                expected, found
            ),
            ModelError::LengthMismatch { predicted, labels } => write!(
                f,
                "Predictions and labels must have equal lengths ({} vs {})",
                predicted, labels
            ),
        }
    }
}

impl Error for ModelError {}
