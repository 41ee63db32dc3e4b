use std::path::Path;

use anyhow::{Context, Result};
use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::{Svm, SvmParams};
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::data_handling::LabelEncoder;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_shapes, to_f64, write_json, SavedModel};

/// C-SVC with a Gaussian (RBF) kernel.
///
/// Labels come from the sign of the decision function, so the upper class is
/// predicted wherever the separating surface is non-negative.
pub struct SVMClassifier {
    model: Option<Svm<f64, bool>>,
    encoder: Option<LabelEncoder>,
    params: ModelConfig,
}

impl SVMClassifier {
    pub fn new(params: ModelConfig) -> Self {
        SVMClassifier {
            model: None,
            encoder: None,
            params,
        }
    }

    fn fitted(&self) -> Result<(&Svm<f64, bool>, &LabelEncoder), ModelError> {
        match (&self.model, &self.encoder) {
            (Some(model), Some(encoder)) => Ok((model, encoder)),
            _ => Err(ModelError::NotFitted("SVM")),
        }
    }
}

impl ClassifierModel for SVMClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()> {
        check_shapes(x, y)?;
        let encoder = LabelEncoder::fit(y)?;

        let ModelType::SVM {
            eps,
            c,
            gaussian_kernel_eps,
        } = &self.params.model_type
        else {
            return Err(ModelError::WrongModelType {
                expected: "svm",
                found: self.params.model_type.name(),
            }
            .into());
        };

        // Upper class is `true` so that the decision function is positive for it
        let targets = y
            .iter()
            .map(|&label| encoder.is_positive(label))
            .collect::<Result<Vec<bool>, _>>()?;
        let dataset = Dataset::new(to_f64(x), Array1::from_vec(targets));

        let (c1, c2) = *c;
        let model: SvmParams<f64, bool> = Svm::<f64, bool>::params()
            .eps(*eps)
            .pos_neg_weights(c1, c2)
            .gaussian_kernel(*gaussian_kernel_eps);

        log::debug!("Fitting RBF kernel SVM on {} samples", x.nrows());
        let svm = model.fit(&dataset).context("Failed to fit SVM")?;

        self.model = Some(svm);
        self.encoder = Some(encoder);
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let (model, encoder) = self.fitted()?;
        let decisions: Array1<bool> = model.predict(&to_f64(x));
        Ok(decisions.mapv(|positive| encoder.decode_positive(positive)))
    }

    fn save(&self, path: &Path) -> Result<()> {
        let (model, encoder) = self.fitted()?;
        write_json(
            path,
            &SavedModel {
                model_type: "svm",
                classes: encoder,
                model,
            },
        )
    }

    fn name(&self) -> &str {
        "svm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled_by_second_feature() -> (Array2<f32>, Array1<f32>) {
        // Create a feature matrix with 5 features and 10 samples
        let x = Array2::from_shape_vec(
            (10, 5),
            vec![
                0.1, 1.0, 5.0, 0.2, -0.3, 0.4, -1.0, 5.0, 0.8, 0.1, 0.6, 1.0, 5.0, 1.2, 0.2, 0.9,
                -1.0, 5.0, 1.8, -0.1, 1.2, 1.0, 5.0, 2.4, 0.3, 1.5, -1.0, 5.0, 3.0, 0.0, 1.8, 1.0,
                5.0, 3.6, -0.2, 2.1, -1.0, 5.0, 4.2, 0.4, 2.4, 1.0, 5.0, 4.8, -0.1, 2.7, -1.0, 5.0,
                5.4, 0.2,
            ],
        )
        .unwrap();

        // Labels perfectly correlated with the second feature
        let y = Array1::from_vec(vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        (x, y)
    }

    #[test]
    fn test_svm_classifier() {
        let (x, y) = labelled_by_second_feature();
        let mut classifier = SVMClassifier::new(ModelConfig::new(ModelType::SVM {
            eps: 1e-5,
            c: (1.0, 1.0),
            gaussian_kernel_eps: 1.0,
        }));
        classifier.fit(&x, &y).unwrap();

        let predictions = classifier.predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_svm_keeps_non_unit_labels() {
        let (x, y) = labelled_by_second_feature();
        let y = y.mapv(|l| if l == 1.0 { 7.0 } else { -3.0 });
        let mut classifier = SVMClassifier::new(ModelConfig::new(ModelType::svm()));
        classifier.fit(&x, &y).unwrap();

        let predictions = classifier.predict(&x).unwrap();
        let correct = predictions.iter().zip(y.iter()).filter(|(p, t)| p == t).count();
        assert!(correct >= 9, "only {} of 10 correct", correct);
    }

    #[test]
    fn test_svm_rejects_other_params() {
        let mut classifier = SVMClassifier::new(ModelConfig::new(ModelType::gbdt()));
        let (x, y) = labelled_by_second_feature();
        let err = classifier.fit(&x, &y).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModelError>(),
            Some(&ModelError::WrongModelType {
                expected: "svm",
                found: "gbdt"
            })
        );
    }
}
