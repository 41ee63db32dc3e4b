use std::path::Path;

use anyhow::{anyhow, Result};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::data_handling::LabelEncoder;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::check_shapes;

/// Gradient Boosting Decision Tree (GBDT) classifier
pub struct GBDTClassifier {
    model: Option<GBDT>,
    encoder: Option<LabelEncoder>,
    params: ModelConfig,
}

impl GBDTClassifier {
    pub fn new(params: ModelConfig) -> Self {
        GBDTClassifier {
            model: None,
            encoder: None,
            params,
        }
    }

    fn fitted(&self) -> Result<(&GBDT, &LabelEncoder), ModelError> {
        match (&self.model, &self.encoder) {
            (Some(model), Some(encoder)) => Ok((model, encoder)),
            _ => Err(ModelError::NotFitted("GBDT")),
        }
    }
}

impl ClassifierModel for GBDTClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()> {
        check_shapes(x, y)?;
        let encoder = LabelEncoder::fit(y)?;

        match &self.params.model_type {
            ModelType::GBDT {
                learning_rate,
                max_depth,
                num_boost_round,
                min_leaf_size,
                data_sample_ratio,
                debug,
                training_optimization_level,
                loss_type,
            } => {
                let mut config = Config::new();

                config.set_feature_size(x.ncols());
                config.set_shrinkage(*learning_rate);
                config.set_max_depth(*max_depth);
                config.set_iterations(*num_boost_round as usize);
                config.set_min_leaf_size(*min_leaf_size);
                config.set_data_sample_ratio(*data_sample_ratio);
                config.set_debug(*debug);
                config.set_training_optimization_level(*training_optimization_level);
                config.set_loss(loss_type);

                let mut gbdt = GBDT::new(&config);

                // LogLikelyhood loss expects labels of -1 and 1
                let mut train_x = DataVec::with_capacity(x.nrows());
                for (row, &label) in x.outer_iter().zip(y.iter()) {
                    let target = if encoder.is_positive(label)? { 1.0 } else { -1.0 };
                    train_x.push(Data::new_training_data(row.to_vec(), 1.0, target, None));
                }

                log::debug!(
                    "Fitting GBDT on {} samples with {} rounds",
                    train_x.len(),
                    num_boost_round
                );
                gbdt.fit(&mut train_x);

                self.model = Some(gbdt);
                self.encoder = Some(encoder);
                Ok(())
            }
            other => Err(ModelError::WrongModelType {
                expected: "gbdt",
                found: other.name(),
            }
            .into()),
        }
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let (model, encoder) = self.fitted()?;

        let mut test_x = DataVec::with_capacity(x.nrows());
        for row in x.outer_iter() {
            test_x.push(Data::new_test_data(row.to_vec(), None));
        }

        // Predictions are P(label == 1) under the log-likelihood loss
        let probabilities = model.predict(&test_x);
        Ok(probabilities
            .iter()
            .map(|&p| encoder.decode_positive(p >= 0.5))
            .collect())
    }

    fn save(&self, path: &Path) -> Result<()> {
        let (model, _) = self.fitted()?;
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow!("Model path is not valid UTF-8: {}", path.display()))?;
        model
            .save_model(path_str)
            .map_err(|e| anyhow!("Failed to save GBDT model to {}: {}", path.display(), e))
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
