use std::path::Path;

use anyhow::{Context, Result};
use linfa::prelude::*;
use linfa_ensemble::{EnsembleLearner, EnsembleLearnerParams};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::config::{ModelConfig, ModelType};
use crate::data_handling::LabelEncoder;
use crate::error::ModelError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::{check_shapes, to_f64, write_json, SavedModel};

/// Random forest: bootstrap-aggregated CART trees from `linfa-ensemble`,
/// each grown on a random subset of the attributes.
pub struct RandomForestClassifier {
    model: Option<EnsembleLearner<DecisionTree<f64, usize>>>,
    encoder: Option<LabelEncoder>,
    params: ModelConfig,
}

/// Trees plus the attribute indices each tree was grown on.
#[derive(Serialize)]
struct SavedForest<'a> {
    trees: &'a [DecisionTree<f64, usize>],
    tree_features: &'a [Vec<usize>],
}

impl RandomForestClassifier {
    pub fn new(params: ModelConfig) -> Self {
        RandomForestClassifier {
            model: None,
            encoder: None,
            params,
        }
    }

    fn fitted(
        &self,
    ) -> Result<(&EnsembleLearner<DecisionTree<f64, usize>>, &LabelEncoder), ModelError> {
        match (&self.model, &self.encoder) {
            (Some(model), Some(encoder)) => Ok((model, encoder)),
            _ => Err(ModelError::NotFitted("RandomForest")),
        }
    }

    /// Attribute indices available to each fitted tree.
    pub fn tree_features(&self) -> Result<&[Vec<usize>], ModelError> {
        let (model, _) = self.fitted()?;
        Ok(&model.model_features)
    }
}

impl ClassifierModel for RandomForestClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<()> {
        check_shapes(x, y)?;
        let encoder = LabelEncoder::fit(y)?;

        let ModelType::RandomForest {
            n_trees,
            max_depth,
            min_weight_split,
            bootstrap_proportion,
            feature_proportion,
        } = &self.params.model_type
        else {
            return Err(ModelError::WrongModelType {
                expected: "random_forest",
                found: self.params.model_type.name(),
            }
            .into());
        };

        let targets = y
            .iter()
            .map(|&label| encoder.encode(label))
            .collect::<Result<Vec<usize>, _>>()?;
        let dataset = Dataset::new(to_f64(x), Array1::from_vec(targets));

        let tree_params = DecisionTree::<f64, usize>::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(Some(*max_depth))
            .min_weight_split(*min_weight_split);

        log::debug!(
            "Fitting random forest of {} trees on {} samples, {:.0}% of {} attributes per tree",
            n_trees,
            x.nrows(),
            feature_proportion * 100.0,
            x.ncols()
        );
        let forest = EnsembleLearnerParams::new(tree_params)
            .ensemble_size(*n_trees)
            .bootstrap_proportion(*bootstrap_proportion)
            .feature_proportion(*feature_proportion)
            .fit(&dataset)
            .context("Failed to fit random forest")?;

        self.model = Some(forest);
        self.encoder = Some(encoder);
        Ok(())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Array1<f32>> {
        let (model, encoder) = self.fitted()?;
        let classes: Array1<usize> = model.predict(&to_f64(x));
        Ok(classes.mapv(|class| encoder.decode(class)))
    }

    fn save(&self, path: &Path) -> Result<()> {
        let (model, encoder) = self.fitted()?;
        write_json(
            path,
            &SavedModel {
                model_type: "random_forest",
                classes: encoder,
                model: SavedForest {
                    trees: &model.models,
                    tree_features: &model.model_features,
                },
            },
        )
    }

    fn name(&self) -> &str {
        "random_forest"
    }
}
