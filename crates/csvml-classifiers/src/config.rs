use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
///
/// The defaults reproduce the settings the benchmark programs have always
/// trained with; they are not meant to be tuned from the command line.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    GBDT {
        learning_rate: f32,
        max_depth: u32,
        num_boost_round: u32,
        min_leaf_size: usize,
        /// Fraction of samples drawn for each boosting round.
        data_sample_ratio: f64,
        debug: bool,
        training_optimization_level: u8,
        loss_type: String,
    },
    RandomForest {
        n_trees: usize,
        max_depth: usize,
        min_weight_split: f32,
        bootstrap_proportion: f64,
        /// Fraction of the attributes each tree may split on.
        feature_proportion: f64,
    },
    SVM {
        eps: f64,
        c: (f64, f64),
        gaussian_kernel_eps: f64,
    },
}

impl ModelType {
    pub fn gbdt() -> Self {
        ModelType::GBDT {
            learning_rate: 1.0,
            max_depth: 25,
            num_boost_round: 100,
            min_leaf_size: 5,
            data_sample_ratio: 0.95,
            debug: false,
            training_optimization_level: 2,
            loss_type: "LogLikelyhood".to_string(),
        }
    }

    pub fn random_forest() -> Self {
        ModelType::RandomForest {
            n_trees: 100,
            max_depth: 25,
            min_weight_split: 5.0,
            bootstrap_proportion: 1.0,
            // 4 of the 10 attributes
            feature_proportion: 0.4,
        }
    }

    pub fn svm() -> Self {
        // Gaussian kernel exp(-|x - y|^2 / eps) with eps = 1 is an RBF kernel with gamma = 1.
        ModelType::SVM {
            eps: f32::EPSILON as f64,
            c: (1.0, 1.0),
            gaussian_kernel_eps: 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelType::GBDT { .. } => "gbdt",
            ModelType::RandomForest { .. } => "random_forest",
            ModelType::SVM { .. } => "svm",
        }
    }

    /// Relative path the trained model is written to.
    pub fn default_output(&self) -> PathBuf {
        match self {
            ModelType::GBDT { .. } => PathBuf::from("trainedBoost.xml"),
            ModelType::RandomForest { .. } => PathBuf::from("trainedForest.xml"),
            ModelType::SVM { .. } => PathBuf::from("trainedSVM.xml"),
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::gbdt()
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbdt" | "boost" => Ok(ModelType::gbdt()),
            "random_forest" | "forest" => Ok(ModelType::random_forest()),
            "svm" => Ok(ModelType::svm()),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: gbdt, random_forest, svm",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self { model_type }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::default(),
        }
    }
}
