use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::gbdt::GBDTClassifier;
use crate::models::random_forest::RandomForestClassifier;
use crate::models::svm::SVMClassifier;

/// Build a boxed classifier model from a `ModelConfig`.
pub fn build_model(params: ModelConfig) -> Box<dyn ClassifierModel> {
    match params.model_type {
        ModelType::GBDT { .. } => Box::new(GBDTClassifier::new(params)),
        ModelType::RandomForest { .. } => Box::new(RandomForestClassifier::new(params)),
        ModelType::SVM { .. } => Box::new(SVMClassifier::new(params)),
    }
}
