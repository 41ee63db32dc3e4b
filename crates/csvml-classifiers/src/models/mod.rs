pub mod gbdt;
pub mod random_forest;
pub mod svm;
pub mod utils;

pub mod classifier_trait;
pub mod factory;
