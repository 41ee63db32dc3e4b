//! csvml-classifiers: fixed-schema CSV loading and classifier wrappers.
//!
//! This crate reads the fixed-shape CSV files used by the `csvml-*` programs,
//! wraps three external classifiers (GBDT from `gbdt`, a bagged decision-tree
//! forest from `linfa-ensemble`/`linfa-trees`, and an SVM from `linfa-svm`)
//! behind a single trait, and measures held-out accuracy.
//!
//! All fitting and prediction is delegated to those libraries; the code here
//! only shapes data for them and reports on the results.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
