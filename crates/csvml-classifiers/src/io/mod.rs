//! IO utilities for loading the fixed-schema CSV files.

pub mod fixed_csv;

pub use fixed_csv::{read_fixed_csv, read_fixed_csv_into};
