//! Train, evaluate and save one classifier on a pair of fixed-schema CSV files.
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Serialize;

use csvml_classifiers::config::{ModelConfig, ModelType};
use csvml_classifiers::data_handling::Schema;
use csvml_classifiers::evaluation::{evaluate, EvaluationReport};
use csvml_classifiers::io::read_fixed_csv;
use csvml_classifiers::models::factory::build_model;

/// Everything one benchmark run needs.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub train_file: PathBuf,
    pub test_file: PathBuf,
    pub output_file: PathBuf,
    pub model: ModelConfig,
    pub train_schema: Schema,
    pub test_schema: Schema,
}

impl RunConfig {
    /// Fixed training/testing shapes and the model's default output path.
    pub fn new(train_file: PathBuf, test_file: PathBuf, model_type: ModelType) -> Self {
        Self {
            train_file,
            test_file,
            output_file: model_type.default_output(),
            model: ModelConfig::new(model_type),
            train_schema: Schema::training(),
            test_schema: Schema::testing(),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: EvaluationReport,
    /// From the start of the run through the end of fitting (includes loading).
    pub modeling: Duration,
    pub testing: Duration,
    pub output_file: PathBuf,
}

/// Run with progress and results written to stdout.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

pub fn run_with_output<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    let start = Instant::now();
    log::debug!(
        "Run configuration:\n{}",
        serde_json::to_string_pretty(config).unwrap_or_default()
    );

    let train = read_fixed_csv(&config.train_file, &config.train_schema)
        .context("Failed to load training data")?;
    let test = read_fixed_csv(&config.test_file, &config.test_schema)
        .context("Failed to load testing data")?;
    log::info!(
        "Loaded {} training and {} testing samples",
        train.nrows(),
        test.nrows()
    );

    writeln!(out, "\nUsing training file: {}", config.train_file.display())?;

    let mut model = build_model(config.model.clone());
    log::info!("Fitting {} model", model.name());
    model.fit(&train.x, &train.y)?;
    let modeling = start.elapsed();

    writeln!(out, "\nUsing testing file: {}", config.test_file.display())?;

    let test_start = Instant::now();
    let report = evaluate(model.as_ref(), &test)?;
    let testing = test_start.elapsed();

    let summary = RunSummary {
        report,
        modeling,
        testing,
        output_file: config.output_file.clone(),
    };
    write_summary(out, &summary)?;

    model.save(&config.output_file)?;
    log::info!(
        "Saved {} model to {}",
        model.name(),
        config.output_file.display()
    );

    Ok(summary)
}

pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> std::io::Result<()> {
    let report = &summary.report;
    writeln!(out, "\nTest Results:")?;
    writeln!(
        out,
        "\tCorrect classifications: {} ({:.4}%)",
        report.correct,
        report.correct_pct()
    )?;
    writeln!(
        out,
        "\tIncorrect classifications: {} ({:.4}%)",
        report.incorrect,
        report.incorrect_pct()
    )?;
    writeln!(out, "\tModeling: {:.6} sec.", summary.modeling.as_secs_f32())?;
    writeln!(out, "\tTesting: {:.6} sec.", summary.testing.as_secs_f32())?;
    Ok(())
}
