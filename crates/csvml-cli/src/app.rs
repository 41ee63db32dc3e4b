//! Command-line entry point shared by the `csvml-boost`, `csvml-forest` and
//! `csvml-svm` binaries.
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use csvml_classifiers::config::ModelType;

use crate::runner::{self, RunConfig};

/// Exit status for usage errors and failed runs.
pub const EXIT_FAILURE: i32 = -1;

pub fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CSVML_LOG", "error,csvml=info"))
        .init();
}

pub fn build_command(bin_name: &'static str, about: &'static str) -> Command {
    Command::new(bin_name)
        .version(clap::crate_version!())
        .about(about)
        .arg(
            Arg::new("training_csv")
                .help("Training data: 8672 lines of 10 features and a class label")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("test_csv")
                .help("Testing data: 8671 lines of 10 features and a class label")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}

/// Parse arguments, run the benchmark for `model_type` and return the exit status.
pub fn run_program(bin_name: &'static str, about: &'static str, model_type: ModelType) -> i32 {
    init_logging();

    let matches = match build_command(bin_name, about).try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_FAILURE,
            };
        }
    };

    let config = config_from_matches(&matches, model_type);
    log::info!(
        "[csvml::{}] Training {} with linfa/gbdt backends (csvml {})",
        bin_name,
        config.model.model_type.name(),
        clap::crate_version!()
    );

    match runner::run(&config) {
        Ok(_) => 0,
        Err(e) => {
            log::error!("Run failed: {:#}", e);
            EXIT_FAILURE
        }
    }
}

fn config_from_matches(matches: &ArgMatches, model_type: ModelType) -> RunConfig {
    let train_file = matches
        .get_one::<PathBuf>("training_csv")
        .cloned()
        .unwrap_or_default();
    let test_file = matches
        .get_one::<PathBuf>("test_csv")
        .cloned()
        .unwrap_or_default();
    RunConfig::new(train_file, test_file, model_type)
}
