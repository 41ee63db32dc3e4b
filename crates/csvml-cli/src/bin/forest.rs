use csvml_classifiers::config::ModelType;

fn main() {
    std::process::exit(csvml_cli::app::run_program(
        "csvml-forest",
        "Train and evaluate a random forest classifier",
        ModelType::random_forest(),
    ));
}
