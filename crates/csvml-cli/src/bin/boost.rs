use csvml_classifiers::config::ModelType;

fn main() {
    std::process::exit(csvml_cli::app::run_program(
        "csvml-boost",
        "Train and evaluate a boosted tree (GBDT) classifier",
        ModelType::gbdt(),
    ));
}
