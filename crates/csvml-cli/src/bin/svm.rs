use csvml_classifiers::config::ModelType;

fn main() {
    std::process::exit(csvml_cli::app::run_program(
        "csvml-svm",
        "Train and evaluate an RBF-kernel support vector machine",
        ModelType::svm(),
    ));
}
