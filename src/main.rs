fn main() {
    starter_bootstrap::app::cli::run();
}
