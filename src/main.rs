fn main() {
    level_gen::app::cli::run();
}
