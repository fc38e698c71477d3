fn main() {
    replgen::app::cli::run();
}
