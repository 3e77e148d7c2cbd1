fn main() {
    qapdf::app::cli::run();
}
