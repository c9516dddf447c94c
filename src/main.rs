fn main() {
    djboot::app::cli::run();
}
