fn main() {
    std::process::exit(conversio::cli::run());
}
