fn main() {
    if let Err(error) = build_analytics::run_cli() {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}
