use placeholder::PlaceholderConfig;

fn main() {
    init_tracing();

    // The outcome is already reported on stdout; a failure still exits 0.
    let _ = placeholder::create_placeholder_image(&PlaceholderConfig::default());
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
