use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter level.
pub fn level_from_verbosity(count: u8) -> &'static str {
    match count {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber on stderr. `RUST_LOG` takes precedence
/// over the verbosity flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_from_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
