use tracing_subscriber::EnvFilter;

/// Default filter directive for the given output mode. Quiet wins over verbose.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber, writing to stderr so reports on stdout stay clean.
///
/// `RUST_LOG` takes precedence over the quiet/verbose flags when set.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
