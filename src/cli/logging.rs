use tracing_subscriber::EnvFilter;

/// Installs the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects `debug` and the default is
/// `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("unity_constants={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
