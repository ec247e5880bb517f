use rootwalk_domain::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only lookup output.
///
/// `RUST_LOG` takes precedence over the configured level; `--verbose`
/// raises the configured level to `debug`.
pub fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
