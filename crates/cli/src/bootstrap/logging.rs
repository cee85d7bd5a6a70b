use minidns_domain::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr.
///
/// The filter comes from `--log-level` when given, then `RUST_LOG`, then
/// the configured level.
pub fn init_logging(config: &Config, explicit_level: Option<&str>) {
    let directive = filter_directive(
        explicit_level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.logging.level,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn filter_directive(explicit: Option<&str>, env: Option<String>, configured: &str) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| env.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| configured.to_string())
}
