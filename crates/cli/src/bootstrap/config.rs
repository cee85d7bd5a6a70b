use minidns_domain::{CliOverrides, Config};

/// Loads, overrides and validates the configuration.
///
/// Runs before logging is set up, so problems surface as the returned error
/// rather than log lines.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
