use ledger_dns_domain::{CliOverrides, Config};

/// Loads the configuration file (if any), applies CLI overrides and
/// validates the result. Runs before logging is up, so failures are only
/// reported through the returned error.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
