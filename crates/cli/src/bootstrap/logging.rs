use ledger_dns_domain::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(default_directives(&config.logging.level))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!(
        "warn,ledger_dns={level},ledger_dns_application={level},ledger_dns_infrastructure={level},ledger_dns_api={level}"
    )
}
