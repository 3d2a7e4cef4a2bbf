use clap::Parser;
use ledger_dns_domain::CliOverrides;
use std::future::pending;
use tokio::sync::watch;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ledger-dns")]
#[command(version)]
#[command(about = "Ledger DNS - authoritative DNS responder backed by a SQLite record store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting Ledger DNS v{}", env!("CARGO_PKG_VERSION"));

    let (write_pool, read_pool) =
        bootstrap::init_database(&config.database.url(), &config.database).await?;

    let repos = di::Repositories::new(write_pool, read_pool);
    let use_cases = di::UseCases::new(&config, &repos);

    let dns_server = server::bind_dns_server(
        &config.server,
        use_cases.dns_handler(&config.dns),
    )
    .await?;
    let mut dns_task = tokio::spawn(server::run_dns_server(dns_server));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut web_task = if config.server.api_enabled {
        let listener = server::bind_web_server(&config.server).await?;
        Some(tokio::spawn(server::run_web_server(
            listener,
            use_cases.app_state(),
            shutdown_rx,
        )))
    } else {
        info!("Management API disabled");
        None
    };

    let mut web_finished = false;

    tokio::select! {
        result = &mut dns_task => {
            report_exit("DNS server", result);
        }
        result = async {
            match web_task.as_mut() {
                Some(task) => task.await,
                None => pending().await,
            }
        } => {
            report_exit("Web server", result);
            web_finished = true;
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
    }

    let _ = shutdown_tx.send(true);
    dns_task.abort();

    if let Some(task) = web_task.filter(|_| !web_finished) {
        report_exit("Web server", task.await);
    }

    info!("Server shutdown complete");
    Ok(())
}

fn report_exit(component: &str, result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => info!("{} stopped", component),
        Ok(Err(e)) => error!(error = %e, "{} failed", component),
        Err(e) if e.is_cancelled() => {}
        Err(e) => error!(error = %e, "{} task panicked", component),
    }
}
