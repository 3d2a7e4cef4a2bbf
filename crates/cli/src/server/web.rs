use axum::Router;
use ledger_dns_api::{create_api_routes, AppState};
use ledger_dns_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn bind_web_server(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let bind_addr: SocketAddr = format!("{}:{}", cfg.bind_address, cfg.web_port).parse()?;
    let listener = TcpListener::bind(bind_addr).await?;

    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    Ok(listener)
}

pub async fn run_web_server(
    listener: TcpListener,
    state: AppState,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let app = create_app(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown.borrow() {
                if shutdown.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
