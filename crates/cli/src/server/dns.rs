use hickory_server::server::ServerFuture;
use ledger_dns_domain::config::ServerConfig;
use ledger_dns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// Binds the DNS sockets up front so that a busy port fails startup instead
/// of a background task.
pub async fn bind_dns_server(
    cfg: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<ServerFuture<DnsServerHandler>> {
    let socket_addr: SocketAddr = format!("{}:{}", cfg.bind_address, cfg.dns_port).parse()?;

    let mut server = ServerFuture::new(handler);

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    info!(bind_address = %socket_addr, "UDP socket bound");
    server.register_socket(udp_socket);

    if cfg.tcp_enabled {
        let tcp_listener = TcpListener::bind(socket_addr).await?;
        info!(bind_address = %socket_addr, "TCP listener bound");
        server.register_listener(tcp_listener, TCP_TIMEOUT);
    }

    info!(bind_address = %socket_addr, tcp = cfg.tcp_enabled, "DNS server ready");

    Ok(server)
}

pub async fn run_dns_server(mut server: ServerFuture<DnsServerHandler>) -> anyhow::Result<()> {
    server.block_until_done().await?;
    Ok(())
}
