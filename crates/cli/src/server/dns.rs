use anyhow::Context;
use minidns_domain::dns_message::MAX_UDP_MESSAGE_SIZE;
use minidns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

/// Binds `bind_addr` and serves datagrams one at a time until the process
/// is stopped. Only the bind can fail; per-datagram errors are logged.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", bind_addr))?;

    let socket = UdpSocket::bind(socket_addr)
        .await
        .with_context(|| format!("Failed to bind UDP socket on {}", socket_addr))?;

    info!(bind_address = %socket.local_addr()?, "DNS server listening");

    run_udp_loop(&socket, &handler).await;
    Ok(())
}

async fn run_udp_loop(socket: &UdpSocket, handler: &DnsServerHandler) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "Failed to receive datagram");
                continue;
            }
        };

        let Some(response) = handler.handle_datagram(&recv_buf[..len], from) else {
            continue;
        };

        match socket.send_to(&response, from).await {
            Ok(sent) => debug!(client = %from, bytes = sent, "Response sent"),
            Err(e) => error!(client = %from, error = %e, "Failed to send response"),
        }
    }
}
