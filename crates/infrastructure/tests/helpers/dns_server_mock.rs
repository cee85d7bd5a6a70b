#![allow(dead_code)]
use minidns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock does with each datagram it receives.
#[derive(Clone)]
pub enum MockBehavior {
    /// Answer through a real handler.
    Serve(Arc<DnsServerHandler>),
    /// Answer through a real handler, then flip the id.
    WrongId(Arc<DnsServerHandler>),
    /// Read and never answer.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds 127.0.0.1 on an OS-assigned port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::respond(&behavior, &buf[..len], peer) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn serving(handler: DnsServerHandler) -> Self {
        Self::start(MockBehavior::Serve(Arc::new(handler)))
            .await
            .unwrap()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn respond(behavior: &MockBehavior, query: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Serve(handler) => handler.handle_datagram(query, peer),
            MockBehavior::WrongId(handler) => {
                let mut response = handler.handle_datagram(query, peer)?;
                response[0] ^= 0xFF;
                Some(response)
            }
            MockBehavior::Silent => None,
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
