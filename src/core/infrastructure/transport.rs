//! Transport seam between the query client and the controller.
//!
//! The client only ever talks to the [`Connector`] and [`Connection`]
//! traits; the production implementation dials the controller over TCP and
//! frames each [`WireMessage`] as a 4-byte big-endian length prefix
//! followed by the JSON-encoded envelope.

use crate::core::domain::error::{SlurmError, SlurmResult};
use crate::core::domain::model::ControllerEndpoint;
use crate::core::infrastructure::protocol::WireMessage;
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// Upper bound on a single frame. Guards against a garbage length prefix
/// causing an absurd allocation.
const MAX_FRAME_BYTES: u32 = 64 * 1024 * 1024;

/// Opens connections to the controller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    /// Establishes one connection to the given endpoint.
    ///
    /// # Errors
    /// Returns `SlurmError::Connection` if the endpoint is unreachable,
    /// refuses the connection, or times out.
    async fn open(&self, endpoint: &ControllerEndpoint) -> SlurmResult<Box<dyn Connection>>;
}

/// One established message connection to the controller.
///
/// Connections are single-use: one request, one response, then `close`.
/// After any send or receive error the connection must not be reused.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Connection: Send {
    /// Sends one message.
    ///
    /// # Errors
    /// Returns `SlurmError::Transport` on write failure.
    async fn send(&mut self, msg: &WireMessage) -> SlurmResult<()>;

    /// Blocks until one message is received.
    ///
    /// # Errors
    /// Returns `SlurmError::Transport` on read failure and
    /// `SlurmError::Protocol` if the frame is not a valid envelope.
    async fn receive(&mut self) -> SlurmResult<WireMessage>;

    /// Shuts the connection down. The connection is unusable afterwards.
    ///
    /// # Errors
    /// Returns `SlurmError::Transport` if the shutdown handshake fails.
    async fn close(&mut self) -> SlurmResult<()>;
}

/// Production [`Connector`] that dials the controller over TCP.
#[derive(Debug, Default)]
pub struct TcpConnector;

impl TcpConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Connector for TcpConnector {
    async fn open(&self, endpoint: &ControllerEndpoint) -> SlurmResult<Box<dyn Connection>> {
        let address = endpoint.address();
        debug!(%address, "dialing controller");
        let stream = TcpStream::connect(&address).await.map_err(|e| {
            SlurmError::Connection(format!("Failed to connect to {}: {}", address, e))
        })?;
        Ok(Box::new(TcpConnection { stream }))
    }
}

/// A framed TCP connection to the controller.
struct TcpConnection {
    stream: TcpStream,
}

#[async_trait]
impl Connection for TcpConnection {
    async fn send(&mut self, msg: &WireMessage) -> SlurmResult<()> {
        let body = serde_json::to_vec(msg)
            .map_err(|e| SlurmError::Protocol(format!("Failed to encode message: {}", e)))?;
        let len = u32::try_from(body.len())
            .map_err(|_| SlurmError::Protocol("Message exceeds frame size limit".to_string()))?;
        self.stream
            .write_all(&len.to_be_bytes())
            .await
            .map_err(|e| SlurmError::Transport(format!("Failed to send message: {}", e)))?;
        self.stream
            .write_all(&body)
            .await
            .map_err(|e| SlurmError::Transport(format!("Failed to send message: {}", e)))?;
        Ok(())
    }

    async fn receive(&mut self) -> SlurmResult<WireMessage> {
        let mut len_bytes = [0u8; 4];
        self.stream
            .read_exact(&mut len_bytes)
            .await
            .map_err(|e| SlurmError::Transport(format!("Failed to read frame header: {}", e)))?;
        let len = u32::from_be_bytes(len_bytes);
        if len > MAX_FRAME_BYTES {
            return Err(SlurmError::Protocol(format!(
                "Frame of {} bytes exceeds limit of {} bytes",
                len, MAX_FRAME_BYTES
            )));
        }
        let mut body = vec![0u8; len as usize];
        self.stream
            .read_exact(&mut body)
            .await
            .map_err(|e| SlurmError::Transport(format!("Failed to read frame body: {}", e)))?;
        serde_json::from_slice(&body)
            .map_err(|e| SlurmError::Protocol(format!("Failed to decode message: {}", e)))
    }

    async fn close(&mut self) -> SlurmResult<()> {
        self.stream
            .shutdown()
            .await
            .map_err(|e| SlurmError::Transport(format!("Failed to shut down connection: {}", e)))
    }
}
