// SPDX-License-Identifier: MIT

//! Live device stream.
//!
//! The mat pushes one base64-encoded JPEG per WebSocket text message; each
//! frame unconditionally replaces the previous one. There is no outbound
//! traffic and no reconnect on drop.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::error::{PortalError, Result};

/// One image frame from the device.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    base64: String,
}

impl Frame {
    /// Raw base64 payload as received.
    pub fn payload(&self) -> &str {
        &self.base64
    }

    /// The frame as a `data:` URI, suitable for an image element's source.
    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.base64)
    }

    /// Decoded JPEG bytes.
    pub fn jpeg_bytes(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.base64)
            .map_err(|e| PortalError::Stream(format!("frame base64: {}", e)))
    }
}

/// Open WebSocket connection to the device stream endpoint.
pub struct DeviceStream {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl DeviceStream {
    /// Connect to the stream endpoint.
    pub async fn connect(url: &str) -> Result<Self> {
        let (ws, _) = connect_async(url).await.map_err(|e| {
            tracing::error!(url, error = %e, "Device stream connection failed");
            PortalError::Stream(e.to_string())
        })?;

        tracing::info!(url, "Connected to device stream");
        Ok(Self { ws })
    }

    /// Wait for the next frame. Returns `None` once the connection closes.
    ///
    /// Non-text messages (pings, binary) are not frames and are skipped.
    pub async fn next_frame(&mut self) -> Option<Result<Frame>> {
        while let Some(message) = self.ws.next().await {
            match message {
                Ok(Message::Text(payload)) => return Some(Ok(Frame { base64: payload })),
                Ok(Message::Close(_)) => return None,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Device stream error");
                    return Some(Err(PortalError::Stream(e.to_string())));
                }
            }
        }
        None
    }
}
