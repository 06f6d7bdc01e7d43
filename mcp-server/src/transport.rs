//! Transport layer for MCP
//!
//! Requests arrive one JSON document per line; each response is written as
//! one line.

use std::string::FromUtf8Error;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::McpResult;
use crate::server::Server;

/// One line read off the wire
#[derive(Debug)]
pub enum InboundMessage {
    Text(String),
    /// Bytes that are not UTF-8; answered with a parse error
    Undecodable(FromUtf8Error),
}

/// MCP Transport abstraction
#[async_trait]
pub trait Transport: Send {
    /// Read the next non-blank line, `None` once the peer has gone away
    async fn read_request(&mut self) -> McpResult<Option<InboundMessage>>;

    /// Write one response line
    async fn write_response(&mut self, response: &str) -> McpResult<()>;
}

/// Newline-delimited JSON-RPC over any async reader/writer pair
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

/// Transport bound to the process stdin/stdout
pub type StdioTransport = LineTransport<BufReader<Stdin>, Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[async_trait]
impl<R, W> Transport for LineTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_request(&mut self) -> McpResult<Option<InboundMessage>> {
        loop {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line).await? == 0 {
                return Ok(None);
            }
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return Ok(Some(match String::from_utf8(line) {
                Ok(text) => InboundMessage::Text(text.trim().to_string()),
                Err(error) => InboundMessage::Undecodable(error),
            }));
        }
    }

    async fn write_response(&mut self, response: &str) -> McpResult<()> {
        self.writer.write_all(response.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Serve requests from `transport` until it reaches end of input
pub async fn serve<T: Transport>(server: &Server, transport: &mut T) -> McpResult<()> {
    tracing::info!("MCP transport loop started");
    while let Some(message) = transport.read_request().await? {
        let response = match message {
            InboundMessage::Text(text) => server.handle_message(&text).await,
            InboundMessage::Undecodable(error) => {
                tracing::warn!(bytes = error.as_bytes().len(), "Discarding non UTF-8 MCP message");
                Some(Server::parse_error(error))
            }
        };
        if let Some(response) = response {
            let encoded = serde_json::to_string(&response)?;
            transport.write_response(&encoded).await?;
        }
    }
    tracing::info!("MCP transport closed");
    Ok(())
}
