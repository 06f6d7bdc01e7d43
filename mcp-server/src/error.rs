use thiserror::Error;

use crate::protocol::{error_codes, McpProtocolError};

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type McpResult<T> = Result<T, McpError>;

impl McpError {
    /// JSON-RPC error code reported for this error
    pub fn code(&self) -> i32 {
        match self {
            Self::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            Self::InvalidParams(_) | Self::Tool(_) => error_codes::INVALID_PARAMS,
            Self::Serialization(_) | Self::Transport(_) | Self::Io(_) => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn to_protocol_error(&self) -> McpProtocolError {
        McpProtocolError {
            code: self.code(),
            message: self.to_string(),
            data: None,
        }
    }
}
