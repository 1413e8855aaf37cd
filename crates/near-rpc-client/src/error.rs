//! Error types for near-rpc-client.
//!
//! # Error Hierarchy
//!
//! - [`RpcError`]: returned by every client operation
//!   - construction: [`RpcError::InvalidUrl`]
//!   - transport: [`RpcError::Http`], [`RpcError::Transport`],
//!     [`RpcError::HttpStatus`], [`RpcError::InvalidResponse`]
//!   - node: [`RpcError::Server`] carrying a [`ServerError`]
//!   - protocol: [`RpcError::EmptyResult`], [`RpcError::Decode`],
//!     [`RpcError::Encode`]
//!
//! # Matching on node errors
//!
//! ```rust,no_run
//! use near_rpc_client::{BlockReference, ErrorCode, RpcClient, RpcError};
//!
//! # async fn example() -> Result<(), RpcError> {
//! let client = RpcClient::testnet();
//!
//! match client.view_account("maybe-exists.testnet", BlockReference::default()).await {
//!     Ok(account) => println!("Balance: {}", account.amount),
//!     Err(RpcError::Server(err)) if err.cause_name() == Some("UNKNOWN_ACCOUNT") => {
//!         println!("Account doesn't exist");
//!     }
//!     Err(RpcError::Server(err)) if err.kind() == ErrorCode::MethodNotFound => {
//!         println!("Node does not support this method");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// RPC Errors
// ============================================================================

/// Errors returned by RPC operations.
#[derive(Debug, Error)]
pub enum RpcError {
    // ─── Configuration ───
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ─── Network/Transport ───
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid JSON-RPC response (HTTP {status}): {source}")]
    InvalidResponse {
        status: u16,
        source: serde_json::Error,
    },

    // ─── Node ───
    #[error(transparent)]
    Server(#[from] ServerError),

    // ─── Protocol ───
    #[error("Response contained neither a result nor an error")]
    EmptyResult,

    #[error("Failed to decode '{method}' result: {source}")]
    Decode {
        method: String,
        source: serde_json::Error,
    },

    #[error("Failed to encode request params: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RpcError {
    /// HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RpcError::Http(e) => e.status().map(|s| s.as_u16()),
            RpcError::HttpStatus { status, .. } | RpcError::InvalidResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The node's error object, if the node answered with one.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            RpcError::Server(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the exchange itself failed (no usable JSON-RPC reply).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RpcError::Http(_)
                | RpcError::Transport(_)
                | RpcError::HttpStatus { .. }
                | RpcError::InvalidResponse { .. }
        )
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// A JSON-RPC error object returned by the node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("RPC error {code}: {message}")]
pub struct ServerError {
    /// Raw JSON-RPC error code.
    pub code: i64,
    /// Error message.
    pub message: String,
    /// Structured error data, when the node supplied it.
    pub data: Option<ErrorData>,
    /// The `data` member exactly as the node sent it.
    pub data_raw: Option<Value>,
}

impl ServerError {
    /// Classify the error code.
    pub fn kind(&self) -> ErrorCode {
        ErrorCode::from_code(self.code)
    }

    /// Top-level error name (e.g. `HANDLER_ERROR`).
    pub fn name(&self) -> Option<&str> {
        self.data.as_ref()?.name.as_deref()
    }

    /// Error cause name (e.g. `UNKNOWN_ACCOUNT`).
    pub fn cause_name(&self) -> Option<&str> {
        self.data.as_ref()?.cause.as_ref()?.name.as_deref()
    }

    /// Error cause details as text.
    pub fn cause_info(&self) -> Option<&str> {
        self.data.as_ref()?.cause.as_ref()?.info.as_deref()
    }

    /// The `data` member when it is a plain message, which is how nodes
    /// usually spell out the specific reason.
    pub fn data_message(&self) -> Option<&str> {
        self.data_raw.as_ref()?.as_str()
    }

    /// Returns true if the node reported a handler error.
    pub fn is_handler_error(&self) -> bool {
        self.name() == Some("HANDLER_ERROR")
    }
}

/// Structured error data: `{name, cause: {name, info}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorData {
    /// Error category, e.g. `HANDLER_ERROR`.
    pub name: Option<String>,
    /// The specific cause.
    pub cause: Option<ErrorCause>,
}

/// Error cause with its details rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCause {
    /// Cause name, e.g. `UNKNOWN_ACCOUNT`.
    pub name: Option<String>,
    /// Cause details; JSON objects are kept as compact JSON text.
    pub info: Option<String>,
}

impl ErrorData {
    /// Extract structured data from a raw JSON-RPC error object.
    ///
    /// The `data` member is consulted first. NEAR nodes usually put a plain
    /// message in `data` and the structure at the top level of the error
    /// object, so `name`/`cause` there are the fallback. Returns `None` when
    /// neither location carries a name or a cause.
    pub fn from_error_object(error: &Value) -> Option<Self> {
        error
            .get("data")
            .and_then(Self::from_structured)
            .or_else(|| Self::from_structured(error))
    }

    fn from_structured(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name").and_then(Value::as_str).map(String::from);
        let cause = obj.get("cause").and_then(ErrorCause::from_value);
        if name.is_none() && cause.is_none() {
            return None;
        }
        Some(ErrorData { name, cause })
    }
}

impl ErrorCause {
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name").and_then(Value::as_str).map(String::from);
        let info = obj.get("info").and_then(|info| match info {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
        Some(ErrorCause { name, info })
    }
}

// ============================================================================
// Error codes
// ============================================================================

/// Classification of JSON-RPC error codes used by NEAR nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ─── JSON-RPC 2.0 ───
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,

    // ─── Server ───
    HandlerError,
    RequestValidationError,
    InternalServerError,
    Timeout,

    // ─── Block/Chunk ───
    UnknownBlock,
    UnknownChunk,

    // ─── Account ───
    UnknownAccount,
    UnknownAccessKey,
    InvalidAccount,

    // ─── Transaction ───
    UnknownTransaction,
    InvalidTransaction,
    TimeoutError,

    // ─── Contract ───
    ContractExecutionError,
    CompilationError,

    // ─── Storage ───
    StorageError,

    /// Any code not in the table.
    Unknown,
}

impl ErrorCode {
    /// Classify a raw code.
    pub fn from_code(code: i64) -> Self {
        match code {
            -32700 => ErrorCode::ParseError,
            -32600 => ErrorCode::InvalidRequest,
            -32601 => ErrorCode::MethodNotFound,
            -32602 => ErrorCode::InvalidParams,
            -32603 => ErrorCode::InternalError,
            -32000 => ErrorCode::HandlerError,
            -32001 => ErrorCode::RequestValidationError,
            -32002 => ErrorCode::InternalServerError,
            -32003 => ErrorCode::Timeout,
            -32100 => ErrorCode::UnknownBlock,
            -32101 => ErrorCode::UnknownChunk,
            -32200 => ErrorCode::UnknownAccount,
            -32201 => ErrorCode::UnknownAccessKey,
            -32202 => ErrorCode::InvalidAccount,
            -32300 => ErrorCode::UnknownTransaction,
            -32301 => ErrorCode::InvalidTransaction,
            -32302 => ErrorCode::TimeoutError,
            -32400 => ErrorCode::ContractExecutionError,
            -32401 => ErrorCode::CompilationError,
            -32500 => ErrorCode::StorageError,
            _ => ErrorCode::Unknown,
        }
    }

    /// The raw code. [`ErrorCode::Unknown`] maps to `0`.
    pub fn code(self) -> i64 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::HandlerError => -32000,
            ErrorCode::RequestValidationError => -32001,
            ErrorCode::InternalServerError => -32002,
            ErrorCode::Timeout => -32003,
            ErrorCode::UnknownBlock => -32100,
            ErrorCode::UnknownChunk => -32101,
            ErrorCode::UnknownAccount => -32200,
            ErrorCode::UnknownAccessKey => -32201,
            ErrorCode::InvalidAccount => -32202,
            ErrorCode::UnknownTransaction => -32300,
            ErrorCode::InvalidTransaction => -32301,
            ErrorCode::TimeoutError => -32302,
            ErrorCode::ContractExecutionError => -32400,
            ErrorCode::CompilationError => -32401,
            ErrorCode::StorageError => -32500,
            ErrorCode::Unknown => 0,
        }
    }
}
