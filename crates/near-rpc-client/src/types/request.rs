//! Typed parameters for the `query` RPC method.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use super::block_reference::BlockReference;

/// The payload of a `query` request, discriminated by `request_type`.
///
/// Binary payloads (`prefix_base64`, `args_base64`) are carried already
/// encoded; use [`QueryRequest::view_state`] and
/// [`QueryRequest::call_function`] to build them from raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "requestType",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum QueryRequest {
    /// Account balance, storage and code hash.
    ViewAccount {
        /// Account to view.
        account_id: String,
    },
    /// A single access key of an account.
    ViewAccessKey {
        /// Account owning the key.
        account_id: String,
        /// Public key, e.g. `ed25519:...`.
        public_key: String,
    },
    /// All access keys of an account.
    ViewAccessKeyList {
        /// Account owning the keys.
        account_id: String,
    },
    /// Contract storage under a key prefix.
    ViewState {
        /// Contract account.
        account_id: String,
        /// Key prefix (base64); empty selects all keys.
        prefix_base64: String,
    },
    /// A read-only contract call.
    CallFunction {
        /// Contract account.
        account_id: String,
        /// View method to call.
        method_name: String,
        /// Call arguments (base64).
        args_base64: String,
    },
}

impl QueryRequest {
    /// A `view_state` request for keys under `prefix`.
    pub fn view_state(account_id: impl Into<String>, prefix: &[u8]) -> Self {
        QueryRequest::ViewState {
            account_id: account_id.into(),
            prefix_base64: STANDARD.encode(prefix),
        }
    }

    /// A `call_function` request with raw argument bytes.
    pub fn call_function(
        account_id: impl Into<String>,
        method_name: impl Into<String>,
        args: &[u8],
    ) -> Self {
        QueryRequest::CallFunction {
            account_id: account_id.into(),
            method_name: method_name.into(),
            args_base64: STANDARD.encode(args),
        }
    }

    /// The `request_type` discriminant of this request.
    pub fn request_type(&self) -> RequestType {
        match self {
            QueryRequest::ViewAccount { .. } => RequestType::ViewAccount,
            QueryRequest::ViewAccessKey { .. } => RequestType::ViewAccessKey,
            QueryRequest::ViewAccessKeyList { .. } => RequestType::ViewAccessKeyList,
            QueryRequest::ViewState { .. } => RequestType::ViewState,
            QueryRequest::CallFunction { .. } => RequestType::CallFunction,
        }
    }

    /// The account the query targets.
    pub fn account_id(&self) -> &str {
        match self {
            QueryRequest::ViewAccount { account_id }
            | QueryRequest::ViewAccessKey { account_id, .. }
            | QueryRequest::ViewAccessKeyList { account_id }
            | QueryRequest::ViewState { account_id, .. }
            | QueryRequest::CallFunction { account_id, .. } => account_id,
        }
    }
}

/// Discriminant of a [`QueryRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// `view_account`
    ViewAccount,
    /// `view_access_key`
    ViewAccessKey,
    /// `view_access_key_list`
    ViewAccessKeyList,
    /// `view_state`
    ViewState,
    /// `call_function`
    CallFunction,
}

impl RequestType {
    /// The wire value of the discriminant.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::ViewAccount => "view_account",
            RequestType::ViewAccessKey => "view_access_key",
            RequestType::ViewAccessKeyList => "view_access_key_list",
            RequestType::ViewState => "view_state",
            RequestType::CallFunction => "call_function",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full `query` params: the request merged with its block reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// What to query.
    #[serde(flatten)]
    pub request: QueryRequest,
    /// Block to query at.
    #[serde(flatten)]
    pub block: BlockReference,
}

impl QueryParams {
    /// Pair a request with the block it should run against.
    pub fn new(request: QueryRequest, block: BlockReference) -> Self {
        Self { request, block }
    }
}
