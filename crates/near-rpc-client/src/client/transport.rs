//! JSON-RPC 2.0 transport.

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::http::{HttpClient, HttpRequest};
use crate::error::{ErrorData, RpcError, ServerError};
use crate::types::naming::{KeyCase, rename_keys};

/// JSON-RPC request structure.
#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'a str,
    method: &'a str,
    params: Value,
}

/// JSON-RPC response structure.
#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// JSON-RPC error structure. Everything besides `code` and `message`
/// (`data`, and NEAR's top-level `name`/`cause`) is kept raw in `rest`.
#[derive(Deserialize)]
struct JsonRpcError {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Generate a fresh request id: 128 random bits, hex encoded.
fn new_request_id() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

/// Sends JSON-RPC calls to a single endpoint.
///
/// Params are renamed from the in-memory key convention to the wire
/// convention on the way out and results are renamed back on the way in.
/// Both conventions are fixed at construction.
///
/// Every call carries a fresh random id. The id echoed in the response is
/// not checked against the request; each call owns its own HTTP exchange, so
/// there is nothing to correlate.
pub struct JsonRpcTransport {
    url: String,
    http: Arc<dyn HttpClient>,
    outbound: KeyCase,
    inbound: KeyCase,
}

impl JsonRpcTransport {
    /// Create a transport speaking `snake_case` on the wire and `camelCase`
    /// in memory.
    pub fn new(url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self::with_key_cases(url, http, KeyCase::Snake, KeyCase::Camel)
    }

    /// Create a transport with an explicit key convention pair.
    pub fn with_key_cases(
        url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        outbound: KeyCase,
        inbound: KeyCase,
    ) -> Self {
        Self {
            url: url.into(),
            http,
            outbound,
            inbound,
        }
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a typed RPC call.
    pub async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<R, RpcError> {
        let params = serde_json::to_value(params).map_err(RpcError::Encode)?;
        let result = self.call_raw(method, params).await?;

        serde_json::from_value(result).map_err(|source| RpcError::Decode {
            method: method.to_string(),
            source,
        })
    }

    /// Make an untyped RPC call.
    ///
    /// Same pipeline as [`call`](Self::call); the result is returned as JSON
    /// with its keys in the in-memory convention.
    pub async fn call_raw(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = new_request_id();
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: &id,
            method,
            params: rename_keys(params, self.outbound),
        };
        let body = serde_json::to_vec(&request).map_err(RpcError::Encode)?;

        debug!(method, id = %id, url = %self.url, "sending RPC request");
        let response = self
            .http
            .send(HttpRequest::post_json(self.url.as_str(), body))
            .await?;
        trace!(
            method,
            id = %id,
            status = response.status,
            body = %response.body_text(),
            "received RPC response"
        );

        // The body is an envelope on success and on most node errors,
        // whatever the HTTP status.
        let envelope: JsonRpcResponse = match serde_json::from_slice(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(RpcError::HttpStatus {
                    status: response.status,
                    body: response.body_text(),
                });
            }
            Err(source) => {
                return Err(RpcError::InvalidResponse {
                    status: response.status,
                    source,
                });
            }
        };

        if let Some(error) = envelope.error {
            return Err(RpcError::Server(server_error(method, error)));
        }

        envelope
            .result
            .map(|result| rename_keys(result, self.inbound))
            .ok_or(RpcError::EmptyResult)
    }
}

fn server_error(method: &str, error: JsonRpcError) -> ServerError {
    let raw = Value::Object(error.rest);
    let data = ErrorData::from_error_object(&raw);
    let data_raw = raw.get("data").filter(|d| !d.is_null()).cloned();
    debug!(method, code = error.code, message = %error.message, "RPC error response");

    ServerError {
        code: error.code,
        message: error.message,
        data,
        data_raw,
    }
}

impl std::fmt::Debug for JsonRpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcTransport")
            .field("url", &self.url)
            .field("outbound", &self.outbound)
            .field("inbound", &self.inbound)
            .finish()
    }
}
