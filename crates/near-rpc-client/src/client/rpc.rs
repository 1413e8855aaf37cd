//! Typed JSON-RPC client for NEAR.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::debug;

use super::http::HttpClient;
use super::transport::JsonRpcTransport;
use crate::error::{ErrorCause, ErrorCode, ErrorData, RpcError, ServerError};
use crate::types::{
    AccessKeyList, AccessKeyView, AccountView, BlockId, BlockReference, BlockView,
    FunctionCallResult, GasPrice, QueryParams, QueryRequest, StateResult, StatusView,
    ValidatorStakeView,
};

/// Network configuration presets.
pub struct NetworkConfig {
    /// The RPC URL for this network.
    pub rpc_url: &'static str,
    /// The network identifier (e.g., "mainnet", "testnet").
    pub network_id: &'static str,
}

/// Mainnet configuration.
pub const MAINNET: NetworkConfig = NetworkConfig {
    rpc_url: "https://rpc.mainnet.near.org",
    network_id: "mainnet",
};

/// Testnet configuration.
pub const TESTNET: NetworkConfig = NetworkConfig {
    rpc_url: "https://rpc.testnet.near.org",
    network_id: "testnet",
};

/// Typed JSON-RPC client for NEAR.
///
/// Cloning is cheap and clones share the underlying transport.
///
/// # Example
///
/// ```rust,no_run
/// use near_rpc_client::{BlockReference, RpcClient};
///
/// # async fn example() -> Result<(), near_rpc_client::RpcError> {
/// let client = RpcClient::testnet();
/// let account = client
///     .view_account("example.testnet", BlockReference::default())
///     .await?;
/// println!("{} yoctoNEAR at block {}", account.amount, account.block_height);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<JsonRpcTransport>,
}

impl RpcClient {
    /// Create a client for the given URL using a default HTTP client.
    pub fn new(url: impl Into<String>) -> Result<Self, RpcError> {
        Self::builder(url).build()
    }

    /// Start configuring a client for the given URL.
    pub fn builder(url: impl Into<String>) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    /// Client for a network preset.
    pub fn from_network(network: &NetworkConfig) -> Self {
        Self::from_transport(JsonRpcTransport::new(
            network.rpc_url,
            Arc::new(reqwest::Client::new()),
        ))
    }

    /// Client for mainnet.
    pub fn mainnet() -> Self {
        Self::from_network(&MAINNET)
    }

    /// Client for testnet.
    pub fn testnet() -> Self {
        Self::from_network(&TESTNET)
    }

    /// Wrap an existing transport.
    pub fn from_transport(transport: JsonRpcTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Get the RPC URL.
    pub fn url(&self) -> &str {
        self.transport.url()
    }

    /// The underlying transport, for methods without a typed wrapper.
    pub fn transport(&self) -> &JsonRpcTransport {
        &self.transport
    }

    // ========================================================================
    // Node and blocks
    // ========================================================================

    /// Get node status.
    pub async fn status(&self) -> Result<StatusView, RpcError> {
        self.transport.call("status", json!([])).await
    }

    /// Get a block.
    pub async fn block(&self, block: BlockReference) -> Result<BlockView, RpcError> {
        self.transport.call("block", block).await
    }

    /// Get a block by height.
    pub async fn block_by_height(&self, height: u64) -> Result<BlockView, RpcError> {
        self.block(BlockReference::at_height(height)).await
    }

    /// Get a block by hash.
    pub async fn block_by_hash(&self, hash: impl Into<String>) -> Result<BlockView, RpcError> {
        self.block(BlockReference::at_hash(hash)).await
    }

    /// Get gas price at a block, or at the node's latest block when `None`.
    ///
    /// These methods take a positional block id only; the node has no
    /// finality selector for them.
    pub async fn gas_price(&self, block_id: Option<BlockId>) -> Result<GasPrice, RpcError> {
        self.transport.call("gas_price", [block_id]).await
    }

    /// Get validators for the epoch of a block, or of the node's latest
    /// block when `None`.
    pub async fn validators(
        &self,
        block_id: Option<BlockId>,
    ) -> Result<ValidatorStakeView, RpcError> {
        self.transport.call("validators", [block_id]).await
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Run a `query` request and decode its result.
    pub async fn query<R: DeserializeOwned>(
        &self,
        request: QueryRequest,
        block: BlockReference,
    ) -> Result<R, RpcError> {
        debug!(
            request_type = %request.request_type(),
            account_id = request.account_id(),
            "query"
        );
        self.transport
            .call("query", QueryParams::new(request, block))
            .await
    }

    /// View account information.
    pub async fn view_account(
        &self,
        account_id: &str,
        block: BlockReference,
    ) -> Result<AccountView, RpcError> {
        let request = QueryRequest::ViewAccount {
            account_id: account_id.to_string(),
        };
        self.query(request, block).await
    }

    /// View a single access key.
    pub async fn view_access_key(
        &self,
        account_id: &str,
        public_key: &str,
        block: BlockReference,
    ) -> Result<AccessKeyView, RpcError> {
        let request = QueryRequest::ViewAccessKey {
            account_id: account_id.to_string(),
            public_key: public_key.to_string(),
        };
        self.query(request, block).await
    }

    /// View all access keys of an account.
    pub async fn view_access_key_list(
        &self,
        account_id: &str,
        block: BlockReference,
    ) -> Result<AccessKeyList, RpcError> {
        let request = QueryRequest::ViewAccessKeyList {
            account_id: account_id.to_string(),
        };
        self.query(request, block).await
    }

    /// View contract storage under a key prefix. An empty prefix selects
    /// all keys.
    pub async fn view_state(
        &self,
        account_id: &str,
        prefix: &[u8],
        block: BlockReference,
    ) -> Result<StateResult, RpcError> {
        self.query(QueryRequest::view_state(account_id, prefix), block)
            .await
    }

    /// Call a view function with raw argument bytes.
    ///
    /// Older nodes report contract failures inside an otherwise successful
    /// result; those are returned as [`RpcError::Server`] with
    /// [`ErrorCode::ContractExecutionError`].
    pub async fn call_view_function(
        &self,
        account_id: &str,
        method_name: &str,
        args: &[u8],
        block: BlockReference,
    ) -> Result<FunctionCallResult, RpcError> {
        let request = QueryRequest::call_function(account_id, method_name, args);
        let result: FunctionCallResult = self.query(request, block).await?;

        match result.error {
            Some(message) => Err(RpcError::Server(contract_execution_error(message))),
            None => Ok(result),
        }
    }

    /// Call a view function with JSON-encoded arguments.
    pub async fn call_view_function_json<A: Serialize + ?Sized>(
        &self,
        account_id: &str,
        method_name: &str,
        args: &A,
        block: BlockReference,
    ) -> Result<FunctionCallResult, RpcError> {
        let args = serde_json::to_vec(args).map_err(RpcError::Encode)?;
        self.call_view_function(account_id, method_name, &args, block)
            .await
    }
}

fn contract_execution_error(message: String) -> ServerError {
    ServerError {
        code: ErrorCode::ContractExecutionError.code(),
        data: Some(ErrorData {
            name: Some("HANDLER_ERROR".to_string()),
            cause: Some(ErrorCause {
                name: Some("CONTRACT_EXECUTION_ERROR".to_string()),
                info: Some(message.clone()),
            }),
        }),
        data_raw: None,
        message,
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &self.url())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`RpcClient`].
///
/// ```rust,no_run
/// use std::time::Duration;
/// use near_rpc_client::RpcClient;
///
/// # fn example() -> Result<(), near_rpc_client::RpcError> {
/// let http = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// let client = RpcClient::builder("https://rpc.testnet.near.org")
///     .http_client(http)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RpcClientBuilder {
    url: String,
    http: Option<Arc<dyn HttpClient>>,
}

impl RpcClientBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: None,
        }
    }

    /// Use a specific HTTP client, e.g. a `reqwest::Client` with timeouts.
    pub fn http_client(mut self, http: impl HttpClient + 'static) -> Self {
        self.http = Some(Arc::new(http));
        self
    }

    /// Validate the URL and build the client.
    pub fn build(self) -> Result<RpcClient, RpcError> {
        let parsed = reqwest::Url::parse(&self.url).map_err(|e| RpcError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RpcError::InvalidUrl {
                url: self.url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = self
            .http
            .unwrap_or_else(|| Arc::new(reqwest::Client::new()));
        Ok(RpcClient::from_transport(JsonRpcTransport::new(
            self.url, http,
        )))
    }
}
