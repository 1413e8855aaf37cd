//! A typed async client for the NEAR Protocol JSON-RPC API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use near_rpc_client::{BlockReference, RpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), near_rpc_client::RpcError> {
//!     let client = RpcClient::testnet();
//!
//!     let status = client.status().await?;
//!     println!("{} at height {}", status.chain_id, status.sync_info.latest_block_height);
//!
//!     let account = client
//!         .view_account("example.testnet", BlockReference::default())
//!         .await?;
//!     println!("Balance: {} yoctoNEAR", account.amount);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Block references
//!
//! Every state query runs against a block chosen by [`BlockReference`]:
//! a [`Finality`] level, a height or a hash. The default is
//! [`Finality::Final`].
//!
//! # Errors
//!
//! All operations return [`RpcError`]. Errors reported by the node arrive as
//! [`RpcError::Server`], classified by [`ErrorCode`] and carrying the node's
//! structured `name`/`cause` when present.
//!
//! # Logging
//!
//! Requests and responses are traced with [`tracing`] at `debug` and
//! `trace` level. Install a subscriber to see them.

pub mod client;
pub mod error;
pub mod types;

pub use client::{
    HttpClient, HttpFuture, HttpRequest, HttpResponse, JsonRpcTransport, MAINNET, NetworkConfig,
    RpcClient, RpcClientBuilder, TESTNET,
};
pub use error::{ErrorCause, ErrorCode, ErrorData, RpcError, ServerError};
pub use types::*;
