//! Client module for talking to a NEAR node.
//!
//! - [`RpcClient`] — typed methods for each supported RPC call
//! - [`RpcClientBuilder`] — URL validation and HTTP client injection
//! - [`JsonRpcTransport`] — envelope handling, key renaming and error mapping
//! - [`HttpClient`] — the HTTP seam, implemented for [`reqwest::Client`]

mod http;
mod rpc;
mod transport;

pub use http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};
pub use rpc::{MAINNET, NetworkConfig, RpcClient, RpcClientBuilder, TESTNET};
pub use transport::JsonRpcTransport;
