//! Integration tests for near-rpc-client.
//!
//! Everything except `live_testnet` runs against a local mock node.
//!
//! Run with: `cargo test --test integration`

mod concurrency;
mod errors;
mod live_testnet;
mod mock_node;
