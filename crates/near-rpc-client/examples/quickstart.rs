//! Quickstart - read-only NEAR RPC calls
//!
//! Covers: node status, blocks, accounts, access keys, view functions,
//! gas price and validators
//!
//! Run: cargo run --example quickstart
//!
//! Optional environment variables:
//!   NEAR_RPC_URL=https://rpc.mainnet.near.org
//!   RUST_LOG=near_rpc_client=debug

use near_rpc_client::*;
use tracing_subscriber::EnvFilter;

// ============================================================================
// 1. Node and chain
// ============================================================================

async fn chain_example(client: &RpcClient) -> Result<(), RpcError> {
    println!("=== Chain ===\n");

    let status = client.status().await?;
    println!(
        "{} (protocol {}) at height {}",
        status.chain_id, status.protocol_version, status.sync_info.latest_block_height
    );

    let block = client.block(BlockReference::default()).await?;
    println!(
        "Final block {} by {} with {} chunks",
        block.header.height,
        block.author,
        block.chunks.len()
    );

    let price = client.gas_price(None).await?;
    println!("Gas price: {} yoctoNEAR", price.gas_price);

    let validators = client.validators(None).await?;
    println!(
        "{} validators this epoch",
        validators.current_validators.len()
    );

    Ok(())
}

// ============================================================================
// 2. Accounts and keys
// ============================================================================

async fn account_example(client: &RpcClient, account_id: &str) -> Result<(), RpcError> {
    println!("\n=== Account {account_id} ===\n");

    let account = client
        .view_account(account_id, BlockReference::default())
        .await?;
    println!("Balance: {} yoctoNEAR", account.amount);
    println!("Storage: {} bytes", account.storage_usage);
    println!("Has contract: {}", account.has_contract());

    let keys = client
        .view_access_key_list(account_id, BlockReference::optimistic())
        .await?;
    for key in &keys.keys {
        match key.access_key.permission.as_function_call() {
            None => println!("{} (full access)", key.public_key),
            Some(call) => println!("{} (calls {})", key.public_key, call.receiver_id),
        }
    }

    Ok(())
}

// ============================================================================
// 3. View functions
// ============================================================================

async fn view_example(client: &RpcClient) -> Result<(), RpcError> {
    println!("\n=== View Function ===\n");

    let result = client
        .call_view_function_json(
            "guestbook.near-examples.testnet",
            "get_messages",
            &serde_json::json!({ "from_index": "0", "limit": "5" }),
            BlockReference::default(),
        )
        .await?;

    match result.json::<Vec<serde_json::Value>>() {
        Ok(messages) => println!("Guestbook has {} messages", messages.len()),
        Err(e) => println!("Unexpected result: {e}"),
    }

    // Errors reported by the node carry a structured cause.
    match client
        .view_account("surely-missing-account.testnet", BlockReference::default())
        .await
    {
        Err(RpcError::Server(err)) => println!(
            "Lookup failed: {} ({})",
            err.cause_name().unwrap_or("unknown cause"),
            err.message
        ),
        Err(e) => return Err(e),
        Ok(_) => println!("Account exists after all"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), RpcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = match std::env::var("NEAR_RPC_URL") {
        Ok(url) => RpcClient::new(url)?,
        Err(_) => RpcClient::testnet(),
    };
    println!("Using {}\n", client.url());

    chain_example(&client).await?;
    account_example(&client, "testnet").await?;
    view_example(&client).await?;

    Ok(())
}
