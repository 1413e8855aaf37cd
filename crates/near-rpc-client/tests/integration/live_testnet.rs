//! Smoke tests against a live node.
//!
//! Ignored by default. Run with:
//! `cargo test --test integration live_ -- --ignored`
//!
//! The endpoint is read from `NEAR_RPC_URL` (testnet by default). Setting
//! `SKIP_NETWORK_TESTS` turns these into no-ops.

use near_rpc_client::*;

fn live_client() -> Option<RpcClient> {
    if std::env::var_os("SKIP_NETWORK_TESTS").is_some() {
        return None;
    }
    let url = std::env::var("NEAR_RPC_URL").unwrap_or_else(|_| TESTNET.rpc_url.to_string());
    Some(RpcClient::new(url).unwrap())
}

#[tokio::test]
#[ignore]
async fn live_status() {
    let Some(client) = live_client() else { return };

    let status = client.status().await.unwrap();
    assert!(!status.chain_id.is_empty());
    assert!(status.sync_info.latest_block_height > 0);
}

#[tokio::test]
#[ignore]
async fn live_final_block_and_lookup_by_height() {
    let Some(client) = live_client() else { return };

    let latest = client.block(BlockReference::default()).await.unwrap();
    let by_height = client.block_by_height(latest.header.height).await.unwrap();
    assert_eq!(by_height.header.hash, latest.header.hash);

    let by_hash = client.block_by_hash(latest.header.hash.clone()).await.unwrap();
    assert_eq!(by_hash.header.height, latest.header.height);
}

#[tokio::test]
#[ignore]
async fn live_view_account_and_keys() {
    let Some(client) = live_client() else { return };

    let account = client
        .view_account("testnet", BlockReference::default())
        .await
        .unwrap();
    assert!(!account.amount.is_empty());
    assert!(account.block_height > 0);

    let keys = client
        .view_access_key_list("testnet", BlockReference::default())
        .await
        .unwrap();
    assert!(keys.block_height > 0);
}

#[tokio::test]
#[ignore]
async fn live_unknown_account() {
    let Some(client) = live_client() else { return };

    let err = client
        .view_account("this-account-does-not-exist-0x1234.testnet", BlockReference::default())
        .await
        .unwrap_err();
    let server = err.server_error().expect("node should report an error");
    assert_eq!(server.cause_name(), Some("UNKNOWN_ACCOUNT"));
}

#[tokio::test]
#[ignore]
async fn live_gas_price_and_validators() {
    let Some(client) = live_client() else { return };

    let price = client.gas_price(None).await.unwrap();
    assert!(price.as_u128().is_some());

    let validators = client.validators(None).await.unwrap();
    assert!(!validators.current_validators.is_empty());
}
