//! Many in-flight calls on one client.

use std::collections::HashSet;

use futures::future::join_all;
use near_rpc_client::*;
use serde_json::json;

use crate::mock_node::{MockNode, ok};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_get_their_own_results() {
    // Each response echoes the requested height back as the gas price.
    let node = MockNode::start(|request| {
        let height = request["params"][0].as_u64().unwrap_or_default();
        ok(request, json!({ "gas_price": height.to_string() }))
    })
    .await;
    let client = node.client();

    let calls = (1..=50u64).map(|height| {
        let client = client.clone();
        async move {
            let price = client
                .gas_price(Some(BlockId::Height(height)))
                .await
                .unwrap();
            (height, price)
        }
    });

    for (height, price) in join_all(calls).await {
        assert_eq!(price.gas_price, height.to_string());
    }

    let requests = node.requests();
    assert_eq!(requests.len(), 50);
    let ids: HashSet<String> = requests
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), 50, "request ids must be unique");
}

#[tokio::test]
async fn test_spawned_tasks_share_one_client() {
    let node = MockNode::with_result(json!({ "gas_price": "1" })).await;
    let client = node.client();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.gas_price(None).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().gas_price, "1");
    }
    assert_eq!(node.requests().len(), 8);
}
