//! Error paths over real HTTP.

use near_rpc_client::*;
use serde_json::json;
use tokio::net::TcpListener;

use crate::mock_node::{MockNode, rpc_error};

#[tokio::test]
async fn test_method_not_found_regardless_of_http_status() {
    for status in [200, 400] {
        let node = MockNode::start(move |request| {
            rpc_error(
                request,
                status,
                json!({ "code": -32601, "message": "Method not found" }),
            )
        })
        .await;

        let err = node.client().status().await.unwrap_err();
        match err {
            RpcError::Server(server) => {
                assert_eq!(server.code, -32601);
                assert_eq!(server.message, "Method not found");
                assert_eq!(server.kind(), ErrorCode::MethodNotFound);
            }
            other => panic!("HTTP {status}: unexpected error {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unknown_account_handler_error() {
    let node = MockNode::start(|request| {
        rpc_error(
            request,
            200,
            json!({
                "name": "HANDLER_ERROR",
                "cause": {
                    "name": "UNKNOWN_ACCOUNT",
                    "info": {
                        "block_hash": "CxbrUbhcmRAJxdbqsmfVGdZiqWNdTx4bQDhNZgKHW2Ht",
                        "block_height": 1000,
                        "requested_account_id": "nope.testnet"
                    }
                },
                "code": -32000,
                "message": "Server error",
                "data": "account nope.testnet does not exist while viewing"
            }),
        )
    })
    .await;

    let err = node
        .client()
        .view_account("nope.testnet", BlockReference::default())
        .await
        .unwrap_err();

    let server = err.server_error().expect("server error");
    assert_eq!(server.kind(), ErrorCode::HandlerError);
    assert!(server.is_handler_error());
    assert_eq!(server.cause_name(), Some("UNKNOWN_ACCOUNT"));
    assert!(server.cause_info().unwrap().contains("nope.testnet"));
    assert_eq!(
        server.data_message(),
        Some("account nope.testnet does not exist while viewing")
    );
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_structured_data_member() {
    let node = MockNode::start(|request| {
        rpc_error(
            request,
            200,
            json!({
                "code": -32100,
                "message": "Unknown block",
                "data": { "name": "HANDLER_ERROR", "cause": { "name": "UNKNOWN_BLOCK", "info": "#99" } }
            }),
        )
    })
    .await;

    let err = node.client().block_by_height(99).await.unwrap_err();
    let server = err.server_error().unwrap();
    assert_eq!(server.kind(), ErrorCode::UnknownBlock);
    assert_eq!(server.cause_name(), Some("UNKNOWN_BLOCK"));
    assert_eq!(server.cause_info(), Some("#99"));
}

#[tokio::test]
async fn test_non_json_body_on_200_is_invalid_response() {
    let node = MockNode::start(|_| (200, "this is not json".to_string())).await;

    let err = node.client().status().await.unwrap_err();
    assert!(matches!(err, RpcError::InvalidResponse { status: 200, .. }));
    assert_eq!(err.status_code(), Some(200));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_non_json_body_on_503_is_http_status() {
    let node = MockNode::start(|_| (503, "upstream unavailable".to_string())).await;

    let err = node.client().status().await.unwrap_err();
    match err {
        RpcError::HttpStatus { status, ref body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        ref other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_result_schema_mismatch() {
    let node = MockNode::with_result(json!({ "amount": 5 })).await;

    let err = node
        .client()
        .view_account("alice.testnet", BlockReference::default())
        .await
        .unwrap_err();
    match err {
        RpcError::Decode { method, .. } => assert_eq!(method, "query"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_permission_shape_is_decode_error() {
    let node = MockNode::with_result(json!({ "nonce": 1, "permission": "PartialAccess" })).await;

    let err = node
        .client()
        .view_access_key("alice.testnet", "ed25519:abc", BlockReference::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RpcError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Reserve a port, then free it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RpcClient::new(format!("http://{addr}")).unwrap();
    let err = client.status().await.unwrap_err();
    assert!(matches!(err, RpcError::Http(_)));
    assert!(err.is_transport());
}
