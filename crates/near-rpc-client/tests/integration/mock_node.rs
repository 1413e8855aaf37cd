//! A local JSON-RPC node served by axum.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use near_rpc_client::RpcClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Handler = dyn Fn(&Value) -> (u16, String) + Send + Sync;

struct NodeState {
    handler: Box<Handler>,
    requests: Mutex<Vec<Value>>,
}

/// A running mock node. The server task lives as long as the test runtime.
pub struct MockNode {
    pub url: String,
    state: Arc<NodeState>,
}

impl MockNode {
    /// Serve `handler` on a random local port.
    pub async fn start(handler: impl Fn(&Value) -> (u16, String) + Send + Sync + 'static) -> Self {
        init_tracing();

        let state = Arc::new(NodeState {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .route("/", post(rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { url, state }
    }

    /// Always answer with `result` in a success envelope.
    pub async fn with_result(result: Value) -> Self {
        Self::start(move |request| ok(request, result.clone())).await
    }

    /// A client pointed at this node.
    pub fn client(&self) -> RpcClient {
        RpcClient::new(&self.url).unwrap()
    }

    /// Parsed request bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests().pop().expect("no request received")
    }
}

async fn rpc(State(state): State<Arc<NodeState>>, body: String) -> impl IntoResponse {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let (status, reply) = (state.handler)(&request);
    state.requests.lock().unwrap().push(request);

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply,
    )
}

/// Success envelope echoing the request id.
pub fn ok(request: &Value, result: Value) -> (u16, String) {
    let body = json!({ "jsonrpc": "2.0", "id": request["id"], "result": result });
    (200, body.to_string())
}

/// Error envelope echoing the request id.
pub fn rpc_error(request: &Value, status: u16, error: Value) -> (u16, String) {
    let body = json!({ "jsonrpc": "2.0", "id": request["id"], "error": error });
    (status, body.to_string())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
