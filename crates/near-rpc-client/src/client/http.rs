//! HTTP collaborator used by the JSON-RPC transport.
//!
//! The transport only needs "POST these bytes, give me status and body".
//! [`HttpClient`] captures exactly that, so callers can plug in a
//! preconfigured [`reqwest::Client`] (timeouts, proxies, TLS) or a test
//! double.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Method;

use crate::error::RpcError;

/// Future returned by [`HttpClient::send`].
pub type HttpFuture<'a> = BoxFuture<'a, Result<HttpResponse, RpcError>>;

/// An outbound HTTP request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Target URL.
    pub url: String,
    /// HTTP method; always `POST` for JSON-RPC.
    pub method: Method,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// A `POST` with a JSON body.
    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            method: Method::POST,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

/// A raw HTTP response.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, unparsed.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must not interpret the status code: non-2xx responses are
/// returned as `Ok` so the transport can still read a JSON-RPC error body.
pub trait HttpClient: Send + Sync {
    fn send(&self, request: HttpRequest) -> HttpFuture<'_>;
}

impl HttpClient for reqwest::Client {
    fn send(&self, request: HttpRequest) -> HttpFuture<'_> {
        send_with_reqwest(self, request).boxed()
    }
}

async fn send_with_reqwest(
    client: &reqwest::Client,
    request: HttpRequest,
) -> Result<HttpResponse, RpcError> {
    let mut builder = client.request(request.method, request.url.as_str());
    for (name, value) in request.headers {
        builder = builder.header(name, value);
    }

    let response = builder.body(request.body).send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse { status, body })
}
