//! HTTP transport seam between the API client and the network.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: `BrowserTransport` fails every request, so native builds and
//! tests never reach the network by accident. Tests script responses with
//! their own `Transport` impls.

#![allow(clippy::unused_async)]

use std::future::Future;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Raw value for the `Authorization` header.
    pub authorization: Option<String>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// An `Err` means no HTTP response was obtained at all (DNS, CORS, offline).
/// Non-2xx statuses are `Ok` and left to the caller to classify.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, String>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            let builder = match request.authorization.as_deref() {
                Some(credential) => builder.header("Authorization", credential),
                None => builder,
            };
            let resp = match request.body.as_ref() {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(format!("no browser transport for {}", request.url))
        }
    }
}
