//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly; it hands a fully built
//! request to an [`HttpTransport`]. The default implementation is
//! [`ReqwestTransport`]. Tests inject their own transport to observe the final
//! URL/headers/body and return synthetic responses.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::AshbyError;

/// HTTP verb used by the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    /// Correlates log lines of one request
    pub request_id: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body (POST only)
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Custom HTTP transport for JSON requests.
///
/// Implementations report transport failures (connection refused, TLS, body
/// read) as errors and return every HTTP status, successful or not, as a
/// response. Status classification happens in the client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AshbyError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AshbyError> {
        let mut rb = match request.method {
            HttpMethod::Get => self.http_client.get(&request.url),
            HttpMethod::Post => self.http_client.post(&request.url),
        }
        .headers(request.headers);

        if let Some(body) = &request.body {
            rb = rb.body(serde_json::to_vec(body)?);
        }

        let resp = rb.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}
