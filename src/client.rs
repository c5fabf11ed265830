//! Request executor.
//!
//! [`AshbyClient`] turns an endpoint path and a JSON payload into one
//! authenticated request against the configured base URL and parses the JSON
//! response. Paginated list endpoints go through
//! [`AshbyClient::paginated_post`], which follows `nextCursor` until the server
//! reports no more data.
//!
//! ```rust,no_run
//! use ashby::AshbyClient;
//!
//! # async fn run() -> Result<(), ashby::AshbyError> {
//! let client = AshbyClient::builder().api_token("my-token").build()?;
//! let candidates = client.candidates().list().await?;
//! println!("{} candidates", candidates.len());
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Configuration, ConfigurationBuilder};
use crate::error::AshbyError;
use crate::http::{
    HttpHeaderBuilder, HttpMethod, HttpTransport, HttpTransportRequest, HttpTransportResponse,
    ReqwestTransport,
};
use crate::pagination::{self, PaginationOptions};
use crate::types::{self, Payload};

/// Client for the Ashby API
#[derive(Clone)]
pub struct AshbyClient {
    config: Arc<Configuration>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AshbyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AshbyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AshbyClient {
    /// Create a client using the default `reqwest` transport
    pub fn new(config: Configuration) -> Result<Self, AshbyError> {
        let http_client = config.build_http_client()?;
        Ok(Self::with_transport(
            config,
            Arc::new(ReqwestTransport::new(http_client)),
        ))
    }

    /// Create a client sending requests through a custom transport
    pub fn with_transport(config: Configuration, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Returns a builder for constructing `AshbyClient`
    pub fn builder() -> AshbyClientBuilder {
        AshbyClientBuilder::new()
    }

    /// Create a client configured from `ASHBY_API_TOKEN` / `ASHBY_BASE_URL`
    pub fn from_env() -> Result<Self, AshbyError> {
        Self::new(Configuration::from_env()?)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Timeouts are applied when the client is built; changing them here has no
    /// effect on the existing transport.
    pub fn config_mut(&mut self) -> &mut Configuration {
        Arc::make_mut(&mut self.config)
    }

    /// Resets the configuration to its defaults, clearing the API token.
    pub fn reset(&mut self) {
        self.config_mut().reset();
    }

    /// `<base_url>/<path>`, plus the URL-encoded query string when `params` is non-empty.
    pub fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Issue a GET request and parse the JSON response
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, AshbyError> {
        let url = self.build_url(path, params);
        self.execute(HttpMethod::Get, url, None).await
    }

    /// Issue a POST request with `payload` as the JSON body and parse the JSON response
    pub async fn post(&self, path: &str, payload: Payload) -> Result<Value, AshbyError> {
        let url = self.build_url(path, &[]);
        self.execute(HttpMethod::Post, url, Some(Value::Object(payload)))
            .await
    }

    /// POST to a list endpoint and collect every page, using the configured
    /// pagination options.
    pub async fn paginated_post(
        &self,
        path: &str,
        payload: Payload,
    ) -> Result<Vec<Value>, AshbyError> {
        let options = self.config.pagination;
        self.paginated_post_with(path, payload, &options).await
    }

    /// Same as [`paginated_post`](Self::paginated_post) with explicit options
    pub async fn paginated_post_with(
        &self,
        path: &str,
        payload: Payload,
        options: &PaginationOptions,
    ) -> Result<Vec<Value>, AshbyError> {
        if options.page_size == 0 {
            return Err(AshbyError::ConfigurationError(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if options.max_pages == Some(0) {
            return Err(AshbyError::ConfigurationError(
                "max_pages must be greater than zero".to_string(),
            ));
        }
        pagination::collect_pages(path, &payload, options, move |page_payload| {
            self.post(path, page_payload)
        })
        .await
    }

    /// POST and unwrap the `results` field
    pub(crate) async fn post_results(
        &self,
        path: &str,
        payload: Payload,
    ) -> Result<Value, AshbyError> {
        self.post(path, payload).await.map(types::into_results)
    }

    /// POST and unwrap the `results` field as a list
    pub(crate) async fn post_results_list(
        &self,
        path: &str,
        payload: Payload,
    ) -> Result<Vec<Value>, AshbyError> {
        self.post(path, payload).await.map(types::into_results_list)
    }

    /// POST a mutating call, fail on `success: false`, unwrap `results`
    pub(crate) async fn post_mutation(
        &self,
        path: &str,
        payload: Payload,
        context: &str,
    ) -> Result<Value, AshbyError> {
        let response = self.post(path, payload).await?;
        types::ensure_success(response, context).map(types::into_results)
    }

    fn build_headers(&self, method: HttpMethod) -> Result<HeaderMap, AshbyError> {
        let mut builder = HttpHeaderBuilder::new()
            .with_basic_auth(self.config.expose_token()?)?
            .with_json_accept();
        if method == HttpMethod::Post {
            builder = builder.with_json_content_type();
        }
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.with_user_agent(user_agent)?;
        }
        Ok(builder.build())
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
    ) -> Result<Value, AshbyError> {
        let headers = self.build_headers(method)?;
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(target: "ashby::http", request_id = %request_id, method = %method, url = %url, "sending request");

        let request = HttpTransportRequest {
            request_id: request_id.clone(),
            method,
            url: url.clone(),
            headers,
            body,
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(target: "ashby::http", request_id = %request_id, url = %url, err = %err, "request error");
                return Err(err);
            }
        };

        tracing::debug!(target: "ashby::http", request_id = %request_id, url = %url, status = response.status, "response received");

        if !response.is_success() {
            let err = api_error_from_response(&response);
            tracing::debug!(target: "ashby::http", request_id = %request_id, url = %url, err = %err, "request error");
            return Err(err);
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            AshbyError::ParseError(format!("Failed to parse response from {url}: {e}"))
        })
    }
}

fn api_error_from_response(response: &HttpTransportResponse) -> AshbyError {
    let details: Option<Value> = serde_json::from_slice(&response.body).ok();
    let message = details
        .as_ref()
        .and_then(types::error_message)
        .or_else(|| {
            let text = String::from_utf8_lossy(&response.body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown error".to_string());

    AshbyError::ApiError {
        code: response.status,
        message,
        details,
    }
}

/// Builder for `AshbyClient`
#[derive(Default)]
pub struct AshbyClientBuilder {
    config: ConfigurationBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl AshbyClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.api_token(token);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.config = self.config.connect_timeout(connect_timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config = self.config.page_size(page_size);
        self
    }

    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.config = self.config.max_pages(max_pages);
        self
    }

    pub fn max_duration(mut self, max_duration: Duration) -> Self {
        self.config = self.config.max_duration(max_duration);
        self
    }

    /// Send requests through a custom transport instead of `reqwest`
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<AshbyClient, AshbyError> {
        let config = self.config.build()?;
        match self.transport {
            Some(transport) => Ok(AshbyClient::with_transport(config, transport)),
            None => AshbyClient::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTransport;
    use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
    use serde_json::json;

    fn client_with(transport: &RecordingTransport) -> AshbyClient {
        AshbyClient::builder()
            .api_token("abc123")
            .base_url("https://api.example.invalid")
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = client_with(&RecordingTransport::default());
        assert_eq!(
            client.build_url("candidate.list", &[]),
            "https://api.example.invalid/candidate.list"
        );
        assert_eq!(
            client.build_url("candidate.search", &[("name", "Jane Doe"), ("x", "a&b")]),
            "https://api.example.invalid/candidate.search?name=Jane%20Doe&x=a%26b"
        );
    }

    #[tokio::test]
    async fn test_post_sends_authenticated_json() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": {"id": "c1"}})]);
        let client = client_with(&transport);

        let mut payload = Payload::new();
        payload.insert("id".into(), json!("c1"));
        let response = client.post("candidate.info", payload).await.unwrap();

        assert_eq!(response["results"]["id"], "c1");
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.url, "https://api.example.invalid/candidate.info");
        assert_eq!(call.headers.get(AUTHORIZATION).unwrap(), "Basic YWJjMTIzOg==");
        assert_eq!(call.headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(call.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(call.body, Some(json!({"id": "c1"})));
        assert!(!call.request_id.is_empty());
    }

    #[tokio::test]
    async fn test_get_has_no_body_or_content_type() {
        let transport = RecordingTransport::with_replies(vec![json!({"ok": true})]);
        let client = client_with(&transport);

        client.get("user.list", &[("limit", "5")]).await.unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.url, "https://api.example.invalid/user.list?limit=5");
        assert!(call.body.is_none());
        assert!(call.headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_request() {
        let transport = RecordingTransport::default();
        let mut client = client_with(&transport);
        client.reset();

        let err = client.post("candidate.list", Payload::new()).await.unwrap_err();

        assert!(matches!(err, AshbyError::MissingApiToken));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_reset_then_reconfigure() {
        let transport = RecordingTransport::with_replies(vec![json!({})]);
        let mut client = client_with(&transport);
        client.reset();
        assert_eq!(client.config().base_url, "https://api.ashbyhq.com");

        client.config_mut().configure(|c| {
            c.set_api_token("other");
            c.base_url = "https://api.example.invalid".to_string();
        });
        client.post("user.list", Payload::new()).await.unwrap();

        let call = &transport.calls()[0];
        // base64("other:")
        assert_eq!(call.headers.get(AUTHORIZATION).unwrap(), "Basic b3RoZXI6");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let transport = RecordingTransport::default();
        transport.push_raw(401, br#"{"success":false,"errors":["invalid api key"]}"#.to_vec());
        let client = client_with(&transport);

        let err = client.post("job.list", Payload::new()).await.unwrap_err();

        match err {
            AshbyError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 401);
                assert_eq!(message, "invalid api key");
                assert!(details.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_without_body_uses_reason_phrase() {
        let transport = RecordingTransport::default();
        transport.push_raw(503, Vec::new());
        let client = client_with(&transport);

        let err = client.post("job.list", Payload::new()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let transport = RecordingTransport::default();
        transport.push_raw(200, b"<html>oops</html>".to_vec());
        let client = client_with(&transport);

        let err = client.post("job.list", Payload::new()).await.unwrap_err();
        assert!(matches!(err, AshbyError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let transport = RecordingTransport::default();
        let client = client_with(&transport);

        let err = client.post("job.list", Payload::new()).await.unwrap_err();
        assert!(matches!(err, AshbyError::HttpError(_)));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_paginated_post_example_scenario() {
        let transport = RecordingTransport::with_replies(vec![
            json!({"results": ["A", "B"], "moreDataAvailable": true, "nextCursor": "c1"}),
            json!({"results": ["C"], "moreDataAvailable": false}),
        ]);
        let client = AshbyClient::builder()
            .api_token("abc123")
            .page_size(2)
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();

        let results = client
            .paginated_post("candidate.list", Payload::new())
            .await
            .unwrap();

        assert_eq!(results, vec![json!("A"), json!("B"), json!("C")]);
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].body, Some(json!({"limit": 2})));
        assert_eq!(calls[1].body, Some(json!({"limit": 2, "cursor": "c1"})));
    }

    #[tokio::test]
    async fn test_paginated_post_rejects_zero_page_size() {
        let transport = RecordingTransport::default();
        let client = client_with(&transport);

        let err = client
            .paginated_post_with(
                "job.list",
                Payload::new(),
                &PaginationOptions::new().with_page_size(0),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AshbyError::ConfigurationError(_)));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_paginated_post_rejects_zero_max_pages() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": []})]);
        let client = client_with(&transport);

        let err = client
            .paginated_post_with(
                "job.list",
                Payload::new(),
                &PaginationOptions::new().with_max_pages(0),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: max_pages must be greater than zero"
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_post_mutation_reports_failure() {
        let transport = RecordingTransport::with_replies(vec![json!({
            "success": false,
            "errors": ["opening_not_found"]
        })]);
        let client = client_with(&transport);

        let err = client
            .post_mutation("opening.create", Payload::new(), "Failed to create opening")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Operation failed: Failed to create opening: opening_not_found"
        );
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = client_with(&RecordingTransport::default());
        assert!(!format!("{client:?}").contains("abc123"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_requests_are_logged_without_credentials() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": []})]);
        let client = client_with(&transport);

        client.post("user.list", Payload::new()).await.unwrap();

        assert!(logs_contain("sending request"));
        assert!(logs_contain("https://api.example.invalid/user.list"));
        assert!(logs_contain("status=200"));
        assert!(!logs_contain("YWJjMTIzOg=="));
    }
}
