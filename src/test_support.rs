//! In-memory transport used by unit tests.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::http::{HttpTransport, HttpTransportRequest, HttpTransportResponse};

/// Records every request and answers with queued replies, in order.
///
/// When the queue is empty the request is still recorded and fails with
/// `AshbyError::HttpError`.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    replies: Arc<Mutex<VecDeque<HttpTransportResponse>>>,
}

impl RecordingTransport {
    pub(crate) fn with_replies(replies: Vec<Value>) -> Self {
        let transport = Self::default();
        for reply in replies {
            transport.push_json(reply);
        }
        transport
    }

    pub(crate) fn push_json(&self, body: Value) {
        self.push_raw(200, serde_json::to_vec(&body).expect("json bytes"));
    }

    pub(crate) fn push_raw(&self, status: u16, body: Vec<u8>) {
        self.replies.lock().expect("lock").push_back(HttpTransportResponse {
            status,
            headers: HeaderMap::new(),
            body,
        });
    }

    pub(crate) fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().expect("lock").clone()
    }

    /// JSON bodies of every recorded request
    pub(crate) fn bodies(&self) -> Vec<Value> {
        self.calls()
            .into_iter()
            .map(|c| c.body.unwrap_or(Value::Null))
            .collect()
    }

    /// URL paths (without the base URL) of every recorded request
    pub(crate) fn paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| c.url.rsplit('/').next().unwrap_or_default().to_string())
            .collect()
    }

    pub(crate) fn client(&self) -> AshbyClient {
        AshbyClient::builder()
            .api_token("test-token")
            .base_url("https://api.example.invalid")
            .transport(Arc::new(self.clone()))
            .build()
            .expect("client")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AshbyError> {
        self.calls.lock().expect("lock").push(request);
        self.replies
            .lock()
            .expect("lock")
            .pop_front()
            .ok_or_else(|| AshbyError::HttpError("connection refused".to_string()))
    }
}
