//! Close reason endpoints.

use serde_json::Value;

use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;

/// Close reason endpoints
#[derive(Debug, Clone, Copy)]
pub struct CloseReasons<'a> {
    client: &'a AshbyClient,
}

impl<'a> CloseReasons<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all close reasons (single request)
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .post_results_list("closeReason.list", Payload::new())
            .await
    }
}
