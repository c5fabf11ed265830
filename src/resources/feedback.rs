//! Application feedback endpoints.

use serde_json::Value;

use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;

/// Feedback endpoints
#[derive(Debug, Clone, Copy)]
pub struct Feedback<'a> {
    client: &'a AshbyClient,
}

impl<'a> Feedback<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all feedback matching `filter` (e.g. `applicationId`),
    /// following pagination
    pub async fn list(&self, filter: Payload) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("applicationFeedback.list", filter)
            .await
    }
}
