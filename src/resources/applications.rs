//! Job application endpoints.

use serde_json::Value;

use super::single;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Application endpoints
#[derive(Debug, Clone, Copy)]
pub struct Applications<'a> {
    client: &'a AshbyClient,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all applications, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("applications.list", Payload::new())
            .await
    }

    /// Finds an application by its Ashby ID
    pub async fn find_by_id(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Application ID is required")?;
        self.client
            .post_results("application.info", single("applicationId", id))
            .await
    }
}
