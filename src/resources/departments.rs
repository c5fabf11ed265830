//! Department endpoints.

use serde_json::Value;

use super::single;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Department endpoints
#[derive(Debug, Clone, Copy)]
pub struct Departments<'a> {
    client: &'a AshbyClient,
}

impl<'a> Departments<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all departments
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .post_results_list("department.list", Payload::new())
            .await
    }

    /// Finds a department by its Ashby ID
    pub async fn find(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Department ID is required")?;
        self.client
            .post_results("department.info", single("departmentId", id))
            .await
    }
}
