//! Custom field values on jobs, candidates, applications and other objects.

use serde::Serialize;
use serde_json::Value;

use super::to_payload;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::validation::{is_blank, require_non_blank};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetValueRequest<'a> {
    object_id: &'a str,
    object_type: &'a str,
    field_id: &'a str,
    field_value: Value,
}

/// Custom field endpoints
#[derive(Debug, Clone, Copy)]
pub struct CustomFields<'a> {
    client: &'a AshbyClient,
}

impl<'a> CustomFields<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Assigns `field_value` to custom field `field_id` on an object.
    ///
    /// ```rust,ignore
    /// client
    ///     .custom_fields()
    ///     .set_value("job_abc123", "Job", "cf_custom_location", "Remote")
    ///     .await?;
    /// ```
    pub async fn set_value(
        &self,
        object_id: &str,
        object_type: &str,
        field_id: &str,
        field_value: impl Into<Value>,
    ) -> Result<Value, AshbyError> {
        let object_id = require_non_blank(object_id, "`object_id` is required")?;
        let object_type = require_non_blank(object_type, "`object_type` is required")?;
        let field_id = require_non_blank(field_id, "`field_id` is required")?;
        let field_value = field_value.into();
        if is_blank(&field_value) {
            return Err(AshbyError::invalid_input("`field_value` is required"));
        }

        let payload = to_payload(&SetValueRequest {
            object_id,
            object_type,
            field_id,
            field_value,
        })?;
        self.client
            .post_mutation(
                "customField.setValue",
                payload,
                "Failed to set custom field value",
            )
            .await
    }
}
