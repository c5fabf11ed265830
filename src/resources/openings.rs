//! Opening endpoints.

use serde_json::Value;

use super::{insert_present, single};
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::{require_any, require_non_blank};

/// Opening endpoints
#[derive(Debug, Clone, Copy)]
pub struct Openings<'a> {
    client: &'a AshbyClient,
}

impl<'a> Openings<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all openings, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("opening.list", Payload::new())
            .await
    }

    /// Searches openings by email and/or name; at least one is required
    pub async fn find(&self, email: Option<&str>, name: Option<&str>) -> Result<Value, AshbyError> {
        let mut payload = Payload::new();
        insert_present(&mut payload, "email", email);
        insert_present(&mut payload, "name", name);
        require_any(&payload, "You must provide at least an email or a name")?;

        self.client.post_results("opening.search", payload).await
    }

    /// Searches openings by identifier
    pub async fn search(&self, identifier: &str) -> Result<Value, AshbyError> {
        let identifier = require_non_blank(identifier, "You must provide an identifier")?;
        self.client
            .post_results("opening.search", single("identifier", identifier))
            .await
    }

    /// Finds an opening by its Ashby ID
    pub async fn find_by_id(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Opening ID is required")?;
        self.client
            .post_results("opening.info", single("openingId", id))
            .await
    }

    /// Moves an opening to `state` (e.g. `Open`, `Closed`)
    pub async fn set_state(&self, id: &str, state: &str) -> Result<Value, AshbyError> {
        const MESSAGE: &str = "You must provide the opening ID and the state";
        let id = require_non_blank(id, MESSAGE)?;
        let state = require_non_blank(state, MESSAGE)?;

        let mut payload = single("openingId", id);
        payload.insert("openingState".to_string(), Value::from(state));
        self.client
            .post_mutation(
                "opening.setOpeningState",
                payload,
                "Failed to set opening state",
            )
            .await
    }

    /// Creates an opening from `payload`, which is sent as-is.
    pub async fn create(&self, payload: Payload) -> Result<Value, AshbyError> {
        require_any(&payload, "No payload provided")?;
        self.client
            .post_mutation("opening.create", payload, "Failed to create opening")
            .await
    }
}
