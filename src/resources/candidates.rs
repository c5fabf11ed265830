//! Candidate endpoints: listing, search by email or name, lookup by ID and
//! note creation.

use serde::Serialize;
use serde_json::Value;

use super::{insert_present, single, to_payload};
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::{require_any, require_non_blank};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNoteRequest<'a> {
    candidate_id: &'a str,
    note: &'a str,
    send_notifications: bool,
}

/// Candidate endpoints
#[derive(Debug, Clone, Copy)]
pub struct Candidates<'a> {
    client: &'a AshbyClient,
}

impl<'a> Candidates<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all candidates, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("candidate.list", Payload::new())
            .await
    }

    /// Finds candidates by email and/or name; at least one is required
    pub async fn search(
        &self,
        email: Option<&str>,
        name: Option<&str>,
    ) -> Result<Value, AshbyError> {
        let mut payload = Payload::new();
        insert_present(&mut payload, "email", email);
        insert_present(&mut payload, "name", name);
        require_any(&payload, "You must provide at least an email or a name")?;

        self.client.post_results("candidate.search", payload).await
    }

    /// Finds a candidate by their Ashby ID
    pub async fn find_by_id(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Candidate ID is required")?;
        self.client
            .post_results("candidate.info", single("id", id))
            .await
    }

    /// Adds a note to a candidate's profile.
    ///
    /// Fails with `OperationFailed` when the API answers `success: false`.
    pub async fn create_note(
        &self,
        candidate_id: &str,
        note: &str,
        send_notifications: bool,
    ) -> Result<Value, AshbyError> {
        let candidate_id = require_non_blank(candidate_id, "Candidate ID is required")?;
        let note = require_non_blank(note, "Note content is required")?;

        let payload = to_payload(&CreateNoteRequest {
            candidate_id,
            note,
            send_notifications,
        })?;
        self.client
            .post_mutation("candidate.createNote", payload, "Failed to create note")
            .await
    }
}
