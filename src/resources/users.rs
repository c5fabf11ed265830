//! User endpoints.

use serde_json::Value;

use super::single;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// User endpoints
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a AshbyClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all users, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client.paginated_post("user.list", Payload::new()).await
    }

    /// Finds a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Value, AshbyError> {
        let email = require_non_blank(email, "You must provide an email")?;
        self.client
            .post_results("user.search", single("email", email))
            .await
    }

    /// Finds a user by their Ashby ID
    pub async fn find_by_id(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "User ID is required")?;
        self.client
            .post_results("user.info", single("userId", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_by_email() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": [{"id": "u1"}]})]);

        let users = transport
            .client()
            .users()
            .find_by_email("recruiter@company.com")
            .await
            .unwrap();

        assert_eq!(users, json!([{"id": "u1"}]));
        assert_eq!(transport.paths(), vec!["user.search"]);
        assert_eq!(transport.bodies(), vec![json!({"email": "recruiter@company.com"})]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": {"id": "user_xyz789"}})]);

        transport.client().users().find_by_id("user_xyz789").await.unwrap();

        assert_eq!(transport.bodies(), vec![json!({"userId": "user_xyz789"})]);
    }

    #[tokio::test]
    async fn test_blank_inputs_are_rejected() {
        let transport = RecordingTransport::default();
        let client = transport.client();

        let err = client.users().find_by_email("").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: You must provide an email");
        let err = client.users().find_by_id("\n").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: User ID is required");
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_with_raw_page() {
        // No results/data field: the whole envelope is one item.
        let transport = RecordingTransport::with_replies(vec![json!({"id": "u1", "email": "a@b.c"})]);

        let users = transport.client().users().list().await.unwrap();

        assert_eq!(users, vec![json!({"id": "u1", "email": "a@b.c"})]);
    }
}
