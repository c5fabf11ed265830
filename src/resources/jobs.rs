//! Job endpoints.
//!
//! Lists jobs and job templates, finds a job by ID, searches by requisition ID
//! or title, creates jobs and manages a job's hiring team.

use serde_json::Value;

use super::hiring_team::{HiringTeam, HiringTeamTarget};
use super::{insert_present, single};
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::{require_any, require_fields, require_non_blank};

/// Fields `job.create` refuses to work without
pub const REQUIRED_CREATE_FIELDS: [&str; 3] = ["title", "teamId", "locationId"];

/// Job endpoints
#[derive(Debug, Clone, Copy)]
pub struct Jobs<'a> {
    client: &'a AshbyClient,
}

impl<'a> Jobs<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all jobs, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client.paginated_post("job.list", Payload::new()).await
    }

    /// Finds a job by its Ashby ID
    pub async fn find(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Job ID is required")?;
        self.client.post_results("job.info", single("id", id)).await
    }

    /// Searches jobs by requisition ID and/or title; at least one is required
    pub async fn search(
        &self,
        requisition_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<Value, AshbyError> {
        let mut payload = Payload::new();
        insert_present(&mut payload, "requisitionId", requisition_id);
        insert_present(&mut payload, "title", title);
        require_any(
            &payload,
            "You must provide at least a job title or a requisition id",
        )?;

        self.client.post_results("job.search", payload).await
    }

    /// Fetches all job templates, following pagination
    pub async fn templates(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("jobTemplate.list", Payload::new())
            .await
    }

    /// Creates a job. `title`, `teamId` and `locationId` must be present and non-blank.
    pub async fn create(&self, payload: Payload) -> Result<Value, AshbyError> {
        require_fields(&payload, &REQUIRED_CREATE_FIELDS)?;
        self.client
            .post_mutation("job.create", payload, "Failed to create job")
            .await
    }

    pub async fn add_hiring_team_member(
        &self,
        job_id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value, AshbyError> {
        HiringTeam::new(self.client)
            .add_member(HiringTeamTarget::Job, job_id, member_id, role_id)
            .await
    }

    pub async fn remove_hiring_team_member(
        &self,
        job_id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value, AshbyError> {
        HiringTeam::new(self.client)
            .remove_member(HiringTeamTarget::Job, job_id, member_id, role_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::RecordingTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_find() {
        let transport = RecordingTransport::with_replies(vec![json!({"results": {"id": "job_abc123"}})]);

        let job = transport.client().jobs().find("job_abc123").await.unwrap();

        assert_eq!(job["id"], "job_abc123");
        assert_eq!(transport.paths(), vec!["job.info"]);
        assert_eq!(transport.bodies(), vec![json!({"id": "job_abc123"})]);
    }

    #[tokio::test]
    async fn test_search() {
        let transport = RecordingTransport::with_replies(vec![
            json!({"results": [{"id": "job_1"}]}),
            json!({"results": []}),
        ]);
        let client = transport.client();

        client.jobs().search(Some("REQ-001"), None).await.unwrap();
        client
            .jobs()
            .search(None, Some("Staff Engineer"))
            .await
            .unwrap();

        assert_eq!(
            transport.bodies(),
            vec![
                json!({"requisitionId": "REQ-001"}),
                json!({"title": "Staff Engineer"}),
            ]
        );

        let err = client.jobs().search(None, None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: You must provide at least a job title or a requisition id"
        );
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_templates_are_paginated() {
        let transport = RecordingTransport::with_replies(vec![
            json!({"results": [{"id": "t1"}], "moreDataAvailable": true, "nextCursor": "x"}),
            json!({"results": [{"id": "t2"}], "moreDataAvailable": false}),
        ]);

        let templates = transport.client().jobs().templates().await.unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(transport.paths(), vec!["jobTemplate.list", "jobTemplate.list"]);
    }

    #[tokio::test]
    async fn test_create_validates_required_fields() {
        let transport = RecordingTransport::default();
        let payload = json!({"title": "Engineer", "locationId": ""});

        let err = transport
            .client()
            .jobs()
            .create(payload.as_object().unwrap().clone())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid input: Missing required fields: teamId, locationId"
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_passes_payload_through() {
        let transport = RecordingTransport::with_replies(vec![json!({
            "success": true,
            "results": {"id": "job_new"}
        })]);
        let payload = json!({
            "title": "Engineer",
            "teamId": "team_1",
            "locationId": "loc_1",
            "defaultInterviewPlanId": "plan_1"
        });

        let job = transport
            .client()
            .jobs()
            .create(payload.as_object().unwrap().clone())
            .await
            .unwrap();

        assert_eq!(job, json!({"id": "job_new"}));
        assert_eq!(transport.bodies(), vec![payload]);
    }

    #[tokio::test]
    async fn test_hiring_team_uses_job_id() {
        let transport = RecordingTransport::with_replies(vec![json!({"success": true, "results": {}})]);

        transport
            .client()
            .jobs()
            .add_hiring_team_member("job_123", "user_456", "role_789")
            .await
            .unwrap();

        assert_eq!(transport.paths(), vec!["hiringTeam.addMember"]);
        assert_eq!(
            transport.bodies(),
            vec![json!({"jobId": "job_123", "teamMemberId": "user_456", "roleId": "role_789"})]
        );
    }

    #[tokio::test]
    async fn test_remove_hiring_team_member() {
        let transport = RecordingTransport::with_replies(vec![json!({"success": true, "results": {}})]);

        transport
            .client()
            .jobs()
            .remove_hiring_team_member("job_123", "user_456", "role_789")
            .await
            .unwrap();

        assert_eq!(transport.paths(), vec!["hiringTeam.removeMember"]);
    }
}
