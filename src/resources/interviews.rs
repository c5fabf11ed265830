//! Interview schedules, plans and stages.

use serde_json::Value;

use super::single;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Interview endpoints
#[derive(Debug, Clone, Copy)]
pub struct Interviews<'a> {
    client: &'a AshbyClient,
}

impl<'a> Interviews<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all interview schedules matching `filter`, following pagination.
    ///
    /// `filter` is sent as-is on every page (e.g. `applicationId`, `interviewStageId`).
    pub async fn schedules(&self, filter: Payload) -> Result<Vec<Value>, AshbyError> {
        self.client
            .paginated_post("interviewSchedule.list", filter)
            .await
    }

    pub async fn plans(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .post_results_list("interviewPlan.list", Payload::new())
            .await
    }

    pub async fn stages(&self) -> Result<Vec<Value>, AshbyError> {
        self.client
            .post_results_list("interviewStage.list", Payload::new())
            .await
    }

    /// Finds an interview by its Ashby ID
    pub async fn find(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Interview ID is required")?;
        self.client
            .post_results("interview.info", single("id", id))
            .await
    }

    /// Finds an interview stage by its Ashby ID
    pub async fn stage(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Stage ID is required")?;
        self.client
            .post_results("interviewStage.info", single("interviewStageId", id))
            .await
    }
}
