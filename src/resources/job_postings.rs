//! Job posting endpoints.
//!
//! Besides plain lookups this module resolves the postings linked to a job and
//! exposes the `linkedData` / `applicationFormDefinition` sections of a posting.

use serde::Serialize;
use serde_json::Value;

use super::{field_of, single, to_payload};
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Filters accepted by `jobPosting.list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingFilter {
    /// Only postings publicly listed on the job board. Sent only when `true`.
    #[serde(skip_serializing_if = "is_not_set")]
    pub listed_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_board_id: Option<String>,
}

fn is_not_set(flag: &Option<bool>) -> bool {
    *flag != Some(true)
}

impl JobPostingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listed_only(mut self) -> Self {
        self.listed_only = Some(true);
        self
    }

    pub fn with_job_board_id(mut self, job_board_id: impl Into<String>) -> Self {
        self.job_board_id = Some(job_board_id.into());
        self
    }
}

/// Job posting endpoints
#[derive(Debug, Clone, Copy)]
pub struct JobPostings<'a> {
    client: &'a AshbyClient,
}

impl<'a> JobPostings<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Lists listed and unlisted job postings
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.list_with(&JobPostingFilter::default()).await
    }

    pub async fn list_with(&self, filter: &JobPostingFilter) -> Result<Vec<Value>, AshbyError> {
        let payload = to_payload(filter)?;
        self.client
            .post_results_list("jobPosting.list", payload)
            .await
    }

    /// Finds a job posting by its Ashby ID
    pub async fn find_by_id(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Job Posting ID is required")?;
        self.client
            .post_results("jobPosting.info", single("jobPostingId", id))
            .await
    }

    /// Structured data for search-engine rich results, `null` when absent
    pub async fn linked_data(&self, id: &str) -> Result<Value, AshbyError> {
        let posting = self.find_by_id(id).await?;
        Ok(field_of(&posting, "linkedData"))
    }

    pub async fn application_form_definition(&self, id: &str) -> Result<Value, AshbyError> {
        let posting = self.find_by_id(id).await?;
        Ok(field_of(&posting, "applicationFormDefinition"))
    }

    /// Updates a job posting with the fields in `payload`.
    pub async fn update(&self, id: &str, mut payload: Payload) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Job Posting ID is required")?;
        if payload.is_empty() {
            return Err(AshbyError::invalid_input("Update payload cannot be empty"));
        }
        payload.insert("jobPostingId".to_string(), Value::from(id));

        self.client
            .post_mutation("jobPosting.update", payload, "Failed to update job posting")
            .await
    }

    /// Every posting linked to a job.
    ///
    /// Fetches the job, then each ID in its `jobPostingIds`, one request at a
    /// time and in order. A job without postings yields an empty list.
    pub async fn by_job_id(&self, job_id: &str) -> Result<Vec<Value>, AshbyError> {
        let job_id = require_non_blank(job_id, "Job ID is required")?;
        let job = self
            .client
            .post_results("job.info", single("id", job_id))
            .await?;

        let ids: Vec<String> = match field_of(&job, "jobPostingIds") {
            Value::Array(ids) => ids
                .into_iter()
                .filter_map(|id| id.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        let mut postings = Vec::with_capacity(ids.len());
        for id in &ids {
            postings.push(self.find_by_id(id).await?);
        }
        Ok(postings)
    }
}
