//! Offer endpoints.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use super::single;
use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Offer endpoints
#[derive(Debug, Clone, Copy)]
pub struct Offers<'a> {
    client: &'a AshbyClient,
}

impl<'a> Offers<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Fetches all offers, following pagination
    pub async fn list(&self) -> Result<Vec<Value>, AshbyError> {
        self.client.paginated_post("offer.list", Payload::new()).await
    }

    /// Finds an offer by its Ashby ID
    pub async fn find(&self, id: &str) -> Result<Value, AshbyError> {
        let id = require_non_blank(id, "Offer ID is required")?;
        self.client.post_results("offer.info", single("id", id)).await
    }

    /// Offers attached to one application (single request)
    pub async fn by_application_id(&self, application_id: &str) -> Result<Vec<Value>, AshbyError> {
        let application_id = require_non_blank(application_id, "Application ID is required")?;
        self.client
            .post_results_list("offer.list", single("applicationId", application_id))
            .await
    }

    /// The offer of an application whose latest version was created last.
    ///
    /// Offers without a parseable `latestVersion.createdAt` rank lowest.
    pub async fn most_recent_by_application_id(
        &self,
        application_id: &str,
    ) -> Result<Option<Value>, AshbyError> {
        let offers = self.by_application_id(application_id).await?;
        Ok(most_recent(offers))
    }
}

fn latest_version_created_at(offer: &Value) -> Option<DateTime<FixedOffset>> {
    offer
        .pointer("/latestVersion/createdAt")
        .and_then(Value::as_str)
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
}

/// Latest offer by creation time; on a tie the earlier offer in the list wins.
fn most_recent(offers: Vec<Value>) -> Option<Value> {
    offers
        .into_iter()
        .rev()
        .max_by_key(|offer| latest_version_created_at(offer))
}
