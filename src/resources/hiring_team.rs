//! Hiring team membership for jobs, applications and openings.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::require_non_blank;

/// Entity whose hiring team is being changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiringTeamTarget {
    Job,
    Application,
    Opening,
}

impl HiringTeamTarget {
    /// Payload field carrying the target's ID
    pub const fn id_field(&self) -> &'static str {
        match self {
            Self::Job => "jobId",
            Self::Application => "applicationId",
            Self::Opening => "openingId",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Job => "job",
            Self::Application => "application",
            Self::Opening => "opening",
        }
    }

    const fn missing_id_message(&self) -> &'static str {
        match self {
            Self::Job => "Job ID is required",
            Self::Application => "Application ID is required",
            Self::Opening => "Opening ID is required",
        }
    }
}

impl fmt::Display for HiringTeamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HiringTeamTarget {
    type Err = AshbyError;

    /// Accepts `job`, `application` or `opening` (case-insensitive, optional leading `:`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(':').to_ascii_lowercase().as_str() {
            "job" => Ok(Self::Job),
            "application" => Ok(Self::Application),
            "opening" => Ok(Self::Opening),
            _ => Err(AshbyError::InvalidInput(format!(
                "Invalid type: {s}. Must be one of job, application, or opening."
            ))),
        }
    }
}

/// Payload shared by `hiringTeam.addMember` and `hiringTeam.removeMember`
pub fn member_payload(
    target: HiringTeamTarget,
    id: &str,
    member_id: &str,
    role_id: &str,
) -> Result<Payload, AshbyError> {
    let id = require_non_blank(id, target.missing_id_message())?;
    let member_id = require_non_blank(member_id, "Team member ID is required")?;
    let role_id = require_non_blank(role_id, "Role ID is required")?;

    let mut payload = Payload::new();
    payload.insert(target.id_field().to_string(), Value::from(id));
    payload.insert("teamMemberId".to_string(), Value::from(member_id));
    payload.insert("roleId".to_string(), Value::from(role_id));
    Ok(payload)
}

/// Hiring team endpoints
#[derive(Debug, Clone, Copy)]
pub struct HiringTeam<'a> {
    client: &'a AshbyClient,
}

impl<'a> HiringTeam<'a> {
    pub(crate) fn new(client: &'a AshbyClient) -> Self {
        Self { client }
    }

    /// Adds a member with `role_id` to the hiring team of the target entity
    pub async fn add_member(
        &self,
        target: HiringTeamTarget,
        id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value, AshbyError> {
        let payload = member_payload(target, id, member_id, role_id)?;
        self.client
            .post_mutation(
                "hiringTeam.addMember",
                payload,
                "Failed to add hiring team member",
            )
            .await
    }

    /// Removes a member with `role_id` from the hiring team of the target entity
    pub async fn remove_member(
        &self,
        target: HiringTeamTarget,
        id: &str,
        member_id: &str,
        role_id: &str,
    ) -> Result<Value, AshbyError> {
        let payload = member_payload(target, id, member_id, role_id)?;
        self.client
            .post_mutation(
                "hiringTeam.removeMember",
                payload,
                "Failed to remove hiring team member",
            )
            .await
    }
}
