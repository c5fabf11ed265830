//! Endpoint wrappers, one module per Ashby resource.
//!
//! Each resource is a lightweight handle borrowing the client:
//!
//! ```rust,ignore
//! let offer = client.offers().find("offer_xyz789").await?;
//! ```
//!
//! Handles validate caller input, build the JSON payload and unwrap the
//! `results` field of the response; all I/O goes through [`AshbyClient`].

pub mod applications;
pub mod candidates;
pub mod close_reasons;
pub mod custom_fields;
pub mod departments;
pub mod feedback;
pub mod hiring_team;
pub mod interviews;
pub mod job_postings;
pub mod jobs;
pub mod offers;
pub mod openings;
pub mod users;

use serde::Serialize;
use serde_json::Value;

use crate::client::AshbyClient;
use crate::error::AshbyError;
use crate::types::Payload;
use crate::validation::is_blank;

pub use applications::Applications;
pub use candidates::Candidates;
pub use close_reasons::CloseReasons;
pub use custom_fields::CustomFields;
pub use departments::Departments;
pub use feedback::Feedback;
pub use hiring_team::{HiringTeam, HiringTeamTarget};
pub use interviews::Interviews;
pub use job_postings::{JobPostingFilter, JobPostings};
pub use jobs::Jobs;
pub use offers::Offers;
pub use openings::Openings;
pub use users::Users;

impl AshbyClient {
    pub fn applications(&self) -> Applications<'_> {
        Applications::new(self)
    }

    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self)
    }

    pub fn close_reasons(&self) -> CloseReasons<'_> {
        CloseReasons::new(self)
    }

    pub fn custom_fields(&self) -> CustomFields<'_> {
        CustomFields::new(self)
    }

    pub fn departments(&self) -> Departments<'_> {
        Departments::new(self)
    }

    pub fn feedback(&self) -> Feedback<'_> {
        Feedback::new(self)
    }

    pub fn hiring_team(&self) -> HiringTeam<'_> {
        HiringTeam::new(self)
    }

    pub fn interviews(&self) -> Interviews<'_> {
        Interviews::new(self)
    }

    pub fn job_postings(&self) -> JobPostings<'_> {
        JobPostings::new(self)
    }

    pub fn jobs(&self) -> Jobs<'_> {
        Jobs::new(self)
    }

    pub fn offers(&self) -> Offers<'_> {
        Offers::new(self)
    }

    pub fn openings(&self) -> Openings<'_> {
        Openings::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }
}

/// Payload with a single string field
pub(crate) fn single(key: &str, value: &str) -> Payload {
    let mut payload = Payload::new();
    payload.insert(key.to_string(), Value::from(value));
    payload
}

/// Insert `value` under `key` unless it is absent or blank
pub(crate) fn insert_present(payload: &mut Payload, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        payload.insert(key.to_string(), Value::from(value));
    }
}

/// Serialize a typed request body into a payload
pub(crate) fn to_payload<T: Serialize>(request: &T) -> Result<Payload, AshbyError> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        other => Err(AshbyError::InvalidInput(format!(
            "request body must be a JSON object, got {other}"
        ))),
    }
}

/// Nested field of an entity, `null` when the entity is blank or lacks it
pub(crate) fn field_of(entity: &Value, key: &str) -> Value {
    if is_blank(entity) {
        return Value::Null;
    }
    entity.get(key).cloned().unwrap_or(Value::Null)
}
