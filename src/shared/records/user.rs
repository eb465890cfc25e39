/**
 * User Record
 *
 * An account that inquiries and appointments refer to by id. The email is
 * used as a lookup key by `GET /check/user`; the store does not enforce its
 * uniqueness.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Record, RecordId};
use crate::shared::error::SharedError;

/// Wire name of the email field, used for existence lookups
pub const EMAIL_FIELD: &str = "email";

/// User record as stored in the `users` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    /// Stored as supplied; blanked before users are listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Copy of this user without the password, for API responses
    pub fn redacted(mut self) -> Self {
        self.password = None;
        self
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    const ID_FIELD: &'static str = "user_id";
    const ENTITY: &'static str = "User";
    const DATE_FIELDS: &'static [&'static str] = &["created_at"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn stamp(&mut self, now: DateTime<Utc>) {
        self.id = None;
        self.created_at = now;
    }

    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name)?;
        require_non_empty(EMAIL_FIELD, &self.email)?;
        if !self.email.contains('@') {
            return Err(SharedError::validation(EMAIL_FIELD, "must contain '@'"));
        }
        Ok(())
    }
}
