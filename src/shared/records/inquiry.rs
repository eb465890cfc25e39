//! Inquiry Record
//!
//! A message a user sends about a property. The user and property ids are
//! carried as plain strings and are not checked against the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Record, RecordId};
use crate::shared::error::SharedError;

/// Inquiry record as stored in the `inquiries` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inquiry {
    #[serde(rename = "inquiry_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub property_id: String,
    pub message: String,
    #[serde(rename = "Created_at")]
    pub created_at: DateTime<Utc>,
}

impl Record for Inquiry {
    const COLLECTION: &'static str = "inquiries";
    const ID_FIELD: &'static str = "inquiry_id";
    const ENTITY: &'static str = "Inquiry";
    const DATE_FIELDS: &'static [&'static str] = &["Created_at"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn stamp(&mut self, now: DateTime<Utc>) {
        self.id = None;
        self.created_at = now;
    }

    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("user_id", &self.user_id)?;
        require_non_empty("property_id", &self.property_id)?;
        require_non_empty("message", &self.message)
    }
}
