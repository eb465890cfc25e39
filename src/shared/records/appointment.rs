//! Appointment Record
//!
//! A viewing scheduled by a user for a listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, Record, RecordId};
use crate::shared::error::SharedError;

/// Lifecycle of a viewing appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Appointment record as stored in the `appointments` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appointment {
    #[serde(rename = "appointment_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "User_id")]
    pub user_id: String,
    #[serde(rename = "Property_id")]
    pub property_id: String,
    #[serde(rename = "Listing_id")]
    pub listing_id: String,
    #[serde(rename = "Appointment_date")]
    pub appointment_date: DateTime<Utc>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "Created_at")]
    pub created_at: DateTime<Utc>,
}

impl Record for Appointment {
    const COLLECTION: &'static str = "appointments";
    const ID_FIELD: &'static str = "appointment_id";
    const ENTITY: &'static str = "Appointment";
    const DATE_FIELDS: &'static [&'static str] = &["Appointment_date", "Created_at"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn stamp(&mut self, now: DateTime<Utc>) {
        self.id = None;
        self.created_at = now;
    }

    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("User_id", &self.user_id)?;
        require_non_empty("Property_id", &self.property_id)?;
        require_non_empty("Listing_id", &self.listing_id)
    }
}
