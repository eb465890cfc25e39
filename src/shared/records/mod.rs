//! Domain Records
//!
//! This module defines the record shapes stored in the document store and
//! exchanged over the HTTP API: properties, listings, inquiries, appointments
//! and users.
//!
//! # Wire Format
//!
//! Each record serializes to the same field names on the wire and in the
//! store. The record's own id is exposed under an entity-specific key
//! (`property_id`, `listing_id`, ...) and is swapped for the store's `_id`
//! by the repository layer (see `backend::store::repository`).
//!
//! Decoding is lenient: missing fields take their zero value and unknown
//! fields are ignored.
//!
//! # Lifecycle
//!
//! Records are created once through [`Record::stamp`], which assigns the
//! creation timestamp and resets server-owned fields, and are never deleted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::error::SharedError;

/// Property record
pub mod property;

/// Listing record
pub mod listing;

/// Inquiry record
pub mod inquiry;

/// Appointment record
pub mod appointment;

/// User record
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use inquiry::Inquiry;
pub use listing::{Listing, ListingStatus, ListingType};
pub use property::{Coordinates, Property};
pub use user::User;

/// Store-generated record identifier
///
/// Wraps the document store's ObjectId and always travels as its
/// 24-character hex form in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// The underlying ObjectId
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Hex representation used on the wire
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for RecordId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = mongodb::bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

/// A record shape that lives in one collection of the document store
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Collection holding records of this type
    const COLLECTION: &'static str;

    /// Wire name of the record's own id
    const ID_FIELD: &'static str;

    /// Human-readable entity name used in log lines and error messages
    const ENTITY: &'static str;

    /// Timestamp fields, kept as BSON dates in the store and RFC 3339 on the wire
    const DATE_FIELDS: &'static [&'static str];

    /// The record's id, if it has been stored
    fn id(&self) -> Option<RecordId>;

    /// Prepare a freshly decoded record for insertion
    ///
    /// Drops any caller-supplied id, sets the creation timestamp to `now`
    /// and resets attachment lists to empty.
    fn stamp(&mut self, now: DateTime<Utc>);

    /// Check field-level invariants before insertion
    fn validate(&self) -> Result<(), SharedError>;
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: i64) -> Result<(), SharedError> {
    if value < 0 {
        return Err(SharedError::validation(field, "must not be negative"));
    }
    Ok(())
}

pub(crate) fn require_non_negative_f64(field: &str, value: f64) -> Result<(), SharedError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SharedError::validation(field, "must be a non-negative number"));
    }
    Ok(())
}
