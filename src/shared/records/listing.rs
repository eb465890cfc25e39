/**
 * Listing Record
 *
 * A unit offered for sale or rent inside a property. A listing names its
 * parent property by id string; the backend checks that the property exists
 * at creation time (see `backend::listings::handlers::create_listing`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, require_non_negative, require_non_negative_f64, Record, RecordId};
use crate::shared::error::SharedError;

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

/// Whether a listing is currently shown to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
}

/// Listing record as stored in the `listings` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "listing_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Hex id of the parent property
    pub property_id: String,
    pub description: String,
    pub price: f64,
    pub minimum_contract: String,
    pub floor: i64,
    /// Floor area in square meters
    pub size: f64,
    pub bedroom: i64,
    pub bathroom: i64,
    /// e.g. "fully-fitted", "fully furnished"
    pub furniture: String,
    /// Completion state, e.g. "ready to move in"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
    /// N, S, E, W, NE, NW, SE or SW
    pub facing_direction: String,
    pub created_at: DateTime<Utc>,
    /// Hosted photo URLs
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_status: Option<ListingStatus>,
}

impl Record for Listing {
    const COLLECTION: &'static str = "listings";
    const ID_FIELD: &'static str = "listing_id";
    const ENTITY: &'static str = "Listing";
    const DATE_FIELDS: &'static [&'static str] = &["created_at"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn stamp(&mut self, now: DateTime<Utc>) {
        self.id = None;
        self.created_at = now;
        self.photos = Vec::new();
    }

    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("property_id", &self.property_id)?;
        require_non_negative_f64("price", self.price)?;
        require_non_negative_f64("size", self.size)?;
        require_non_negative("bedroom", self.bedroom)?;
        require_non_negative("bathroom", self.bathroom)?;
        Ok(())
    }
}
