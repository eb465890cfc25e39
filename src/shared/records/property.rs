/**
 * Property Record
 *
 * A development or building that listings are offered in. Properties carry
 * a price band, a facility list and a gallery of hosted image URLs that is
 * only ever appended to (see `backend::properties::handlers::attach_image`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, require_non_negative, Record, RecordId};
use crate::shared::error::SharedError;

/// Geographic position as a `[lat, lng]` pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

/// Property record as stored in the `properties` collection
///
/// # Example
///
/// ```rust
/// use homelist::shared::records::Property;
///
/// let property: Property = serde_json::from_str(
///     r#"{"Title":"Skyview","Developer":"Acme","MinPrice":100000,"MaxPrice":200000}"#,
/// ).unwrap();
/// assert_eq!(property.title, "Skyview");
/// assert!(property.images.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "property_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Developer")]
    pub developer: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Coordinates")]
    pub coordinates: Coordinates,
    #[serde(rename = "MinPrice")]
    pub min_price: i64,
    #[serde(rename = "MaxPrice")]
    pub max_price: i64,
    #[serde(rename = "Facilities")]
    pub facilities: Vec<String>,
    /// Hosted image URLs, in upload order
    #[serde(rename = "Images")]
    pub images: Vec<String>,
    /// Year of completion
    #[serde(rename = "Built")]
    pub built: i64,
    #[serde(rename = "Created_at")]
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Wire name of the image list, used for `$push` updates
    pub const IMAGES_FIELD: &'static str = "Images";
}

impl Record for Property {
    const COLLECTION: &'static str = "properties";
    const ID_FIELD: &'static str = "property_id";
    const ENTITY: &'static str = "Property";
    const DATE_FIELDS: &'static [&'static str] = &["Created_at"];

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn stamp(&mut self, now: DateTime<Utc>) {
        self.id = None;
        self.created_at = now;
        self.images = Vec::new();
    }

    fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("Title", &self.title)?;
        require_non_negative("MinPrice", self.min_price)?;
        require_non_negative("MaxPrice", self.max_price)?;
        require_non_negative("Built", self.built)?;

        // A zero MaxPrice means "no upper bound given"
        if self.max_price > 0 && self.min_price > self.max_price {
            return Err(SharedError::validation("MinPrice", "must not exceed MaxPrice"));
        }

        let Coordinates(lat, lng) = self.coordinates;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SharedError::validation("Coordinates", "latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(SharedError::validation("Coordinates", "longitude must be within [-180, 180]"));
        }
        Ok(())
    }
}
