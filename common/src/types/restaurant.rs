use crate::errors::QueryError;
use crate::utils::parse_time_of_day;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A restaurant as kept by the backing store.
///
/// Read-only for the query path: records are selected and mapped, never
/// modified. Unknown fields in stored documents are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    /// Storage-level identifier; never exposed to clients.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: String,
    pub closes_at: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl RestaurantRecord {
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Parsed `(opens_at, closes_at)`.
    ///
    /// ## Errors
    /// `QueryError::InvalidTimeOfDay` naming the first field that does not
    /// parse.
    pub fn opening_hours(&self) -> Result<(NaiveTime, NaiveTime), QueryError> {
        let parse = |value: &str| {
            parse_time_of_day(value).ok_or_else(|| QueryError::InvalidTimeOfDay {
                restaurant_id: self.restaurant_id.clone(),
                value: value.to_string(),
            })
        };
        Ok((parse(&self.opens_at)?, parse(&self.closes_at)?))
    }
}

/// A restaurant as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub restaurant_id: String,
    pub name: String,
    pub city: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: String,
    pub closes_at: String,
    pub attributes: Vec<String>,
}

impl From<&RestaurantRecord> for Restaurant {
    fn from(record: &RestaurantRecord) -> Self {
        Restaurant {
            restaurant_id: record.restaurant_id.clone(),
            name: sanitize_name(&record.name),
            city: record.city.clone(),
            image_url: record.image_url.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            opens_at: record.opens_at.clone(),
            closes_at: record.closes_at.clone(),
            attributes: record.attributes.clone(),
        }
    }
}

/// Keeps ASCII letters, digits and spaces; everything else is dropped.
/// Whitespace is left exactly as it comes out.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
