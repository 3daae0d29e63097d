use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Host the canonical property URLs point at.
pub const LISTING_HOST: &str = "www.furnishedfinder.com";

/// The upstream hands out listing ids as numbers or strings depending on the
/// endpoint, so both are accepted and written back in their original form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl ListingId {
    /// Empty strings and `0` count as no id at all.
    fn is_blank(&self) -> bool {
        match self {
            ListingId::Number(n) => *n == 0,
            ListingId::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{n}"),
            ListingId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproxLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentAmount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single search result as returned by the GraphQL `search` query.
///
/// Fields the app doesn't look at (amenities, description, `__typename`, ...)
/// are kept in `extra` at every level, and numbers keep their JSON form, so a
/// favorited snapshot is written back exactly as it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<ListingId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approx_location: Option<ApproxLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_amount: Option<RentAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedroom_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    /// The listing id, treating an empty string the same as a missing one.
    pub fn id(&self) -> Option<&ListingId> {
        self.listing_id.as_ref().filter(|id| !id.is_blank())
    }

    /// Canonical URL, the key shared by seen and favorite records.
    pub fn url(&self) -> String {
        listing_url(self.id(), self.name.as_deref())
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unnamed Property",
        }
    }

    pub fn featured_photo(&self) -> Option<&Photo> {
        self.photos.as_deref().and_then(<[Photo]>::first)
    }

    /// Marker position, if the listing carries a usable one.
    /// Zero is treated as missing, the upstream uses it as a placeholder.
    pub fn position(&self) -> Option<(f64, f64)> {
        let loc = self.approx_location.as_ref()?;
        let lat = loc.latitude.filter(|v| v.is_finite() && *v != 0.0)?;
        let lng = loc.longitude.filter(|v| v.is_finite() && *v != 0.0)?;
        Some((lat, lng))
    }
}

pub fn listing_url(listing_id: Option<&ListingId>, name: Option<&str>) -> String {
    match listing_id {
        Some(id) => format!("https://{LISTING_HOST}/property/{id}"),
        None => format!("#{}", name.unwrap_or_default()),
    }
}
