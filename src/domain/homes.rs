use crate::domain::listing::{Listing, ListingId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of `seen_homes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeenHome {
    pub id: i64,
    pub property_url: String,
    pub property_name: Option<String>,
    pub listing_id: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A row of `favorite_homes`, with the snapshot already parsed back to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteHome {
    pub id: i64,
    pub property_url: String,
    pub property_name: Option<String>,
    pub listing_id: Option<String>,
    pub property_data: Option<Value>,
    pub created_at: NaiveDateTime,
}

// Request bodies. `property_url` is optional at the type level so a missing
// field is reported as a 400 with a proper message instead of a parse error.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkSeenRequest {
    pub property_url: Option<String>,
    pub property_name: Option<String>,
    pub listing_id: Option<ListingId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub property_url: Option<String>,
    pub property_name: Option<String>,
    pub listing_id: Option<ListingId>,
    pub property_data: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveFavoriteRequest {
    pub property_url: Option<String>,
}

impl MarkSeenRequest {
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            property_url: Some(listing.url()),
            property_name: listing.name.clone(),
            listing_id: listing.id().cloned(),
        }
    }
}

impl AddFavoriteRequest {
    pub fn for_listing(listing: &Listing) -> Result<Self, serde_json::Error> {
        Ok(Self {
            property_url: Some(listing.url()),
            property_name: listing.name.clone(),
            listing_id: listing.id().cloned(),
            property_data: Some(serde_json::to_value(listing)?),
        })
    }
}

/// Validated insert for `seen_homes`.
#[derive(Debug, Clone)]
pub struct NewSeenHome {
    pub property_url: String,
    pub property_name: Option<String>,
    pub listing_id: Option<String>,
}

/// Validated upsert for `favorite_homes`.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub property_url: String,
    pub property_name: Option<String>,
    pub listing_id: Option<String>,
    pub property_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeStatus {
    pub property_url: String,
    pub is_seen: bool,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeenHomesBody {
    pub seen_homes: Vec<SeenHome>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesBody {
    pub favorites: Vec<FavoriteHome>,
}
