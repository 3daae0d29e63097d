// Handlers for /api/homes/*.

use crate::api::{parse_query, read_json, required};
use crate::db::seen::SeenOutcome;
use crate::db::{favorites, seen, Database};
use crate::domain::homes::{
    AddFavoriteRequest, FavoritesBody, HomeStatus, MarkSeenRequest, NewFavorite, NewSeenHome,
    RemoveFavoriteRequest, SeenHomesBody,
};
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use astra::Request;
use serde_json::json;

const URL_REQUIRED: &str = "property_url is required";

pub fn mark_seen(req: &mut Request, db: &Database) -> ResultResp {
    let body: MarkSeenRequest = read_json(req)?;
    let home = NewSeenHome {
        property_url: required(body.property_url, URL_REQUIRED)?,
        property_name: body.property_name,
        listing_id: body.listing_id.map(|id| id.to_string()),
    };

    match seen::mark_seen(db, &home)? {
        SeenOutcome::Inserted(id) => json_response(
            201,
            &json!({ "message": "Home marked as seen", "id": id }),
        ),
        SeenOutcome::AlreadySeen => json_response(
            200,
            &json!({ "message": "Home was already marked as seen" }),
        ),
    }
}

pub fn list_seen(db: &Database) -> ResultResp {
    let seen_homes = seen::list_seen(db)?;
    json_response(200, &SeenHomesBody { seen_homes })
}

pub fn add_favorite(req: &mut Request, db: &Database) -> ResultResp {
    let body: AddFavoriteRequest = read_json(req)?;
    let fav = NewFavorite {
        property_url: required(body.property_url, URL_REQUIRED)?,
        property_name: body.property_name,
        listing_id: body.listing_id.map(|id| id.to_string()),
        property_data: body.property_data.filter(|data| !data.is_null()),
    };

    let id = favorites::upsert_favorite(db, &fav)?;
    json_response(201, &json!({ "message": "Home added to favorites", "id": id }))
}

pub fn list_favorites(db: &Database) -> ResultResp {
    let favorites = favorites::list_favorites(db)?;
    json_response(200, &FavoritesBody { favorites })
}

pub fn remove_favorite(req: &mut Request, db: &Database) -> ResultResp {
    let body: RemoveFavoriteRequest = read_json(req)?;
    let property_url = required(body.property_url, URL_REQUIRED)?;

    if favorites::remove_favorite(db, &property_url)? {
        json_response(200, &json!({ "message": "Home removed from favorites" }))
    } else {
        Err(ServerError::NotFound("Home not found in favorites".to_string()))
    }
}

pub fn status(req: &Request, db: &Database) -> ResultResp {
    let property_url = required(
        parse_query(req).remove("property_url"),
        "property_url parameter is required",
    )?;

    let is_seen = seen::is_seen(db, &property_url)?;
    let is_favorite = favorites::is_favorite(db, &property_url)?;

    json_response(
        200,
        &HomeStatus {
            property_url,
            is_seen,
            is_favorite,
        },
    )
}
