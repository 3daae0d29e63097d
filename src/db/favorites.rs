use crate::db::connection::Database;
use crate::domain::homes::{FavoriteHome, NewFavorite};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

/// Upsert keyed on `property_url`; a repeat replaces the stored snapshot.
/// Returns the row id.
pub fn upsert_favorite(db: &Database, fav: &NewFavorite) -> Result<i64, ServerError> {
    let now = Utc::now().naive_utc();
    let data = fav
        .property_data
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| ServerError::BadRequest(format!("property_data is not serializable: {e}")))?;

    db.with_conn(|conn| {
        conn.query_row(
            r#"
            INSERT INTO favorite_homes (property_url, property_name, listing_id, property_data, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(property_url) DO UPDATE SET
                property_name = excluded.property_name,
                listing_id = excluded.listing_id,
                property_data = excluded.property_data,
                created_at = excluded.created_at
            RETURNING id
            "#,
            params![fav.property_url, fav.property_name, fav.listing_id, data, now],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("Add favorite failed: {e}")))
    })
}

/// All favorites, most recent first. A snapshot that no longer parses comes
/// back as `None`.
pub fn list_favorites(db: &Database) -> Result<Vec<FavoriteHome>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT id, property_url, property_name, listing_id, property_data, created_at
                FROM favorite_homes
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                let property_url: String = row.get(1)?;
                let raw: Option<String> = row.get(4)?;
                let property_data = raw.and_then(|text| match serde_json::from_str(&text) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        log::warn!("Unreadable property_data for {property_url}: {e}");
                        None
                    }
                });

                Ok(FavoriteHome {
                    id: row.get(0)?,
                    property_url,
                    property_name: row.get(2)?,
                    listing_id: row.get(3)?,
                    property_data,
                    created_at: row.get(5)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(results)
    })
}

/// Returns whether a row was removed.
pub fn remove_favorite(db: &Database, property_url: &str) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        let removed = conn
            .execute(
                "DELETE FROM favorite_homes WHERE property_url = ?1",
                [property_url],
            )
            .map_err(|e| ServerError::DbError(format!("Remove favorite failed: {e}")))?;
        Ok(removed > 0)
    })
}

pub fn is_favorite(db: &Database, property_url: &str) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        let found = conn
            .query_row(
                "SELECT 1 FROM favorite_homes WHERE property_url = ?1",
                [property_url],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(found.is_some())
    })
}
