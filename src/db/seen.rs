use crate::db::connection::Database;
use crate::domain::homes::{NewSeenHome, SeenHome};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeenOutcome {
    Inserted(i64),
    AlreadySeen,
}

/// Insert-if-absent keyed on `property_url`. The unique constraint does the
/// de-duplication, so two concurrent calls still leave a single row.
pub fn mark_seen(db: &Database, home: &NewSeenHome) -> Result<SeenOutcome, ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        let changed = conn
            .execute(
                r#"
                INSERT OR IGNORE INTO seen_homes (property_url, property_name, listing_id, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![home.property_url, home.property_name, home.listing_id, now],
            )
            .map_err(|e| ServerError::DbError(format!("Mark seen failed: {e}")))?;

        if changed > 0 {
            Ok(SeenOutcome::Inserted(conn.last_insert_rowid()))
        } else {
            Ok(SeenOutcome::AlreadySeen)
        }
    })
}

/// All seen homes, most recent first.
pub fn list_seen(db: &Database) -> Result<Vec<SeenHome>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT id, property_url, property_name, listing_id, created_at
                FROM seen_homes
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SeenHome {
                    id: row.get(0)?,
                    property_url: row.get(1)?,
                    property_name: row.get(2)?,
                    listing_id: row.get(3)?,
                    created_at: row.get(4)?,
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

pub fn is_seen(db: &Database, property_url: &str) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        let found = conn
            .query_row(
                "SELECT 1 FROM seen_homes WHERE property_url = ?1",
                [property_url],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(found.is_some())
    })
}
