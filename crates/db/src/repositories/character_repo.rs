//! Repository for the `characters` table.

use holocron_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::Character;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_year, description, faction";

/// Provides read queries for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every character, in store order (no ordering guarantee).
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// List characters whose name contains `needle`, case-insensitively.
    ///
    /// LIKE metacharacters in the needle are escaped, so matching is
    /// literal substring containment. SQLite's LIKE is case-insensitive
    /// for ASCII.
    pub async fn search_by_name(
        pool: &SqlitePool,
        needle: &str,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters \
             WHERE name LIKE '%' || ?1 || '%' ESCAPE '\\'"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(escape_like(needle))
            .fetch_all(pool)
            .await
    }

    /// Count all character rows. The seeder's gate.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }
}

/// Escape `%`, `_`, and the escape character itself for use in a LIKE
/// pattern with `ESCAPE '\'`.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
