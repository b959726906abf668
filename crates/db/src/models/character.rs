//! Character entity model.

use holocron_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A character row from the `characters` table.
///
/// This is also the API response shape for both listings and single
/// lookups; the two are intentionally identical.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    /// In-universe notation, e.g. `19BBY`. Free-form text.
    pub birth_year: Option<String>,
    pub description: Option<String>,
    /// By convention `"rebel"` or `"empire"`; NULL when unknown. Not
    /// constrained by the schema, so old rows may hold other values.
    pub faction: Option<String>,
}

/// Insert payload for a character row. Only the seeder creates rows, so
/// all fields are static literals.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: &'static str,
    pub birth_year: Option<&'static str>,
    pub description: Option<&'static str>,
    pub faction: Option<&'static str>,
}
