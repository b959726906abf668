//! Handlers and routes for the `/characters` resource.
//!
//! ```text
//! GET /characters           -> list_characters (optional ?search=)
//! GET /characters/{id}      -> get_character
//! ```

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::character::Character;
use holocron_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Longest accepted `search` needle, in characters.
const MAX_SEARCH_LEN: usize = 100;

/// Query parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match on character name.
    pub search: Option<String>,
}

/// GET /characters
///
/// Returns all characters, or only those whose name contains `search`
/// (case-insensitive, anywhere in the name). An empty `search` means no
/// filter, same as omitting the parameter. Row order follows the store;
/// callers must not rely on it.
async fn list_characters(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = match params.search.as_deref() {
        Some(needle) if needle.chars().count() > MAX_SEARCH_LEN => {
            return Err(AppError::Core(CoreError::Validation {
                field: "search",
                message: format!("must be at most {MAX_SEARCH_LEN} characters"),
            }));
        }
        Some(needle) if !needle.is_empty() => {
            CharacterRepo::search_by_name(&state.pool, needle).await?
        }
        _ => CharacterRepo::list_all(&state.pool).await?,
    };
    Ok(Json(characters))
}

/// GET /characters/{id}
///
/// The path segment is taken as a string and parsed by hand so that a
/// non-integer id surfaces as a structured validation error instead of
/// the framework's default rejection.
async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Character>> {
    let id: DbId = id.parse().map_err(|_| {
        AppError::Core(CoreError::Validation {
            field: "id",
            message: "must be an integer".to_string(),
        })
    })?;

    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// Mount character routes at the application root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/characters/{id}", get(get_character))
}
