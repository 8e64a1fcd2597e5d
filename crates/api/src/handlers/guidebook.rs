//! Handlers for the guidebook page sequence.
//!
//! The pagination engine in `guidebook_core` is a pure function of the
//! name-sorted character list; these handlers fetch the list and serve
//! the derived pages so every client renders the same book.

use axum::extract::{Path, State};
use axum::Json;
use guidebook_core::error::CoreError;
use guidebook_core::guidebook::{self, PageDescriptor};
use guidebook_core::types::DbId;
use guidebook_db::models::character::CharacterListItem;
use guidebook_db::repositories::{CharacterRepo, CharacterSortKey, SortDirection};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/guidebook/pages
///
/// The full page sequence. Empty when there are no characters; the client
/// renders its empty state instead of an empty book.
pub async fn pages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PageDescriptor<CharacterListItem>>>> {
    let characters =
        CharacterRepo::list(&state.pool, CharacterSortKey::Name, SortDirection::Asc).await?;
    Ok(Json(guidebook::build_page_list(&characters)))
}

/// Resolved navigation target for a character jump.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpTarget {
    pub page_index: usize,
}

/// GET /api/guidebook/characters/{id}/page
///
/// Resolves a table-of-contents or relationship-link jump to the page
/// index of the character's image page.
pub async fn character_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<JumpTarget>> {
    let characters =
        CharacterRepo::list(&state.pool, CharacterSortKey::Name, SortDirection::Asc).await?;
    let page_index = guidebook::character_page_index(&characters, id)
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    Ok(Json(JumpTarget { page_index }))
}
