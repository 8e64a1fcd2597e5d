//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use guidebook_core::error::CoreError;
use guidebook_core::images;
use guidebook_core::types::DbId;
use guidebook_db::models::character::{
    Character, CharacterListItem, CreateCharacter, UpdateCharacter,
};
use guidebook_db::repositories::{CharacterRepo, CharacterSortKey};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::CharacterListQuery;
use crate::state::AppState;

/// POST /api/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    input.validate().map_err(AppError::from_validation)?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/characters?sortBy=&sortOrder=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CharacterListQuery>,
) -> AppResult<Json<Vec<CharacterListItem>>> {
    let key = match query.sort_by.as_deref() {
        Some(raw) => CharacterSortKey::parse(raw)?,
        None => CharacterSortKey::Name,
    };
    let characters = CharacterRepo::list(&state.pool, key, query.sort_order).await?;
    Ok(Json(characters))
}

/// GET /api/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    Ok(Json(character))
}

/// PUT /api/characters/{id}
///
/// Partial update: only provided fields are merged into the record, which
/// lets the edit form autosave field by field. Setting `activeImage`
/// requires the filename to be one of the character's current images.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    input.validate().map_err(AppError::from_validation)?;

    if let Some(active) = &input.active_image {
        let current = CharacterRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Character", id))?;
        images::validate_active_image(&current.images, active)?;
    }

    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    Ok(Json(character))
}

/// DELETE /api/characters/{id}
///
/// Removing the database row is the success criterion; the character's
/// upload directory is cleaned up best-effort afterwards.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Character", id).into());
    }

    if let Err(err) = state.uploads.remove_character_dir(id).await {
        tracing::warn!(character_id = id, error = %err, "Failed to remove upload directory");
    }

    Ok(StatusCode::NO_CONTENT)
}
