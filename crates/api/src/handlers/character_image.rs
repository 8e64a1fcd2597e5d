//! Handlers for a character's uploaded images.
//!
//! The upload path performs two sequential durable operations: write the
//! file, then update the record. They are not transactional, so a failed
//! record update triggers a compensating delete of the just-written file;
//! no failure path leaves an orphaned file behind.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use guidebook_core::error::CoreError;
use guidebook_core::images;
use guidebook_core::types::DbId;
use guidebook_db::models::character::Character;
use guidebook_db::repositories::CharacterRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/characters/{id}/images
///
/// Accepts a multipart form with a required `image` field. The file type
/// is sniffed from the payload's magic bytes; the declared content type
/// and the original filename are ignored. On success the new file is
/// appended to the images list and becomes the active image.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    images::ensure_below_image_cap(character.images.len())?;

    let mut file_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("image") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_bytes = Some(data.to_vec());
            }
            _ => {} // ignore unknown fields
        }
    }

    let data = file_bytes
        .ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    images::ensure_within_size_limit(data.len())?;
    let kind = images::sniff_image_kind(&data)?;
    let filename = images::unique_filename(kind);

    state
        .uploads
        .save(id, &filename, &data)
        .await
        .map_err(|e| CoreError::Storage(e.to_string()))?;

    match CharacterRepo::append_image(&state.pool, id, &filename).await {
        Ok(Some(character)) => Ok(Json(character)),
        Ok(None) => {
            // Character vanished between the capacity check and the update.
            discard_stored_file(&state, id, &filename).await;
            Err(CoreError::not_found("Character", id).into())
        }
        Err(err) => {
            discard_stored_file(&state, id, &filename).await;
            Err(err.into())
        }
    }
}

/// Compensating delete for a stored upload whose record update failed.
async fn discard_stored_file(state: &AppState, id: DbId, filename: &str) {
    if let Err(err) = state.uploads.remove_file(id, filename).await {
        tracing::warn!(
            character_id = id,
            filename,
            error = %err,
            "Failed to remove orphaned upload after database error"
        );
    }
}

/// Request body for `PATCH /api/characters/{id}/images/active`.
#[derive(Debug, Deserialize)]
pub struct SetActiveImage {
    pub filename: String,
}

/// PATCH /api/characters/{id}/images/active
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveImage>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    images::validate_active_image(&character.images, &input.filename)?;

    let character = CharacterRepo::set_active_image(&state.pool, id, &input.filename)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;
    Ok(Json(character))
}

/// DELETE /api/characters/{id}/images/{filename}
///
/// Removes the entry from the images list and recomputes the active image
/// in the same statement: when the active image is removed, the last
/// remaining entry takes over. The underlying file is removed best-effort
/// after the record update succeeds.
pub async fn delete_image(
    State(state): State<AppState>,
    Path((id, filename)): Path<(DbId, String)>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;

    if !character.images.iter().any(|f| f == &filename) {
        return Err(CoreError::NotFound {
            entity: "Image",
            key: filename,
        }
        .into());
    }

    let remaining: Vec<String> = character
        .images
        .iter()
        .filter(|f| *f != &filename)
        .cloned()
        .collect();
    let next_active =
        images::next_active_image(&remaining, &filename, character.active_image.as_deref());

    let updated = CharacterRepo::replace_images(&state.pool, id, &remaining, next_active.as_deref())
        .await?
        .ok_or_else(|| CoreError::not_found("Character", id))?;

    if let Err(err) = state.uploads.remove_file(id, &filename).await {
        tracing::warn!(
            character_id = id,
            filename = %filename,
            error = %err,
            "Failed to remove image file"
        );
    }

    Ok(Json(updated))
}
