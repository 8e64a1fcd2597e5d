//! Route definitions for the characters resource and its image
//! sub-resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use guidebook_core::images::MAX_IMAGE_BYTES;

use crate::handlers::{character, character_image};
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
///
/// POST   /{id}/images            -> upload
/// PATCH  /{id}/images/active     -> set_active
/// DELETE /{id}/images/{filename} -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    let image_routes = Router::new()
        .route("/", post(character_image::upload))
        .route("/active", patch(character_image::set_active))
        .route("/{filename}", delete(character_image::delete_image))
        // Axum's default body limit is well below the 15 MiB image cap;
        // allow the full image plus multipart framing, and let the
        // handler's size check produce the structured 400.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 64 * 1024));

    Router::new()
        .route("/", get(character::list).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
        .nest("/{id}/images", image_routes)
}
