pub mod character;
pub mod guidebook;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /characters                        list, create
/// /characters/{id}                   get, update, delete
/// /characters/{id}/images            upload (multipart)
/// /characters/{id}/images/active     set active image (PATCH)
/// /characters/{id}/images/{filename} delete image
///
/// /guidebook/pages                   full page sequence
/// /guidebook/characters/{id}/page    resolve character jump
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/guidebook", guidebook::router())
}
