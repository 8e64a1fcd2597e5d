//! Route definitions for the guidebook viewer.

use axum::routing::get;
use axum::Router;

use crate::handlers::guidebook;
use crate::state::AppState;

/// Routes mounted at `/guidebook`.
///
/// ```text
/// GET /pages                  -> pages
/// GET /characters/{id}/page   -> character_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(guidebook::pages))
        .route("/characters/{id}/page", get(guidebook::character_page))
}
