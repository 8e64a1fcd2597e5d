//! Shared query parameter types for API handlers.

use guidebook_db::repositories::SortDirection;
use serde::Deserialize;

/// Query parameters for the character list endpoint
/// (`?sortBy=name&sortOrder=asc`).
///
/// `sortBy` is parsed against the repository's allowlist in the handler;
/// an unknown key is a validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterListQuery {
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortDirection,
}
