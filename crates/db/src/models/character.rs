//! Character entity model and DTOs.

use chrono::NaiveDate;
use guidebook_core::color::PaletteColor;
use guidebook_core::guidebook::PageEntry;
use guidebook_core::relationship::Relationship;
use guidebook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
///
/// `images` is the ordered list of stored upload filenames; `active_image`,
/// when set, is always one of them (enforced in the repository and by a DB
/// CHECK constraint). Wire names are camelCase to match the web client.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub creation_date: Option<NaiveDate>,
    pub species: Option<String>,
    pub personality: Option<String>,
    pub primary_color: Option<Json<PaletteColor>>,
    pub secondary_colors: Option<Json<Vec<PaletteColor>>>,
    pub relationships: Option<Json<Vec<Relationship>>>,
    pub images: Vec<String>,
    pub active_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection used for listing and for the guidebook pagination engine.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterListItem {
    pub id: DbId,
    pub name: String,
    pub species: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub primary_color: Option<Json<PaletteColor>>,
    pub active_image: Option<String>,
}

impl PageEntry for CharacterListItem {
    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new character. Only `name` is required; the record
/// always starts with no images and no active image.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub creation_date: Option<NaiveDate>,
    pub species: Option<String>,
    pub personality: Option<String>,
    pub primary_color: Option<PaletteColor>,
    pub secondary_colors: Option<Vec<PaletteColor>>,
    pub relationships: Option<Vec<Relationship>>,
}

/// DTO for partial updates (full edits and field-by-field autosave alike).
/// All fields are optional; only provided fields are applied.
///
/// `active_image` may be changed here but must name an existing member of
/// the character's images list; the list itself is only mutated through
/// the dedicated image operations.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub species: Option<String>,
    pub personality: Option<String>,
    pub primary_color: Option<PaletteColor>,
    pub secondary_colors: Option<Vec<PaletteColor>>,
    pub relationships: Option<Vec<Relationship>>,
    pub active_image: Option<String>,
}
