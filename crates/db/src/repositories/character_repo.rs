//! Repository for the `characters` table.

use guidebook_core::error::CoreError;
use guidebook_core::types::DbId;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::character::{
    Character, CharacterListItem, CreateCharacter, UpdateCharacter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, creation_date, species, personality, primary_color, \
     secondary_colors, relationships, images, active_image, created_at, updated_at";

/// Columns backing the [`CharacterListItem`] projection.
const LIST_COLUMNS: &str = "id, name, species, creation_date, primary_color, active_image";

/// Sortable columns for the list endpoint. Parsed from the `sortBy` query
/// parameter; anything outside this allowlist is a validation error, which
/// also keeps user input out of the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterSortKey {
    Name,
    Species,
    CreationDate,
    CreatedAt,
}

impl CharacterSortKey {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "name" => Ok(Self::Name),
            "species" => Ok(Self::Species),
            "creationDate" => Ok(Self::CreationDate),
            "createdAt" => Ok(Self::CreatedAt),
            other => Err(CoreError::Validation(format!(
                "Unknown sortBy '{other}'. Must be one of: name, species, creationDate, createdAt"
            ))),
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Species => "species",
            Self::CreationDate => "creation_date",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction for the list endpoint (`sortOrder=asc|desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Provides CRUD operations for characters plus the image-list mutations.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row. Images start
    /// empty and the active image absent (DB defaults).
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (name, creation_date, species, personality, primary_color, secondary_colors, relationships)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.creation_date)
            .bind(&input.species)
            .bind(&input.personality)
            .bind(input.primary_color.map(Json))
            .bind(input.secondary_colors.as_ref().map(Json))
            .bind(input.relationships.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters as the list projection, ordered by the given
    /// key and direction with the ID as a stable tiebreaker.
    pub async fn list(
        pool: &PgPool,
        key: CharacterSortKey,
        direction: SortDirection,
    ) -> Result<Vec<CharacterListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM characters ORDER BY {} {}, id ASC",
            key.column(),
            direction.sql()
        );
        sqlx::query_as::<_, CharacterListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    ///
    /// Membership of `active_image` in the images list is validated by the
    /// caller against the current row; the DB CHECK constraint catches
    /// anything that slips through a concurrent image removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                creation_date = COALESCE($3, creation_date),
                species = COALESCE($4, species),
                personality = COALESCE($5, personality),
                primary_color = COALESCE($6, primary_color),
                secondary_colors = COALESCE($7, secondary_colors),
                relationships = COALESCE($8, relationships),
                active_image = COALESCE($9, active_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.creation_date)
            .bind(&input.species)
            .bind(&input.personality)
            .bind(input.primary_color.map(Json))
            .bind(input.secondary_colors.as_ref().map(Json))
            .bind(input.relationships.as_ref().map(Json))
            .bind(&input.active_image)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was
    /// removed. Cleanup of the character's image files is the caller's
    /// responsibility (best-effort, after the row is gone).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append a freshly stored upload to the images list and make it the
    /// active image, in a single statement so the active-image invariant
    /// holds atomically. Returns `None` if the row no longer exists.
    pub async fn append_image(
        pool: &PgPool,
        id: DbId,
        filename: &str,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters
             SET images = array_append(images, $2), active_image = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(filename)
            .fetch_optional(pool)
            .await
    }

    /// Replace the images list and active image together. Used by image
    /// removal, where the caller recomputes both from the current row.
    pub async fn replace_images(
        pool: &PgPool,
        id: DbId,
        images: &[String],
        active_image: Option<&str>,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters
             SET images = $2, active_image = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(images)
            .bind(active_image)
            .fetch_optional(pool)
            .await
    }

    /// Point the active image at an existing member of the images list.
    /// Membership is validated by the caller; the DB CHECK constraint is
    /// the backstop.
    pub async fn set_active_image(
        pool: &PgPool,
        id: DbId,
        filename: &str,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET active_image = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(filename)
            .fetch_optional(pool)
            .await
    }
}
