//! Integration tests for the character repository.
//!
//! Each test runs against a fresh database provisioned by `sqlx::test`
//! with the crate's migrations applied.

use guidebook_core::color::{Hue, PaletteColor, Shade};
use guidebook_core::images::MAX_IMAGES_PER_CHARACTER;
use guidebook_core::relationship::{Relationship, RelationshipKind};
use guidebook_db::models::character::{CreateCharacter, UpdateCharacter};
use guidebook_db::repositories::{CharacterRepo, CharacterSortKey, SortDirection};
use sqlx::PgPool;

fn create_input(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        creation_date: None,
        species: None,
        personality: None,
        primary_color: None,
        secondary_colors: None,
        relationships: None,
    }
}

fn empty_update() -> UpdateCharacter {
    UpdateCharacter {
        name: None,
        creation_date: None,
        species: None,
        personality: None,
        primary_color: None,
        secondary_colors: None,
        relationships: None,
        active_image: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_starts_with_no_images(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &create_input("Luna"))
        .await
        .unwrap();

    assert!(character.id > 0);
    assert_eq!(character.name, "Luna");
    assert!(character.images.is_empty());
    assert_eq!(character.active_image, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_persists_typed_fields(pool: PgPool) {
    let mut input = create_input("Moss");
    input.species = Some("toad".to_string());
    input.primary_color = Some(PaletteColor {
        hue: Hue::Emerald,
        shade: Shade::S600,
    });
    input.relationships = Some(vec![Relationship {
        character_id: 42,
        relationship_type: RelationshipKind::Friend,
    }]);

    let character = CharacterRepo::create(&pool, &input).await.unwrap();

    assert_eq!(character.species.as_deref(), Some("toad"));
    assert_eq!(
        character.primary_color.as_ref().map(|c| c.0),
        Some(PaletteColor {
            hue: Hue::Emerald,
            shade: Shade::S600,
        })
    );
    assert_eq!(
        character.relationships.as_ref().map(|r| r.0.clone()),
        Some(vec![Relationship {
            character_id: 42,
            relationship_type: RelationshipKind::Friend,
        }])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Fen"))
        .await
        .unwrap();

    let mut update = empty_update();
    update.personality = Some("shy, fond of rain".to_string());

    let updated = CharacterRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Fen");
    assert_eq!(updated.personality.as_deref(), Some("shy, fond of rain"));
    assert_eq!(updated.species, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let result = CharacterRepo::update(&pool, 999_999, &empty_update())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn append_image_appends_and_activates(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Pip"))
        .await
        .unwrap();

    CharacterRepo::append_image(&pool, created.id, "1-a.png")
        .await
        .unwrap()
        .unwrap();
    let character = CharacterRepo::append_image(&pool, created.id, "2-b.png")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(character.images, vec!["1-a.png", "2-b.png"]);
    assert_eq!(character.active_image.as_deref(), Some("2-b.png"));
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_images_updates_list_and_active_together(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Wren"))
        .await
        .unwrap();
    CharacterRepo::append_image(&pool, created.id, "1-a.png")
        .await
        .unwrap();
    CharacterRepo::append_image(&pool, created.id, "2-b.png")
        .await
        .unwrap();

    let remaining = vec!["1-a.png".to_string()];
    let character = CharacterRepo::replace_images(&pool, created.id, &remaining, Some("1-a.png"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(character.images, vec!["1-a.png"]);
    assert_eq!(character.active_image.as_deref(), Some("1-a.png"));

    let character = CharacterRepo::replace_images(&pool, created.id, &[], None)
        .await
        .unwrap()
        .unwrap();
    assert!(character.images.is_empty());
    assert_eq!(character.active_image, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_active_image_points_at_member(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Ivy"))
        .await
        .unwrap();
    CharacterRepo::append_image(&pool, created.id, "1-a.png")
        .await
        .unwrap();
    CharacterRepo::append_image(&pool, created.id, "2-b.png")
        .await
        .unwrap();

    let character = CharacterRepo::set_active_image(&pool, created.id, "1-a.png")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(character.active_image.as_deref(), Some("1-a.png"));
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Ash"))
        .await
        .unwrap();

    assert!(CharacterRepo::delete(&pool, created.id).await.unwrap());
    assert!(CharacterRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!CharacterRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_sorted_projection(pool: PgPool) {
    CharacterRepo::create(&pool, &create_input("Bram")).await.unwrap();
    CharacterRepo::create(&pool, &create_input("Ada")).await.unwrap();

    let ascending = CharacterRepo::list(&pool, CharacterSortKey::Name, SortDirection::Asc)
        .await
        .unwrap();
    let names: Vec<&str> = ascending.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bram"]);

    let descending = CharacterRepo::list(&pool, CharacterSortKey::Name, SortDirection::Desc)
        .await
        .unwrap();
    let names: Vec<&str> = descending.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bram", "Ada"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn image_cap_constraint_is_enforced_in_the_database(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Hoard"))
        .await
        .unwrap();

    for i in 0..MAX_IMAGES_PER_CHARACTER {
        CharacterRepo::append_image(&pool, created.id, &format!("{i}-img.png"))
            .await
            .unwrap()
            .unwrap();
    }

    // The handler checks the cap first; the CHECK constraint is the
    // backstop for the concurrent-upload race.
    let result = CharacterRepo::append_image(&pool, created.id, "one-too-many.png").await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn active_image_membership_is_enforced_in_the_database(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &create_input("Nix"))
        .await
        .unwrap();
    CharacterRepo::append_image(&pool, created.id, "1-a.png")
        .await
        .unwrap();

    let result = CharacterRepo::set_active_image(&pool, created.id, "not-a-member.png").await;
    assert!(result.is_err());
}
