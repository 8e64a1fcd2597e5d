//! Relationship vocabulary linking characters to each other.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// The six supported relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Parent,
    Child,
    Spouse,
    Sibling,
    Friend,
    Enemy,
}

/// A directed link from the owning character to `character_id`.
///
/// The target id is not checked for existence; a dangling link renders as
/// an unknown character rather than failing the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub character_id: DbId,
    pub relationship_type: RelationshipKind,
}
