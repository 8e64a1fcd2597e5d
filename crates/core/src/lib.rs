//! Domain logic for the character guidebook.
//!
//! Everything here is pure and I/O-free: the error taxonomy, the color
//! palette and relationship vocabulary, image-upload validation, and the
//! flip-book pagination engine. The `db` and `api` crates build on these
//! types; nothing in this crate touches the network, the filesystem, or
//! the database.

pub mod color;
pub mod error;
pub mod guidebook;
pub mod images;
pub mod relationship;
pub mod types;
