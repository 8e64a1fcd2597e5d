pub mod character;
pub mod character_image;
pub mod guidebook;
