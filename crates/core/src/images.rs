//! Image upload validation and active-image lifecycle rules.
//!
//! Acceptance is decided by sniffing the first bytes of the payload, never
//! by the caller-declared content type or the original filename -- declared
//! MIME types are untrustworthy. The active-image invariant lives here as
//! pure functions so the repository layer can apply them atomically with
//! the record update:
//!
//! - the active image, when set, is always a member of the images list;
//! - the images list never exceeds [`MAX_IMAGES_PER_CHARACTER`] entries.

use rand::Rng;

use crate::error::CoreError;

/// Maximum number of images stored per character.
pub const MAX_IMAGES_PER_CHARACTER: usize = 20;

/// Maximum accepted upload size (15 MiB).
pub const MAX_IMAGE_BYTES: usize = 15 * 1024 * 1024;

/// Image formats accepted for upload, as detected from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageKind {
    /// File extension for stored uploads of this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// Canonical MIME type.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// Detect the image format from the payload's magic bytes.
///
/// Formats `image::guess_format` recognizes but the guidebook does not
/// accept (bmp, tiff, ...) are rejected the same way as garbage input.
pub fn sniff_image_kind(bytes: &[u8]) -> Result<ImageKind, CoreError> {
    let format = image::guess_format(bytes).map_err(|_| {
        CoreError::UnsupportedImageType(
            "Could not detect an image format from the file content".into(),
        )
    })?;

    match format {
        image::ImageFormat::Jpeg => Ok(ImageKind::Jpeg),
        image::ImageFormat::Png => Ok(ImageKind::Png),
        image::ImageFormat::Gif => Ok(ImageKind::Gif),
        image::ImageFormat::WebP => Ok(ImageKind::Webp),
        other => Err(CoreError::UnsupportedImageType(format!(
            "Detected {other:?}; allowed types are jpeg, png, gif, webp"
        ))),
    }
}

/// Reject the upload when the character already holds the maximum number of
/// images.
pub fn ensure_below_image_cap(current_count: usize) -> Result<(), CoreError> {
    if current_count >= MAX_IMAGES_PER_CHARACTER {
        Err(CoreError::ImageLimit(format!(
            "Character already has the maximum of {MAX_IMAGES_PER_CHARACTER} images"
        )))
    } else {
        Ok(())
    }
}

/// Reject payloads larger than [`MAX_IMAGE_BYTES`].
pub fn ensure_within_size_limit(len: usize) -> Result<(), CoreError> {
    if len > MAX_IMAGE_BYTES {
        Err(CoreError::ImageTooLarge(format!(
            "Upload is {len} bytes; the limit is {MAX_IMAGE_BYTES} bytes (15 MiB)"
        )))
    } else {
        Ok(())
    }
}

/// Generate a filename unique within a single character's upload history.
///
/// Millisecond timestamp prefix plus a random 64-bit hex suffix; the
/// extension comes from the sniffed format, not from whatever name the
/// client sent.
pub fn unique_filename(kind: ImageKind) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u64 = rand::rng().random();
    format!("{millis}-{suffix:016x}.{}", kind.extension())
}

/// Check that `filename` may become the active image for a character whose
/// images list is `images`.
pub fn validate_active_image(images: &[String], filename: &str) -> Result<(), CoreError> {
    if images.iter().any(|f| f == filename) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{filename}' is not one of the character's images"
        )))
    }
}

/// Resolve the active image after `removed` has been taken out of the list.
///
/// `remaining` is the images list with `removed` already gone (order
/// preserved). If the removed file was the active one, the last remaining
/// entry takes over; with nothing left the active image becomes absent.
/// Removing a non-active image leaves the current active image untouched.
pub fn next_active_image(
    remaining: &[String],
    removed: &str,
    current_active: Option<&str>,
) -> Option<String> {
    match current_active {
        Some(active) if active == removed => remaining.last().cloned(),
        other => other.map(str::to_string),
    }
}
