//! Upload normalization: decode, downsize, re-encode as size-capped PNG.

use crate::{
    error::{Result, ShibliError},
    models::NormalizedImage,
};
use image::DynamicImage;
use std::io::Cursor;

/// Maximum width/height of an image sent to the vision API.
pub const MAX_DIMENSION: u32 = 1024;

/// Ceiling on the PNG-encoded payload.
pub const MAX_ENCODED_BYTES: usize = 4 * 1024 * 1024;

/// Converts an arbitrary upload into a PNG no larger than `MAX_DIMENSION` on
/// either edge and `MAX_ENCODED_BYTES` on the wire.
///
/// One downsize pass only. If the PNG still exceeds the ceiling afterwards the
/// call fails with `ImageTooLarge` instead of hunting for a smaller encoding.
pub fn normalize(raw: &[u8]) -> Result<NormalizedImage> {
    normalize_with_limits(raw, MAX_DIMENSION, MAX_ENCODED_BYTES)
}

fn normalize_with_limits(raw: &[u8], max_dimension: u32, max_bytes: usize) -> Result<NormalizedImage> {
    let img = image::load_from_memory(raw).map_err(|e| {
        ShibliError::InvalidImageFormat(format!(
            "could not decode upload ({}). Please upload a valid PNG, JPEG, GIF, or WEBP.",
            e
        ))
    })?;

    log::debug!("Decoded upload: {}x{}", img.width(), img.height());

    let img = downsize_if_needed(img, max_dimension);

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| ShibliError::InternalError(format!("PNG encoding failed: {}", e)))?;
    let bytes = buffer.into_inner();

    if bytes.len() > max_bytes {
        return Err(ShibliError::ImageTooLarge(format!(
            "normalized image is {} bytes, over the {} byte limit. Please resize the image.",
            bytes.len(),
            max_bytes
        )));
    }

    log::debug!(
        "Normalized to {}x{} PNG, {} bytes",
        img.width(),
        img.height(),
        bytes.len()
    );

    Ok(NormalizedImage::new(bytes, img.width(), img.height()))
}

/// Shrink-only, aspect-preserving fit into a `max` square.
fn downsize_if_needed(img: DynamicImage, max: u32) -> DynamicImage {
    if img.width() <= max && img.height() <= max {
        return img;
    }
    img.thumbnail(max, max)
}
