//! Preview decoding for the selected image.

use thiserror::Error;

/// Longest side, in pixels, of a decoded preview.
pub const MAX_PREVIEW_SIDE: u32 = 512;

/// Errors raised while decoding a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The bytes are not an image the `image` crate can decode.
    #[error("Failed to decode preview: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode image bytes into a downscaled RGBA texture source.
pub fn decode_preview(bytes: &[u8]) -> Result<egui::ColorImage, PreviewError> {
    let decoded = image::load_from_memory(bytes)?;
    let decoded = if decoded.width() > MAX_PREVIEW_SIDE || decoded.height() > MAX_PREVIEW_SIDE {
        decoded.thumbnail(MAX_PREVIEW_SIDE, MAX_PREVIEW_SIDE)
    } else {
        decoded
    };
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
