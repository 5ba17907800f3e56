use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::payload::ImagePayload,
    assets::store::PreparedImage,
    foundation::error::{StudioError, StudioResult},
    foundation::math::premultiply_rgba8_in_place,
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> StudioResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(StudioError::decode("image has zero width or height"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Decode an embedded data-URL payload.
pub fn decode_payload(payload: &ImagePayload) -> StudioResult<PreparedImage> {
    let bytes = payload.decode_bytes()?;
    decode_image(&bytes).map_err(|e| match e {
        StudioError::Other(inner) => StudioError::decode(format!("{} ({inner:#})", payload.mime())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
