use std::sync::Arc;

use crate::{assets::store::PreparedImage, foundation::math::Fnv1a64};

/// Stock photo shown in any image slot the user has not filled.
pub const PLACEHOLDER_BASE_URL: &str = "https://images.unsplash.com/photo-1596462502278-27bfad450526?auto=format&fit=crop&q=80&w=800";

const SWATCH_PX: u32 = 64;

/// Placeholder URL for one slot of one template; `tag` keeps slots distinguishable.
pub fn placeholder_url(tag: &str) -> String {
    format!("{PLACEHOLDER_BASE_URL}&id={tag}")
}

/// Offline stand-in for a placeholder URL.
///
/// The rasterizer never fetches remote images; it paints a soft, warm vertical gradient whose tint
/// is derived from the URL so different slots stay visually distinct and renders stay
/// deterministic.
pub(crate) fn synthesize_placeholder(url: &str) -> PreparedImage {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(url.as_bytes());
    let seed = h.finish();

    let tint = (seed & 0x1f) as u8;
    let top = [236u8, 214u8.saturating_sub(tint / 2), 200u8.saturating_sub(tint), 255u8];
    let bottom = [168u8, 132u8, 116u8.saturating_add(tint), 255u8];

    let mut px = Vec::with_capacity((SWATCH_PX * SWATCH_PX * 4) as usize);
    for y in 0..SWATCH_PX {
        let t = y as f32 / (SWATCH_PX - 1) as f32;
        let lerp = |a: u8, b: u8| -> u8 { (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8 };
        let row = [
            lerp(top[0], bottom[0]),
            lerp(top[1], bottom[1]),
            lerp(top[2], bottom[2]),
            255,
        ];
        for _ in 0..SWATCH_PX {
            px.extend_from_slice(&row);
        }
    }

    PreparedImage {
        width: SWATCH_PX,
        height: SWATCH_PX,
        rgba8_premul: Arc::new(px),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/placeholder.rs"]
mod tests;
