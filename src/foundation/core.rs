use crate::foundation::error::{StudioError, StudioResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Logical canvas size in CSS-like pixels (before export scaling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Canvas {
    /// Square 600x600 canvas used by review artwork.
    pub const REVIEW: Self = Self {
        width: 600,
        height: 600,
    };

    /// 16:9 canvas used by live-commerce frames.
    pub const LIVE: Self = Self {
        width: 960,
        height: 540,
    };

    /// Full canvas rectangle in logical coordinates.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Device pixel size for `scale`, bounded by what the CPU rasterizer can address.
    pub fn scaled_px(self, scale: f32) -> StudioResult<(u16, u16)> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StudioError::validation("export scale must be finite and > 0"));
        }
        let w = (self.width as f32 * scale).round();
        let h = (self.height as f32 * scale).round();
        if w < 1.0 || h < 1.0 || w > f32::from(u16::MAX) || h > f32::from(u16::MAX) {
            return Err(StudioError::render(format!(
                "scaled canvas {w}x{h} is outside 1..={}",
                u16::MAX
            )));
        }
        Ok((w as u16, h as u16))
    }
}

/// Straight (non-premultiplied) RGBA8 color as authored by templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::hex(0xffffff);
    pub const BLACK: Self = Self::hex(0x000000);

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` form, alpha excluded.
    pub fn css_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `0..=1` opacity.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

/// Transform mapping a local box of `frame`'s device size (origin top-left) onto `frame` in
/// device space, rotated by `rotation_deg` around the frame center.
pub fn placement_affine(frame: Rect, rotation_deg: f64, scale: f64) -> Affine {
    let center = frame.center();
    let half = Vec2::new(frame.width() * scale / 2.0, frame.height() * scale / 2.0);

    // T(center) * R(rot) * T(-half): local (0,0) lands on the rotated top-left corner.
    Affine::translate(Vec2::new(center.x * scale, center.y * scale))
        * Affine::rotate(rotation_deg.to_radians())
        * Affine::translate(-half)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
