use std::io::Cursor;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use crate::{
    foundation::error::{StudioError, StudioResult},
    render::{FrameRGBA, RenderBackend},
    scene::model::Scene,
    template::registry::TemplateId,
};

/// Pixel density of exported artwork relative to the logical canvas.
pub const EXPORT_SCALE: f32 = 3.0;

/// Encode a rendered frame as PNG with straight alpha.
pub fn encode_png(frame: FrameRGBA) -> StudioResult<Vec<u8>> {
    let frame = frame.into_straight_alpha();
    let (width, height) = (frame.width, frame.height);
    let img = image::RgbaImage::from_raw(width, height, frame.data)
        .ok_or_else(|| StudioError::render("frame byte length does not match its size"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Prepare, rasterize and encode `scene` in one step.
pub fn render_png(backend: &mut dyn RenderBackend, scene: &Scene) -> StudioResult<Vec<u8>> {
    let frame = crate::render::render_scene(backend, scene)?;
    encode_png(frame)
}

/// Download name for an export.
///
/// Review artwork carries the template so variants of one post sort together; live frames share
/// one name stem.
pub fn export_filename(brand: &str, template: TemplateId, timestamp_ms: u64) -> String {
    match template {
        TemplateId::Review(t) => format!(
            "{brand}-review-{}-{timestamp_ms}.png",
            t.id().to_ascii_lowercase()
        ),
        TemplateId::Live(_) => format!("{brand}-live-frame-{timestamp_ms}.png"),
    }
}

/// Millisecond clock that never repeats or goes backwards.
#[derive(Clone, Debug, Default)]
pub struct ExportClock {
    last_ms: Option<u64>,
}

impl ExportClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next timestamp, read from the system clock.
    pub fn tick(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.tick_at(now)
    }

    /// Next timestamp given the current wall time `now_ms`.
    pub fn tick_at(&mut self, now_ms: u64) -> u64 {
        let next = match self.last_ms {
            Some(last) => now_ms.max(last + 1),
            None => now_ms,
        };
        self.last_ms = Some(next);
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
