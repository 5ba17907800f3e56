use std::path::PathBuf;

use crate::{
    assets::store::PreparedAssetStore,
    foundation::error::StudioResult,
    foundation::math::unpremultiply_rgba8_in_place,
    scene::model::Scene,
};

pub mod cpu;
pub(crate) mod text;

/// Rendered pixels, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha in place, as image encoders expect.
    pub fn into_straight_alpha(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut px);
        }
        Some(px)
    }
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Device pixels per logical canvas pixel.
    pub scale: f32,
    /// Extra directory of `.ttf`/`.otf`/`.ttc` files loaded next to system fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            fonts_dir: None,
        }
    }
}

pub trait RenderBackend {
    fn render_scene(
        &mut self,
        scene: &Scene,
        assets: &PreparedAssetStore,
    ) -> StudioResult<FrameRGBA>;
}

/// Prepare `scene`'s images and rasterize it in one go.
pub fn render_scene(backend: &mut dyn RenderBackend, scene: &Scene) -> StudioResult<FrameRGBA> {
    let assets = PreparedAssetStore::prepare(scene)?;
    backend.render_scene(scene, &assets)
}
