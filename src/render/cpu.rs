use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::{
    assets::store::{AssetId, PreparedAssetStore, PreparedImage},
    foundation::core::{Affine, BezPath, Rect, Rgba8, placement_affine},
    foundation::error::{StudioError, StudioResult},
    render::text::TextRasterizer,
    render::{FrameRGBA, RenderBackend, RenderSettings},
    scene::model::{ImageNode, Node, Scene, ShapeNode, TextNode},
};

/// Software rasterizer built on `vello_cpu`, with `resvg` for text layers.
pub struct CpuBackend {
    settings: RenderSettings,
    text: TextRasterizer,
    image_cache: HashMap<ImageRasterKey, vello_cpu::Image>,
}

/// One prepared image fitted into one device-sized rounded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ImageRasterKey {
    asset: AssetId,
    width: u32,
    height: u32,
    radius_bits: u64,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        let text = TextRasterizer::new(settings.fonts_dir.as_deref());
        Self {
            settings,
            text,
            image_cache: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Number of font faces text layers can pick from.
    pub fn font_face_count(&self) -> usize {
        self.text.face_count()
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "debug", skip_all, fields(
        width = scene.canvas.width,
        height = scene.canvas.height,
        scale = self.settings.scale,
    ))]
    fn render_scene(
        &mut self,
        scene: &Scene,
        assets: &PreparedAssetStore,
    ) -> StudioResult<FrameRGBA> {
        scene.validate()?;
        // Only keep fitted images whose asset is still in the scene.
        self.image_cache.retain(|key, _| assets.contains(key.asset));
        let scale = self.settings.scale;
        let (w, h) = scene.canvas.scaled_px(scale)?;
        let scale = f64::from(scale);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(scene.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        let mut idx = 0;
        while idx < scene.nodes.len() {
            match &scene.nodes[idx] {
                Node::Shape(shape) => {
                    draw_shape(&mut ctx, shape, scale);
                    idx += 1;
                }
                Node::Image(img) => {
                    self.draw_image(&mut ctx, img, assets, scale)?;
                    idx += 1;
                }
                Node::Text(_) => {
                    let run: Vec<&TextNode> = scene.nodes[idx..]
                        .iter()
                        .map_while(|n| match n {
                            Node::Text(t) => Some(t),
                            _ => None,
                        })
                        .collect();
                    idx += run.len();
                    self.draw_text_run(&mut ctx, scene, &run, w, h)?;
                }
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl CpuBackend {
    fn draw_image(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &ImageNode,
        assets: &PreparedAssetStore,
        scale: f64,
    ) -> StudioResult<()> {
        if let Some(border) = node.border
            && border.width > 0.0
        {
            draw_shape(
                ctx,
                &ShapeNode {
                    frame: node.frame.inflate(border.width, border.width),
                    corner_radius: node.corner_radius + border.width,
                    fill: border.color,
                    rotation_deg: node.rotation_deg,
                },
                scale,
            );
        }

        let width = ((node.frame.width() * scale).round() as u32).max(1);
        let height = ((node.frame.height() * scale).round() as u32).max(1);
        let key = ImageRasterKey {
            asset: AssetId::of(&node.source),
            width,
            height,
            radius_bits: (node.corner_radius * scale).to_bits(),
        };
        let paint = match self.image_cache.get(&key) {
            Some(paint) => paint.clone(),
            None => {
                let prepared = assets.get(key.asset)?;
                let fitted = cover_fit(prepared, width, height, node.corner_radius * scale)?;
                let pixmap = image_premul_bytes_to_pixmap(&fitted, width, height)?;
                let paint = vello_cpu::Image {
                    image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                    sampler: vello_cpu::peniko::ImageSampler::default(),
                };
                self.image_cache.insert(key, paint.clone());
                paint
            }
        };

        // Stretch the rounded pixel box back onto the exact fractional frame size.
        let fit = Affine::scale_non_uniform(
            node.frame.width() * scale / f64::from(width),
            node.frame.height() * scale / f64::from(height),
        );
        ctx.set_transform(affine_to_cpu(
            placement_affine(node.frame, node.rotation_deg, scale) * fit,
        ));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        Ok(())
    }

    fn draw_text_run(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        scene: &Scene,
        run: &[&TextNode],
        w: u16,
        h: u16,
    ) -> StudioResult<()> {
        if run.iter().all(|t| t.text.is_empty()) {
            return Ok(());
        }
        let layer = self.text.rasterize(
            scene.canvas,
            &scene.font_family,
            run,
            u32::from(w),
            u32::from(h),
        )?;
        let pixmap = image_premul_bytes_to_pixmap(&layer, u32::from(w), u32::from(h))?;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        });
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));
        Ok(())
    }
}

fn draw_shape(ctx: &mut vello_cpu::RenderContext, shape: &ShapeNode, scale: f64) {
    if shape.fill.a == 0 {
        return;
    }
    let local = Rect::new(
        0.0,
        0.0,
        shape.frame.width() * scale,
        shape.frame.height() * scale,
    );
    let path = local
        .to_rounded_rect(shape.corner_radius * scale)
        .to_path(0.1);
    ctx.set_transform(affine_to_cpu(placement_affine(
        shape.frame,
        shape.rotation_deg,
        scale,
    )));
    ctx.set_paint(color_to_cpu(shape.fill));
    ctx.fill_path(&bezpath_to_cpu(&path));
}

/// Center-crop `img` to the aspect of `width x height`, resample, and clip to a rounded box.
fn cover_fit(img: &PreparedImage, width: u32, height: u32, radius: f64) -> StudioResult<Vec<u8>> {
    let src = image::RgbaImage::from_raw(img.width, img.height, img.rgba8_premul.as_ref().clone())
        .ok_or_else(|| StudioError::render("prepared image byte length mismatch"))?;

    let target_aspect = f64::from(width) / f64::from(height);
    let src_aspect = f64::from(img.width) / f64::from(img.height);
    let (cw, ch) = if src_aspect > target_aspect {
        (
            ((f64::from(img.height) * target_aspect).round() as u32).clamp(1, img.width),
            img.height,
        )
    } else {
        (
            img.width,
            ((f64::from(img.width) / target_aspect).round() as u32).clamp(1, img.height),
        )
    };
    let cropped = image::imageops::crop_imm(
        &src,
        (img.width - cw) / 2,
        (img.height - ch) / 2,
        cw,
        ch,
    )
    .to_image();
    let resized = image::imageops::resize(
        &cropped,
        width,
        height,
        image::imageops::FilterType::Triangle,
    );

    let mut data = resized.into_raw();
    apply_rounded_mask(&mut data, width, height, radius);
    Ok(data)
}

/// Scale premultiplied pixels by the coverage of a rounded rectangle filling the buffer.
fn apply_rounded_mask(rgba8_premul: &mut [u8], width: u32, height: u32, radius: f64) {
    let r = radius.min(f64::from(width.min(height)) / 2.0);
    if r <= 0.0 {
        return;
    }
    let (w, h) = (f64::from(width), f64::from(height));
    for (i, px) in rgba8_premul.chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % width) as f64 + 0.5;
        let y = (i as u32 / width) as f64 + 0.5;
        let dx = (r - x).max(x - (w - r)).max(0.0);
        let dy = (r - y).max(y - (h - r)).max(0.0);
        if dx == 0.0 || dy == 0.0 {
            continue;
        }
        let coverage = (r - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
        if coverage >= 1.0 {
            continue;
        }
        for c in px.iter_mut() {
            *c = (f64::from(*c) * coverage).round() as u8;
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> StudioResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| StudioError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| StudioError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(StudioError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
