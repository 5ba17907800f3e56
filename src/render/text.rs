//! Text layers: runs of text nodes turned into one SVG document and rasterized with `resvg`.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::{
    foundation::core::Canvas,
    foundation::error::{StudioError, StudioResult},
    scene::model::{Shadow, TextAlign, TextNode},
};

/// Font database plus the resolver used to turn CSS family lists into faces.
pub(crate) struct TextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextRasterizer {
    pub(crate) fn new(fonts_dir: Option<&Path>) -> Self {
        Self {
            fontdb: build_fontdb(fonts_dir),
        }
    }

    pub(crate) fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `nodes` over a transparent canvas-sized layer at `scale`.
    ///
    /// Returns premultiplied RGBA8 of exactly `width * height` pixels.
    pub(crate) fn rasterize(
        &self,
        canvas: Canvas,
        font_family: &str,
        nodes: &[&TextNode],
        width: u32,
        height: u32,
    ) -> StudioResult<Vec<u8>> {
        let svg = text_layer_svg(canvas, font_family, nodes);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse text layer svg")?;
        rasterize_svg_to_premul_rgba8(&tree, width, height)
    }
}

/// SVG document for a run of text nodes in canvas coordinates.
pub(crate) fn text_layer_svg(canvas: Canvas, font_family: &str, nodes: &[&TextNode]) -> String {
    let mut shadows: Vec<Shadow> = Vec::new();
    for node in nodes {
        if let Some(s) = node.style.shadow
            && !shadows.contains(&s)
        {
            shadows.push(s);
        }
    }

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );

    if !shadows.is_empty() {
        out.push_str("<defs>");
        for (idx, s) in shadows.iter().enumerate() {
            let _ = write!(
                out,
                r#"<filter id="shadow{idx}" x="-20%" y="-50%" width="140%" height="200%"><feDropShadow dx="0" dy="{dy}" stdDeviation="{sd}" flood-color="black" flood-opacity="{op}"/></filter>"#,
                dy = s.dy,
                sd = s.blur / 2.0,
                op = s.opacity,
            );
        }
        out.push_str("</defs>");
    }

    let family = escape_xml(font_family);
    for node in nodes {
        if node.text.is_empty() {
            continue;
        }
        let style = &node.style;
        let anchor = match style.align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
            TextAlign::End => "end",
        };
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" font-style="{fs}" fill="{fill}" fill-opacity="{op}" text-anchor="{anchor}""#,
            x = node.origin.x,
            y = node.origin.y,
            size = style.size_px,
            weight = style.weight,
            fs = if style.italic { "italic" } else { "normal" },
            fill = style.color.css_rgb(),
            op = style.color.opacity(),
        );
        if let Some(s) = style.shadow
            && let Some(idx) = shadows.iter().position(|x| *x == s)
        {
            let _ = write!(out, r#" filter="url(#shadow{idx})""#);
        }
        let _ = write!(
            out,
            r#" xml:space="preserve">{}</text>"#,
            escape_xml(&node.text)
        );
    }

    out.push_str("</svg>");
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            // Not allowed anywhere in an XML 1.0 document.
            '\0'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            c => out.push(c),
        }
    }
    out
}

fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> StudioResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StudioError::render("failed to allocate text layer pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

fn build_fontdb(fonts_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = fonts_dir {
        load_fonts_from_dir(&mut db, dir);
    }
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "fonts directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }

            // Thai copy has to land on a face with Thai coverage before any generic fallback.
            families.push(usvg::fontdb::Family::Name("Noto Sans Thai"));
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
