//! Pieces shared by every template: brand palette, slot sources, compliance tag, contact bars.

use crate::{
    assets::placeholder::placeholder_url,
    content::model::{ContentModel, ImageSlot},
    foundation::core::{Point, Rect, Rgba8},
    scene::dsl::SceneBuilder,
    scene::model::{ImageSource, Shadow, TextAlign, TextRole, TextStyle},
};

pub(crate) const BRAND_ORANGE: Rgba8 = Rgba8::hex(0xf05a28);
pub(crate) const LINE_GREEN: Rgba8 = Rgba8::hex(0x06c755);
pub(crate) const LIVE_RED: Rgba8 = Rgba8::hex(0xdc2626);
pub(crate) const INK: Rgba8 = Rgba8::hex(0x262626);
pub(crate) const PRICE_YELLOW: Rgba8 = Rgba8::hex(0xfde047);

/// Uploaded image for `slot`, or the placeholder tagged `tag`.
pub(crate) fn slot_source(content: &ContentModel, slot: ImageSlot, tag: &str) -> ImageSource {
    match content.image(slot) {
        Some(payload) => ImageSource::Embedded(payload.clone()),
        None => ImageSource::Placeholder {
            url: placeholder_url(tag),
        },
    }
}

pub(crate) fn registration_tag(
    b: SceneBuilder,
    content: &ContentModel,
    origin: Point,
    align: TextAlign,
) -> SceneBuilder {
    b.text(
        TextRole::Registration,
        &content.registration_no,
        origin,
        TextStyle::sized(10.0)
            .bold()
            .align(align)
            .color(Rgba8::WHITE.with_alpha(204))
            .shadow(Shadow::SOFT),
    )
}

/// Floating white pill at the bottom of review artwork with booking phone and LINE id.
pub(crate) fn review_footer(b: SceneBuilder, content: &ContentModel) -> SceneBuilder {
    let pill = Rect::new(110.0, 548.0, 490.0, 584.0);
    let baseline = 570.5;

    b.rect(pill, 18.0, Rgba8::WHITE.with_alpha(242))
        .text(
            TextRole::Label,
            "จองคิวได้ที่",
            Point::new(134.0, baseline),
            TextStyle::sized(10.0).bold().color(BRAND_ORANGE),
        )
        .text(
            TextRole::Phone,
            format!("📞 {}", content.phone),
            Point::new(200.0, baseline),
            TextStyle::sized(12.0).black().color(INK),
        )
        .rect(
            Rect::new(318.0, 558.0, 319.0, 574.0),
            0.0,
            Rgba8::hex(0xe5e5e5),
        )
        .rect(Rect::new(332.0, 558.0, 348.0, 574.0), 8.0, LINE_GREEN)
        .text(
            TextRole::Label,
            "LINE",
            Point::new(340.0, 568.5),
            TextStyle::sized(5.5).black().align(TextAlign::Middle),
        )
        .text(
            TextRole::LineId,
            &content.line_id,
            Point::new(354.0, baseline),
            TextStyle::sized(12.0).black().color(INK),
        )
}

/// Contact line in the top-right corner of live frames.
pub(crate) fn live_contact(b: SceneBuilder, content: &ContentModel) -> SceneBuilder {
    let style = TextStyle::sized(14.0)
        .bold()
        .align(TextAlign::End)
        .shadow(Shadow::SOFT);
    b.text(
        TextRole::Phone,
        format!("📞 {}", content.phone),
        Point::new(936.0, 62.0),
        style,
    )
    .text(
        TextRole::LineId,
        format!("LINE {}", content.line_id),
        Point::new(936.0, 82.0),
        style,
    )
}

/// Red pill with a white dot and "LIVE", top-left.
pub(crate) fn live_badge(b: SceneBuilder, at: Point, scale: f64) -> SceneBuilder {
    let w = 100.0 * scale;
    let h = 38.0 * scale;
    let dot = 12.0 * scale;
    b.rect(Rect::new(at.x, at.y, at.x + w, at.y + h), 12.0 * scale, LIVE_RED)
        .rect(
            Rect::new(
                at.x + 18.0 * scale,
                at.y + (h - dot) / 2.0,
                at.x + 18.0 * scale + dot,
                at.y + (h + dot) / 2.0,
            ),
            dot / 2.0,
            Rgba8::WHITE,
        )
        .text(
            TextRole::LiveBadge,
            "LIVE",
            Point::new(at.x + 40.0 * scale, at.y + h / 2.0 + 6.0 * scale),
            TextStyle::sized((17.0 * scale) as f32).black(),
        )
}
