//! Review family: 600x600 before/after artwork over a full-bleed "after" photo.

use crate::{
    content::fonts::FontOption,
    content::model::{ContentModel, ImageSlot},
    foundation::core::{Canvas, Point, Rect, Rgba8},
    scene::dsl::{ImageBuilder, SceneBuilder},
    scene::model::{Scene, Shadow, TextAlign, TextRole, TextStyle},
    template::chrome::{self, BRAND_ORANGE},
};

struct Inset {
    slot: ImageSlot,
    tag: &'static str,
    frame: Rect,
    radius: f64,
    border: Rgba8,
    rotation_deg: f64,
}

fn base(content: &ContentModel, font: FontOption) -> SceneBuilder {
    let bounds = Canvas::REVIEW.bounds();
    let b = SceneBuilder::new(Canvas::REVIEW, font.family)
        .image(ImageBuilder::new(
            ImageSlot::MainImage,
            chrome::slot_source(content, ImageSlot::MainImage, "main_ref"),
            bounds,
        ))
        .rect(bounds, 0.0, Rgba8::BLACK.with_alpha(13));
    chrome::registration_tag(b, content, Point::new(24.0, 30.0), TextAlign::Start)
}

fn insets(mut b: SceneBuilder, content: &ContentModel, insets: [Inset; 2]) -> SceneBuilder {
    for inset in insets {
        b = b.image(
            ImageBuilder::new(
                inset.slot,
                chrome::slot_source(content, inset.slot, inset.tag),
                inset.frame,
            )
            .radius(inset.radius)
            .border(5.0, inset.border)
            .rotate(inset.rotation_deg),
        );
    }
    b
}

fn finish(b: SceneBuilder, content: &ContentModel) -> Scene {
    chrome::review_footer(b, content).build()
}

pub(crate) fn elegant_reveal(content: &ContentModel, font: FontOption) -> Scene {
    let b = insets(
        base(content, font),
        content,
        [
            Inset {
                slot: ImageSlot::Inset1,
                tag: "side1",
                frame: Rect::new(32.0, 319.0, 177.0, 504.0),
                radius: 28.0,
                border: Rgba8::WHITE,
                rotation_deg: -1.0,
            },
            Inset {
                slot: ImageSlot::Inset2,
                tag: "side2",
                frame: Rect::new(193.0, 319.0, 338.0, 504.0),
                radius: 28.0,
                border: Rgba8::WHITE,
                rotation_deg: 1.0,
            },
        ],
    );

    let right = |size: f32| TextStyle::sized(size).align(TextAlign::End);
    let b = b
        .text(
            TextRole::Headline,
            format!("“{}”", content.headline),
            Point::new(568.0, 236.0),
            right(21.0).bold().italic().shadow(Shadow::SOFT),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(568.0, 300.0),
            right(80.0).black().shadow(Shadow::HEAVY),
        )
        .text(
            TextRole::Subtitle,
            format!("{}”", content.subtitle),
            Point::new(568.0, 340.0),
            right(26.0).black().italic().shadow(Shadow::SOFT),
        );
    finish(b, content)
}

pub(crate) fn hi_end_glow(content: &ContentModel, font: FontOption) -> Scene {
    let b = insets(
        base(content, font),
        content,
        [
            Inset {
                slot: ImageSlot::Inset1,
                tag: "hi1",
                frame: Rect::new(32.0, 112.0, 202.0, 302.0),
                radius: 20.0,
                border: BRAND_ORANGE,
                rotation_deg: -3.0,
            },
            Inset {
                slot: ImageSlot::Inset2,
                tag: "hi2",
                frame: Rect::new(32.0, 318.0, 202.0, 508.0),
                radius: 20.0,
                border: BRAND_ORANGE,
                rotation_deg: 3.0,
            },
        ],
    );

    let right = |size: f32| TextStyle::sized(size).align(TextAlign::End).italic();
    let b = b
        .text(
            TextRole::Headline,
            format!("“{}”", content.headline),
            Point::new(560.0, 330.0),
            right(24.0).bold().shadow(Shadow::SOFT),
        )
        .text(
            TextRole::Label,
            "หน้า HI-END",
            Point::new(560.0, 392.0),
            right(62.0)
                .black()
                .color(Rgba8::hex(0xfdba74))
                .shadow(Shadow::HEAVY),
        )
        .text(
            TextRole::Label,
            "ขึ้นอีกระดับ”",
            Point::new(560.0, 456.0),
            right(62.0).black().shadow(Shadow::HEAVY),
        );
    finish(b, content)
}

pub(crate) fn focus_list(content: &ContentModel, font: FontOption) -> Scene {
    let headline = if content.headline.is_empty() {
        "Program"
    } else {
        content.headline.as_str()
    };

    let b = base(content, font)
        .text(
            TextRole::Headline,
            headline,
            Point::new(40.0, 134.0),
            TextStyle::sized(84.0)
                .black()
                .italic()
                .shadow(Shadow::HEAVY),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(40.0, 212.0),
            TextStyle::sized(72.0).bold().italic().shadow(Shadow::HEAVY),
        )
        .lines(
            content.promotion_lines(),
            Point::new(56.0, 262.0),
            28.0,
            TextStyle::sized(18.0)
                .weight(500)
                .italic()
                .shadow(Shadow::HEAVY),
            |b, at| {
                b.rect(
                    Rect::new(40.0, at.y - 16.0, 43.0, at.y + 6.0),
                    0.0,
                    BRAND_ORANGE,
                )
            },
        );

    let b = insets(
        b,
        content,
        [
            Inset {
                slot: ImageSlot::Inset1,
                tag: "fore1",
                frame: Rect::new(40.0, 308.0, 200.0, 488.0),
                radius: 30.0,
                border: Rgba8::WHITE,
                rotation_deg: -1.0,
            },
            Inset {
                slot: ImageSlot::Inset2,
                tag: "fore2",
                frame: Rect::new(220.0, 308.0, 380.0, 488.0),
                radius: 30.0,
                border: Rgba8::WHITE,
                rotation_deg: 1.0,
            },
        ],
    );
    finish(b, content)
}

pub(crate) fn live_caption(content: &ContentModel, font: FontOption) -> Scene {
    let b = chrome::live_badge(base(content, font), Point::new(40.0, 40.0), 1.0);
    let b = insets(
        b,
        content,
        [
            Inset {
                slot: ImageSlot::Inset1,
                tag: "live1",
                frame: Rect::new(458.0, 40.0, 568.0, 168.0),
                radius: 20.0,
                border: Rgba8::WHITE,
                rotation_deg: 2.0,
            },
            Inset {
                slot: ImageSlot::Inset2,
                tag: "live2",
                frame: Rect::new(458.0, 184.0, 568.0, 312.0),
                radius: 20.0,
                border: Rgba8::WHITE,
                rotation_deg: -2.0,
            },
        ],
    );

    let b = b
        .rotated_rect(
            Rect::new(48.0, 300.0, 348.0, 340.0),
            4.0,
            BRAND_ORANGE,
            -2.0,
        )
        .text(
            TextRole::Headline,
            &content.headline,
            Point::new(64.0, 329.0),
            TextStyle::sized(24.0).black().italic(),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(48.0, 410.0),
            TextStyle::sized(82.0)
                .black()
                .italic()
                .shadow(Shadow::HEAVY),
        )
        .text(
            TextRole::Subtitle,
            &content.subtitle,
            Point::new(48.0, 448.0),
            TextStyle::sized(28.0).bold().italic().shadow(Shadow::HEAVY),
        )
        .lines(
            content.promotion_lines(),
            Point::new(48.0, 478.0),
            22.0,
            TextStyle::sized(16.0)
                .weight(500)
                .italic()
                .shadow(Shadow::SOFT),
            |b, _| b,
        );
    finish(b, content)
}

#[cfg(test)]
#[path = "../../tests/unit/template/review.rs"]
mod tests;
