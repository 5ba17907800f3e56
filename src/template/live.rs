//! Live-commerce family: 960x540 overlays for Facebook Live streams.

use crate::{
    content::fonts::FontOption,
    content::model::{ContentModel, ImageSlot},
    foundation::core::{Canvas, Point, Rect, Rgba8},
    scene::dsl::{ImageBuilder, SceneBuilder},
    scene::model::{ImageSource, Scene, Shadow, TextAlign, TextRole, TextStyle},
    template::chrome::{self, BRAND_ORANGE, INK, PRICE_YELLOW},
};

fn base(content: &ContentModel, font: FontOption) -> SceneBuilder {
    let bounds = Canvas::LIVE.bounds();
    let b = SceneBuilder::new(Canvas::LIVE, font.family).background(Rgba8::hex(0x171717));
    match &content.main_image {
        Some(payload) => b.image(ImageBuilder::new(
            ImageSlot::MainImage,
            ImageSource::Embedded(payload.clone()),
            bounds,
        )),
        None => b.rect(bounds, 0.0, Rgba8::hex(0x171717)).text(
            TextRole::NoFeed,
            "NO LIVE FEED",
            Point::new(480.0, 290.0),
            TextStyle::sized(28.0)
                .bold()
                .align(TextAlign::Middle)
                .color(Rgba8::WHITE.with_alpha(90)),
        ),
    }
}

fn finish(b: SceneBuilder, content: &ContentModel) -> Scene {
    let b = chrome::live_badge(b, Point::new(24.0, 24.0), 1.0);
    let b = chrome::registration_tag(b, content, Point::new(936.0, 40.0), TextAlign::End);
    chrome::live_contact(b, content).build()
}

fn dot(b: SceneBuilder, at: Point, x: f64, size: f64, color: Rgba8) -> SceneBuilder {
    let top = at.y - 5.0 - size / 2.0;
    b.rect(Rect::new(x, top, x + size, top + size), size / 2.0, color)
}

pub(crate) fn minimal_corner(content: &ContentModel, font: FontOption) -> Scene {
    let b = base(content, font)
        .rect(
            Rect::new(24.0, 300.0, 424.0, 516.0),
            18.0,
            Rgba8::BLACK.with_alpha(170),
        )
        .text(
            TextRole::Headline,
            &content.headline,
            Point::new(44.0, 334.0),
            TextStyle::sized(18.0).bold().color(BRAND_ORANGE),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(44.0, 374.0),
            TextStyle::sized(34.0).black(),
        )
        .lines(
            content.promotion_lines(),
            Point::new(60.0, 404.0),
            22.0,
            TextStyle::sized(15.0),
            |b, at| dot(b, at, 44.0, 6.0, BRAND_ORANGE),
        )
        .text(
            TextRole::Price,
            &content.price,
            Point::new(44.0, 498.0),
            TextStyle::sized(34.0).black().color(PRICE_YELLOW),
        );
    finish(b, content)
}

pub(crate) fn bottom_banner(content: &ContentModel, font: FontOption) -> Scene {
    let b = base(content, font)
        .rect(
            Rect::new(0.0, 392.0, 960.0, 540.0),
            0.0,
            BRAND_ORANGE.with_alpha(235),
        )
        .rect(Rect::new(24.0, 356.0, 284.0, 392.0), 10.0, Rgba8::WHITE)
        .text(
            TextRole::Headline,
            &content.headline,
            Point::new(40.0, 381.0),
            TextStyle::sized(20.0).black().color(BRAND_ORANGE),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(32.0, 440.0),
            TextStyle::sized(38.0).black(),
        )
        .text(
            TextRole::Subtitle,
            &content.subtitle,
            Point::new(32.0, 470.0),
            TextStyle::sized(18.0).bold(),
        )
        .lines(
            content.promotion_lines(),
            Point::new(576.0, 428.0),
            22.0,
            TextStyle::sized(15.0).bold(),
            |b, at| dot(b, at, 560.0, 7.0, Rgba8::WHITE),
        )
        .rect(
            Rect::new(730.0, 460.0, 936.0, 524.0),
            14.0,
            Rgba8::BLACK.with_alpha(200),
        )
        .text(
            TextRole::Price,
            &content.price,
            Point::new(833.0, 503.0),
            TextStyle::sized(34.0)
                .black()
                .align(TextAlign::Middle)
                .color(PRICE_YELLOW),
        );
    finish(b, content)
}

pub(crate) fn side_bar(content: &ContentModel, font: FontOption) -> Scene {
    let b = base(content, font)
        .rect(
            Rect::new(640.0, 0.0, 960.0, 540.0),
            0.0,
            Rgba8::BLACK.with_alpha(190),
        )
        .text(
            TextRole::Headline,
            &content.headline,
            Point::new(664.0, 130.0),
            TextStyle::sized(20.0).bold().color(BRAND_ORANGE),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(664.0, 176.0),
            TextStyle::sized(36.0).black(),
        )
        .text(
            TextRole::Subtitle,
            &content.subtitle,
            Point::new(664.0, 206.0),
            TextStyle::sized(17.0)
                .bold()
                .color(Rgba8::WHITE.with_alpha(220)),
        )
        .lines(
            content.promotion_lines(),
            Point::new(680.0, 252.0),
            28.0,
            TextStyle::sized(16.0),
            |b, at| dot(b, at, 664.0, 7.0, BRAND_ORANGE),
        )
        .rect(Rect::new(664.0, 430.0, 936.0, 500.0), 14.0, BRAND_ORANGE)
        .text(
            TextRole::Price,
            &content.price,
            Point::new(800.0, 477.0),
            TextStyle::sized(34.0).black().align(TextAlign::Middle),
        );
    finish(b, content)
}

pub(crate) fn full_promo(content: &ContentModel, font: FontOption) -> Scene {
    let center = |size: f32| TextStyle::sized(size).align(TextAlign::Middle);
    let mut b = base(content, font).rect(
        Canvas::LIVE.bounds(),
        0.0,
        Rgba8::BLACK.with_alpha(140),
    );

    for (slot, tag, frame, rotation_deg) in [
        (
            ImageSlot::Inset1,
            "product1",
            Rect::new(40.0, 190.0, 190.0, 340.0),
            -4.0,
        ),
        (
            ImageSlot::Inset2,
            "product2",
            Rect::new(770.0, 190.0, 920.0, 340.0),
            4.0,
        ),
    ] {
        b = b.image(
            ImageBuilder::new(slot, chrome::slot_source(content, slot, tag), frame)
                .radius(18.0)
                .border(4.0, Rgba8::WHITE)
                .rotate(rotation_deg),
        );
    }

    let b = b
        .text(
            TextRole::Headline,
            &content.headline,
            Point::new(480.0, 120.0),
            center(26.0).black().color(BRAND_ORANGE),
        )
        .text(
            TextRole::Title,
            &content.title,
            Point::new(480.0, 188.0),
            center(60.0).black().shadow(Shadow::HEAVY),
        )
        .text(
            TextRole::Subtitle,
            &content.subtitle,
            Point::new(480.0, 224.0),
            center(22.0).bold(),
        )
        .lines(
            content.promotion_lines(),
            Point::new(480.0, 268.0),
            30.0,
            center(20.0).bold().shadow(Shadow::SOFT),
            |b, _| b,
        )
        .rect(Rect::new(330.0, 392.0, 630.0, 470.0), 20.0, PRICE_YELLOW)
        .text(
            TextRole::Price,
            &content.price,
            Point::new(480.0, 446.0),
            center(44.0).black().color(INK),
        );
    finish(b, content)
}

#[cfg(test)]
#[path = "../../tests/unit/template/live.rs"]
mod tests;
