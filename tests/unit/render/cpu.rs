use std::io::Cursor;

use super::*;
use crate::{
    assets::payload::ImagePayload,
    content::model::ImageSlot,
    foundation::core::{Canvas, Point},
    scene::dsl::{ImageBuilder, SceneBuilder},
    scene::model::{ImageSource, TextRole, TextStyle},
};

const SMALL: Canvas = Canvas {
    width: 20,
    height: 20,
};

fn backend(scale: f32) -> CpuBackend {
    CpuBackend::new(RenderSettings {
        scale,
        fonts_dir: None,
    })
}

fn render(scene: &Scene, scale: f32) -> FrameRGBA {
    crate::render::render_scene(&mut backend(scale), scene).unwrap()
}

fn close(px: [u8; 4], want: [u8; 4]) -> bool {
    px.iter().zip(want).all(|(a, b)| a.abs_diff(b) <= 2)
}

#[test]
fn background_fills_scaled_frame() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .background(Rgba8::hex(0x336699))
        .build();
    let frame = render(&scene, 2.0);
    assert_eq!((frame.width, frame.height), (40, 40));
    assert!(frame.premultiplied);
    assert!(close(frame.pixel(0, 0).unwrap(), [0x33, 0x66, 0x99, 255]));
    assert!(close(frame.pixel(39, 39).unwrap(), [0x33, 0x66, 0x99, 255]));
}

#[test]
fn shapes_paint_in_order() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .rect(Rect::new(0.0, 0.0, 10.0, 20.0), 0.0, Rgba8::BLACK)
        .rect(Rect::new(5.0, 0.0, 15.0, 20.0), 0.0, Rgba8::hex(0xff0000))
        .build();
    let frame = render(&scene, 1.0);
    assert!(close(frame.pixel(2, 10).unwrap(), [0, 0, 0, 255]));
    assert!(close(frame.pixel(7, 10).unwrap(), [255, 0, 0, 255]));
    assert!(close(frame.pixel(18, 10).unwrap(), [255, 255, 255, 255]));
}

#[test]
fn translucent_shape_blends_over_background() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .rect(SMALL.bounds(), 0.0, Rgba8::BLACK.with_alpha(128))
        .build();
    let px = render(&scene, 1.0).pixel(10, 10).unwrap();
    assert_eq!(px[3], 255);
    assert!((120..=135).contains(&px[0]), "{px:?}");
}

#[test]
fn images_are_cover_fitted_into_their_frame() {
    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([0, 200, 0, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let payload = ImagePayload::from_image_bytes(&buf).unwrap();

    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .image(ImageBuilder::new(
            ImageSlot::MainImage,
            ImageSource::Embedded(payload),
            Rect::new(4.0, 4.0, 16.0, 16.0),
        ))
        .build();
    let frame = render(&scene, 1.0);
    assert!(close(frame.pixel(10, 10).unwrap(), [0, 200, 0, 255]));
    assert!(close(frame.pixel(1, 1).unwrap(), [255, 255, 255, 255]));
}

#[test]
fn image_border_surrounds_the_frame() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .image(
            ImageBuilder::new(
                ImageSlot::Inset1,
                ImageSource::Placeholder {
                    url: "border".to_string(),
                },
                Rect::new(6.0, 6.0, 14.0, 14.0),
            )
            .border(3.0, Rgba8::hex(0x0000ff)),
        )
        .build();
    let frame = render(&scene, 1.0);
    assert!(close(frame.pixel(4, 10).unwrap(), [0, 0, 255, 255]));
}

#[test]
fn rounded_mask_clears_corners_only() {
    let mut data = vec![255u8; 10 * 10 * 4];
    apply_rounded_mask(&mut data, 10, 10, 4.0);
    assert_eq!(&data[0..4], &[0, 0, 0, 0]);
    let center = (5 * 10 + 5) * 4;
    assert_eq!(&data[center..center + 4], &[255, 255, 255, 255]);
}

#[test]
fn cover_fit_crops_to_target_aspect() {
    let mut rgba = Vec::new();
    // Left half red, right half blue; a square crop keeps the middle two columns.
    for _y in 0..2 {
        for x in 0..4 {
            rgba.extend_from_slice(if x < 2 {
                &[255, 0, 0, 255]
            } else {
                &[0, 0, 255, 255]
            });
        }
    }
    let img = PreparedImage {
        width: 4,
        height: 2,
        rgba8_premul: Arc::new(rgba),
    };
    let out = cover_fit(&img, 2, 2, 0.0).unwrap();
    assert_eq!(out.len(), 16);
    assert_eq!(&out[0..4], &[255, 0, 0, 255]);
    assert_eq!(&out[4..8], &[0, 0, 255, 255]);
}

#[test]
fn invalid_scene_is_rejected_before_drawing() {
    let scene = SceneBuilder::new(
        Canvas {
            width: 0,
            height: 10,
        },
        "sans-serif",
    )
    .build();
    let err = crate::render::render_scene(&mut backend(1.0), &scene).unwrap_err();
    assert!(matches!(err, StudioError::Validation(_)));
}

#[test]
fn empty_text_runs_leave_pixels_untouched() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .background(Rgba8::BLACK)
        .text(
            TextRole::Title,
            "",
            Point::new(2.0, 10.0),
            TextStyle::sized(12.0),
        )
        .build();
    let frame = render(&scene, 1.0);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn rendering_is_deterministic() {
    let scene = SceneBuilder::new(SMALL, "sans-serif")
        .rotated_rect(Rect::new(3.0, 3.0, 17.0, 9.0), 2.0, Rgba8::hex(0xf05a28), 8.0)
        .image(ImageBuilder::new(
            ImageSlot::Inset2,
            ImageSource::Placeholder {
                url: "det".to_string(),
            },
            Rect::new(4.0, 10.0, 16.0, 18.0),
        ).radius(3.0).rotate(-4.0))
        .build();
    let mut b = backend(1.5);
    let a = crate::render::render_scene(&mut b, &scene).unwrap();
    let again = crate::render::render_scene(&mut b, &scene).unwrap();
    assert_eq!(a.data, again.data);
}

#[test]
fn replaced_images_leave_the_raster_cache() {
    let scene_with = |rgb: [u8; 3]| {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        SceneBuilder::new(SMALL, "sans-serif")
            .image(ImageBuilder::new(
                ImageSlot::MainImage,
                ImageSource::Embedded(ImagePayload::from_image_bytes(&buf).unwrap()),
                SMALL.bounds(),
            ))
            .build()
    };

    let mut cpu = backend(1.0);
    let first = scene_with([200, 0, 0]);
    crate::render::render_scene(&mut cpu, &first).unwrap();
    crate::render::render_scene(&mut cpu, &first).unwrap();
    assert_eq!(cpu.image_cache.len(), 1);

    let second = scene_with([0, 0, 200]);
    let frame = crate::render::render_scene(&mut cpu, &second).unwrap();
    assert_eq!(cpu.image_cache.len(), 1);
    assert!(close(frame.pixel(10, 10).unwrap(), [0, 0, 200, 255]));
}
