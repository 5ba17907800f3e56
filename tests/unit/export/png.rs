use super::*;
use crate::template::registry::{LiveTemplate, ReviewTemplate};

#[test]
fn review_names_carry_lowercased_template() {
    assert_eq!(
        export_filename("arte", TemplateId::Review(ReviewTemplate::FocusList), 1700),
        "arte-review-style_3-1700.png"
    );
    assert_eq!(
        export_filename("arte", TemplateId::Review(ReviewTemplate::LiveCaption), 5),
        "arte-review-live-5.png"
    );
}

#[test]
fn live_names_share_one_stem() {
    for t in LiveTemplate::ALL {
        assert_eq!(
            export_filename("arte", TemplateId::Live(t), 42),
            "arte-live-frame-42.png"
        );
    }
}

#[test]
fn clock_is_strictly_increasing() {
    let mut clock = ExportClock::new();
    assert_eq!(clock.tick_at(100), 100);
    assert_eq!(clock.tick_at(100), 101);
    assert_eq!(clock.tick_at(50), 102);
    assert_eq!(clock.tick_at(500), 500);

    let a = clock.tick();
    let b = clock.tick();
    assert!(b > a);
}

#[test]
fn png_is_straight_alpha() {
    // Premultiplied 50% red.
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    };
    let png = encode_png(frame).unwrap();
    assert_eq!(image::guess_format(&png).unwrap(), image::ImageFormat::Png);
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 128]);
}

#[test]
fn mismatched_frame_is_render_error() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(matches!(encode_png(frame), Err(StudioError::Render(_))));
}
