use std::io::Cursor;

use super::*;

fn png_1x1() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn png_bytes_become_png_data_url() {
    let bytes = png_1x1();
    let payload = ImagePayload::from_image_bytes(&bytes).unwrap();
    assert_eq!(payload.mime(), "image/png");
    assert!(payload.as_data_url().starts_with("data:image/png;base64,"));
    assert_eq!(payload.decode_bytes().unwrap(), bytes);
}

#[test]
fn unknown_bytes_are_rejected() {
    assert!(ImagePayload::from_image_bytes(b"definitely not an image").is_err());
    assert!(ImagePayload::from_image_bytes(&[]).is_err());
}

#[test]
fn data_url_parsing_validates_shape() {
    let ok = ImagePayload::from_data_url("data:image/jpeg;base64,AAAA").unwrap();
    assert_eq!(ok.mime(), "image/jpeg");

    assert!(ImagePayload::from_data_url("https://example.com/a.png").is_err());
    assert!(ImagePayload::from_data_url("data:image/png,rawbytes").is_err());
    assert!(ImagePayload::from_data_url("data:;base64,AAAA").is_err());
}

#[test]
fn serializes_as_plain_string() {
    let payload = ImagePayload::from_data_url("data:image/png;base64,AAAA").unwrap();
    let json = serde_json::to_string(&payload).unwrap();
    assert_eq!(json, "\"data:image/png;base64,AAAA\"");
    let back: ImagePayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn debug_does_not_dump_body() {
    let payload = ImagePayload::from_image_bytes(&png_1x1()).unwrap();
    let dbg = format!("{payload:?}");
    assert!(dbg.contains("image/png"));
    assert!(!dbg.contains("base64"));
}
