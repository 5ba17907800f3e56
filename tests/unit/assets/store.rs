use std::io::Cursor;

use super::*;
use crate::{
    assets::payload::ImagePayload,
    content::model::{ContentModel, Family, ImageSlot},
    content::fonts::FontOption,
    template::registry::TemplateId,
};

fn png_payload(w: u32, h: u32) -> ImagePayload {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    ImagePayload::from_image_bytes(&buf).unwrap()
}

#[test]
fn asset_ids_separate_kinds_and_contents() {
    let a = ImageSource::Placeholder {
        url: "x".to_string(),
    };
    let b = ImageSource::Placeholder {
        url: "y".to_string(),
    };
    assert_eq!(AssetId::of(&a), AssetId::of(&a.clone()));
    assert_ne!(AssetId::of(&a), AssetId::of(&b));
}

#[test]
fn prepare_covers_every_image_node() {
    let mut content = ContentModel::seed(Family::Review);
    content.set_image(ImageSlot::Inset1, png_payload(4, 3));
    let scene = TemplateId::default_for(Family::Review).render(&content, FontOption::default());

    let store = PreparedAssetStore::prepare(&scene).unwrap();
    assert_eq!(store.len(), 3);
    for node in scene.image_nodes() {
        store.image_for(&node.source).unwrap();
    }
    let inset = scene.images_for(ImageSlot::Inset1).next().unwrap();
    let prepared = store.image_for(&inset.source).unwrap();
    assert_eq!((prepared.width, prepared.height), (4, 3));
}

#[test]
fn shared_payloads_are_decoded_once() {
    let mut content = ContentModel::seed(Family::Review);
    let payload = png_payload(2, 2);
    content.set_image(ImageSlot::Inset1, payload.clone());
    content.set_image(ImageSlot::Inset2, payload);
    let scene = TemplateId::default_for(Family::Review).render(&content, FontOption::default());
    assert_eq!(PreparedAssetStore::prepare(&scene).unwrap().len(), 2);
}

#[test]
fn undecodable_payload_fails_preparation() {
    let mut content = ContentModel::seed(Family::Live);
    let bogus = ImagePayload::from_data_url("data:image/png;base64,AAAA").unwrap();
    content.set_image(ImageSlot::MainImage, bogus);
    let scene = TemplateId::default_for(Family::Live).render(&content, FontOption::default());
    let err = PreparedAssetStore::prepare(&scene).unwrap_err();
    assert!(matches!(err, StudioError::Decode(_)));
}

#[test]
fn missing_asset_is_render_error() {
    let store = PreparedAssetStore::default();
    assert!(store.is_empty());
    let err = store
        .image_for(&ImageSource::Placeholder {
            url: "nope".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, StudioError::Render(_)));
}
