use super::*;

#[test]
fn set_text_touches_only_the_named_field() {
    for field in TextField::ALL {
        let before = ContentModel::seed(Family::Review);
        let mut after = before.clone();
        after.set_text(field, "changed");

        assert_eq!(after.text(field), "changed");
        for other in TextField::ALL.into_iter().filter(|f| *f != field) {
            assert_eq!(after.text(other), before.text(other), "{other:?} changed");
        }
        assert_eq!(after.main_image, before.main_image);
        assert_eq!(after.inset1, before.inset1);
        assert_eq!(after.inset2, before.inset2);
    }
}

#[test]
fn seeds_are_populated() {
    let review = ContentModel::seed(Family::Review);
    assert_eq!(review.title, "หน้าเด็กลง");
    assert_eq!(review.promotion_lines().len(), 3);
    assert!(review.price.is_empty());
    assert!(review.main_image.is_none());

    let live = ContentModel::seed(Family::Live);
    assert!(!live.price.is_empty());
    assert_eq!(live.phone, "062-462-3635");
    assert_eq!(live.line_id, "@artehouseclinic");
}

#[test]
fn split_promotion_boundaries() {
    assert_eq!(split_promotion("a\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(split_promotion(""), vec![""]);
    assert_eq!(split_promotion("a\r\nb"), vec!["a", "b"]);
    assert_eq!(split_promotion("a\n\nb\n"), vec!["a", "", "b", ""]);
}

#[test]
fn field_names_parse() {
    assert_eq!("lineId".parse::<TextField>().unwrap(), TextField::LineId);
    assert_eq!(
        "registrationNo".parse::<TextField>().unwrap(),
        TextField::RegistrationNo
    );
    assert!("mainImage".parse::<TextField>().is_err());
    assert_eq!("inset2".parse::<ImageSlot>().unwrap(), ImageSlot::Inset2);
    assert!("inset3".parse::<ImageSlot>().is_err());
}

#[test]
fn set_image_replaces_only_that_slot() {
    let mut content = ContentModel::seed(Family::Live);
    let payload = ImagePayload::from_data_url("data:image/png;base64,AAAA").unwrap();
    content.set_image(ImageSlot::Inset1, payload.clone());
    assert_eq!(content.image(ImageSlot::Inset1), Some(&payload));
    assert!(content.image(ImageSlot::MainImage).is_none());
    assert!(content.image(ImageSlot::Inset2).is_none());
}

#[test]
fn serde_uses_form_field_names() {
    let json = serde_json::to_value(ContentModel::seed(Family::Review)).unwrap();
    assert!(json.get("lineId").is_some());
    assert!(json.get("registrationNo").is_some());
    assert!(json["mainImage"].is_null());
}
