use std::str::FromStr;

use crate::{
    assets::payload::ImagePayload,
    foundation::error::{StudioError, StudioResult},
};

/// Which editor screen a session belongs to. Each family has its own templates and seed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Static before/after review artwork.
    Review,
    /// Facebook Live commerce frames.
    Live,
}

/// Editable text fields of the content model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Headline,
    Title,
    Subtitle,
    Promotion,
    Price,
    Phone,
    LineId,
    RegistrationNo,
}

impl TextField {
    pub const ALL: [Self; 8] = [
        Self::Headline,
        Self::Title,
        Self::Subtitle,
        Self::Promotion,
        Self::Price,
        Self::Phone,
        Self::LineId,
        Self::RegistrationNo,
    ];

    /// Field name as used by form inputs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Promotion => "promotion",
            Self::Price => "price",
            Self::Phone => "phone",
            Self::LineId => "lineId",
            Self::RegistrationNo => "registrationNo",
        }
    }
}

impl FromStr for TextField {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| StudioError::validation(format!("unknown text field '{s}'")))
    }
}

/// Image slots of the content model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSlot {
    MainImage,
    Inset1,
    Inset2,
}

impl ImageSlot {
    pub const ALL: [Self; 3] = [Self::MainImage, Self::Inset1, Self::Inset2];

    pub fn name(self) -> &'static str {
        match self {
            Self::MainImage => "mainImage",
            Self::Inset1 => "inset1",
            Self::Inset2 => "inset2",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::MainImage => 0,
            Self::Inset1 => 1,
            Self::Inset2 => 2,
        }
    }
}

impl FromStr for ImageSlot {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| StudioError::validation(format!("unknown image slot '{s}'")))
    }
}

/// Everything the user can edit about one marketing artifact.
///
/// Every field is always present; empty image slots mean "show the placeholder".
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModel {
    pub headline: String,
    pub title: String,
    pub subtitle: String,
    pub promotion: String,
    /// Only shown by live-commerce templates.
    pub price: String,
    pub main_image: Option<ImagePayload>,
    pub inset1: Option<ImagePayload>,
    pub inset2: Option<ImagePayload>,
    pub phone: String,
    pub line_id: String,
    pub registration_no: String,
}

impl ContentModel {
    /// Example content shown when a session starts, so the preview is never empty.
    pub fn seed(family: Family) -> Self {
        let (headline, title, subtitle, promotion, price) = match family {
            Family::Review => (
                "หลังทำเหมือนได้หน้าใหม่",
                "หน้าเด็กลง",
                "จนคนรอบตัวทัก",
                "ช่วยเติมเต็มหน้าผากแบน ยุบบุ๋ม \nช่วยปรับหน้าผากที่ไม่เท่ากัน \nช่วยเติมเต็มร่องลึกและรอยย่น",
                "",
            ),
            Family::Live => (
                "นาทีทอง!",
                "Filler 1 แถม 1",
                "เฉพาะในไลฟ์เท่านั้น",
                "ฟิลเลอร์แท้ ตรวจสอบได้\nแพทย์ฉีดเองทุกเคส\nจำนวนจำกัด 20 ท่านแรก",
                "เพียง 9,900.-",
            ),
        };

        Self {
            headline: headline.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            promotion: promotion.to_string(),
            price: price.to_string(),
            main_image: None,
            inset1: None,
            inset2: None,
            phone: "062-462-3635".to_string(),
            line_id: "@artehouseclinic".to_string(),
            registration_no: "ขสพ.สบ.4/2568".to_string(),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Headline => &self.headline,
            TextField::Title => &self.title,
            TextField::Subtitle => &self.subtitle,
            TextField::Promotion => &self.promotion,
            TextField::Price => &self.price,
            TextField::Phone => &self.phone,
            TextField::LineId => &self.line_id,
            TextField::RegistrationNo => &self.registration_no,
        }
    }

    /// Replace exactly one text field.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Headline => &mut self.headline,
            TextField::Title => &mut self.title,
            TextField::Subtitle => &mut self.subtitle,
            TextField::Promotion => &mut self.promotion,
            TextField::Price => &mut self.price,
            TextField::Phone => &mut self.phone,
            TextField::LineId => &mut self.line_id,
            TextField::RegistrationNo => &mut self.registration_no,
        };
        *slot = value.into();
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImagePayload> {
        match slot {
            ImageSlot::MainImage => self.main_image.as_ref(),
            ImageSlot::Inset1 => self.inset1.as_ref(),
            ImageSlot::Inset2 => self.inset2.as_ref(),
        }
    }

    pub fn set_image(&mut self, slot: ImageSlot, payload: ImagePayload) {
        let target = match slot {
            ImageSlot::MainImage => &mut self.main_image,
            ImageSlot::Inset1 => &mut self.inset1,
            ImageSlot::Inset2 => &mut self.inset2,
        };
        *target = Some(payload);
    }

    /// `promotion` split into its display lines.
    pub fn promotion_lines(&self) -> Vec<&str> {
        split_promotion(&self.promotion)
    }
}

/// Split multi-line promotion copy on `'\n'`, keeping empty segments and order.
///
/// `""` yields one empty segment. Templates skip empty segments when laying out lines, so an
/// empty promotion renders no lines at all. A trailing `'\r'` from pasted Windows text is dropped.
pub fn split_promotion(promotion: &str) -> Vec<&str> {
    promotion
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
