use crate::{
    assets::payload::ImagePayload,
    content::model::ImageSlot,
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{StudioError, StudioResult},
};

/// The visual tree a template produces: absolute-positioned nodes painted in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    /// CSS-style font family list applied to every text node.
    pub font_family: String,
    pub background: Rgba8,
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Shape(ShapeNode),
    Image(ImageNode),
    Text(TextNode),
}

/// Filled rounded rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeNode {
    pub frame: Rect,
    pub corner_radius: f64,
    pub fill: Rgba8,
    pub rotation_deg: f64,
}

/// Image cover-fitted into `frame`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageNode {
    pub slot: ImageSlot,
    pub source: ImageSource,
    pub frame: Rect,
    pub corner_radius: f64,
    pub border: Option<Border>,
    pub rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// User-uploaded image.
    Embedded(ImagePayload),
    /// Fixed stock image for a slot the user left empty.
    Placeholder { url: String },
}

impl ImageSource {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Single line of text anchored at its baseline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    pub role: TextRole,
    pub text: String,
    /// Baseline anchor; horizontal meaning depends on `style.align`.
    pub origin: Point,
    pub style: TextStyle,
}

/// What a text node displays, so callers can find content without knowing layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Headline,
    Title,
    Subtitle,
    PromotionLine(usize),
    Price,
    LiveBadge,
    NoFeed,
    Registration,
    Phone,
    LineId,
    /// Fixed decorative copy that is part of the template itself.
    Label,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub size_px: f32,
    pub weight: u16,
    pub italic: bool,
    pub color: Rgba8,
    pub align: TextAlign,
    pub shadow: Option<Shadow>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Middle,
    End,
}

/// Drop shadow below text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub dy: f32,
    pub blur: f32,
    pub opacity: f32,
}

impl Shadow {
    pub const SOFT: Self = Self {
        dy: 3.0,
        blur: 5.0,
        opacity: 0.6,
    };
    pub const HEAVY: Self = Self {
        dy: 8.0,
        blur: 12.0,
        opacity: 0.9,
    };
}

impl Scene {
    pub fn image_nodes(&self) -> impl Iterator<Item = &ImageNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Image(img) => Some(img),
            _ => None,
        })
    }

    pub fn text_nodes(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    /// First text node with `role`, if the template shows it.
    pub fn text_for(&self, role: TextRole) -> Option<&str> {
        self.text_nodes()
            .find(|t| t.role == role)
            .map(|t| t.text.as_str())
    }

    /// Promotion lines in display order.
    pub fn promotion_lines(&self) -> Vec<&str> {
        let mut lines: Vec<(usize, &str)> = self
            .text_nodes()
            .filter_map(|t| match t.role {
                TextRole::PromotionLine(i) => Some((i, t.text.as_str())),
                _ => None,
            })
            .collect();
        lines.sort_by_key(|(i, _)| *i);
        lines.into_iter().map(|(_, s)| s).collect()
    }

    /// Image nodes bound to `slot`.
    pub fn images_for(&self, slot: ImageSlot) -> impl Iterator<Item = &ImageNode> {
        self.image_nodes().filter(move |img| img.slot == slot)
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StudioError::validation("canvas width/height must be > 0"));
        }
        for node in &self.nodes {
            match node {
                Node::Shape(s) => validate_frame(s.frame, "shape")?,
                Node::Image(img) => {
                    validate_frame(img.frame, "image")?;
                    if let Some(border) = img.border
                        && (!border.width.is_finite() || border.width < 0.0)
                    {
                        return Err(StudioError::validation(
                            "image border width must be finite and >= 0",
                        ));
                    }
                }
                Node::Text(t) => {
                    if !t.style.size_px.is_finite() || t.style.size_px <= 0.0 {
                        return Err(StudioError::validation(format!(
                            "text node {:?} has invalid size_px",
                            t.role
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> StudioResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StudioError::serde(e.to_string()))
    }
}

fn validate_frame(frame: Rect, what: &str) -> StudioResult<()> {
    let ok = [frame.x0, frame.y0, frame.x1, frame.y1]
        .iter()
        .all(|v| v.is_finite())
        && frame.width() > 0.0
        && frame.height() > 0.0;
    if !ok {
        return Err(StudioError::validation(format!(
            "{what} frame must be finite with positive size"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
