use crate::{
    content::model::ImageSlot,
    foundation::core::{Canvas, Point, Rect, Rgba8},
    scene::model::{
        Border, ImageNode, ImageSource, Node, Scene, Shadow, ShapeNode, TextAlign, TextNode,
        TextRole, TextStyle,
    },
};

pub struct SceneBuilder {
    canvas: Canvas,
    font_family: String,
    background: Rgba8,
    nodes: Vec<Node>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas, font_family: impl Into<String>) -> Self {
        Self {
            canvas,
            font_family: font_family.into(),
            background: Rgba8::WHITE,
            nodes: Vec::new(),
        }
    }

    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    pub fn rect(self, frame: Rect, corner_radius: f64, fill: Rgba8) -> Self {
        self.rotated_rect(frame, corner_radius, fill, 0.0)
    }

    pub fn rotated_rect(
        mut self,
        frame: Rect,
        corner_radius: f64,
        fill: Rgba8,
        rotation_deg: f64,
    ) -> Self {
        self.nodes.push(Node::Shape(ShapeNode {
            frame,
            corner_radius,
            fill,
            rotation_deg,
        }));
        self
    }

    pub fn image(mut self, image: ImageBuilder) -> Self {
        self.nodes.push(Node::Image(image.node));
        self
    }

    pub fn text(
        mut self,
        role: TextRole,
        text: impl Into<String>,
        origin: Point,
        style: TextStyle,
    ) -> Self {
        self.nodes.push(Node::Text(TextNode {
            role,
            text: text.into(),
            origin,
            style,
        }));
        self
    }

    /// Emit one text node per non-empty line, stepping `line_height` down from `origin`.
    ///
    /// `decorate` is called with the baseline of each emitted line so templates can add bullets
    /// or rules next to it.
    pub fn lines<'a>(
        mut self,
        lines: impl IntoIterator<Item = &'a str>,
        origin: Point,
        line_height: f64,
        style: TextStyle,
        mut decorate: impl FnMut(Self, Point) -> Self,
    ) -> Self {
        let mut y = origin.y;
        for (idx, line) in lines.into_iter().filter(|l| !l.is_empty()).enumerate() {
            let baseline = Point::new(origin.x, y);
            self = decorate(self, baseline);
            self = self.text(TextRole::PromotionLine(idx), line, baseline, style);
            y += line_height;
        }
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            canvas: self.canvas,
            font_family: self.font_family,
            background: self.background,
            nodes: self.nodes,
        }
    }
}

pub struct ImageBuilder {
    node: ImageNode,
}

impl ImageBuilder {
    pub fn new(slot: ImageSlot, source: ImageSource, frame: Rect) -> Self {
        Self {
            node: ImageNode {
                slot,
                source,
                frame,
                corner_radius: 0.0,
                border: None,
                rotation_deg: 0.0,
            },
        }
    }

    pub fn radius(mut self, r: f64) -> Self {
        self.node.corner_radius = r;
        self
    }

    pub fn border(mut self, width: f64, color: Rgba8) -> Self {
        self.node.border = Some(Border { width, color });
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.node.rotation_deg = deg;
        self
    }
}

impl TextStyle {
    /// Regular-weight white text of `size_px`.
    pub fn sized(size_px: f32) -> Self {
        Self {
            size_px,
            weight: 400,
            italic: false,
            color: Rgba8::WHITE,
            align: TextAlign::Start,
            shadow: None,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(700)
    }

    pub fn black(self) -> Self {
        self.weight(900)
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
