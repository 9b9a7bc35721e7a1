use crate::color::Color;

/// A position in window coordinates (pixels, origin top-left)
pub type Point = glam::Vec2;

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// Convert a window position into coordinates relative to the top-left corner
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.min[0], point.y - self.min[1])
    }
}

/// Corner treatment of a rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerShape {
    None,
    /// Circular corners with the given radius
    Round(f32),
}

impl Default for CornerShape {
    fn default() -> Self {
        Self::None
    }
}

/// Rectangle with corner treatment, fill and optional stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    pub corner_shape: CornerShape,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl StyledRect {
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            corner_shape: CornerShape::None,
            fill,
            stroke: None,
        }
    }

    pub fn with_corner_shape(mut self, corner_shape: CornerShape) -> Self {
        self.corner_shape = corner_shape;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Shapes that can be rendered
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
}

impl Shape {
    /// Rounded rectangle whose geometry is resolved by the renderer
    pub fn rounded(fill: Color, radius: f32) -> Self {
        Self::Rect(
            StyledRect::new(Rect::default(), fill).with_corner_shape(CornerShape::Round(radius)),
        )
    }

    pub fn fill(&self) -> Color {
        match self {
            Shape::Rect(rect) => rect.fill,
        }
    }
}
