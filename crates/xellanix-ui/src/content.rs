use crate::color::Color;

/// Content that can be displayed in a node
///
/// Content nodes are leaf nodes. The renderer decides how glyphs, icons and
/// images are rasterized; the tree only carries what to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Text content with styling
    Text(TextContent),
    /// Stroked line icon from the built-in set
    Icon(IconContent),
    /// Image loaded by the host from `src`
    Image(ImageContent),
}

/// Text content configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Text color
    pub color: Color,
    pub weight: FontWeight,
    /// Horizontal alignment within the node
    pub h_align: HorizontalAlign,
    /// Vertical alignment within the node
    pub v_align: VerticalAlign,
}

impl TextContent {
    /// Create new text content with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 16.0,
            color: Color::new(1.0, 1.0, 1.0, 1.0),
            weight: FontWeight::Regular,
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Center,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_h_align(mut self, align: HorizontalAlign) -> Self {
        self.h_align = align;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Built-in line icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    QuestionMark,
    ExclamationMark,
    Check,
    Close,
    ArrowLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconContent {
    pub icon: Icon,
    /// Edge length of the icon's square box in pixels
    pub size: f32,
    pub stroke_width: f32,
    pub color: Color,
}

impl IconContent {
    pub fn new(icon: Icon, size: f32, color: Color) -> Self {
        Self {
            icon,
            size,
            stroke_width: 2.5,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent {
    pub src: String,
    /// Alternative text shown when the image cannot be loaded
    pub alt: String,
}
