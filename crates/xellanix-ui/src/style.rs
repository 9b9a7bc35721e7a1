use crate::color::Color;

/// Visual style properties of a node
///
/// All fields are `Option<T>` so a style can be partial: hover, active and
/// disabled layers only name the properties they change and are merged over
/// the base style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Background fill color (for shapes)
    pub fill_color: Option<Color>,
    /// Stroke color (for shapes with borders)
    pub stroke_color: Option<Color>,
    /// Corner radius (for Round corner shape)
    pub corner_radius: Option<f32>,
    /// Node opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,
    /// Text color (for text content)
    pub text_color: Option<Color>,
    /// Horizontal offset from default position
    pub offset_x: Option<f32>,
    /// Vertical offset from default position
    pub offset_y: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with only fill color
    pub fn fill(color: Color) -> Self {
        Self {
            fill_color: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with only opacity
    pub fn opacity(opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..Default::default()
        }
    }

    /// Merge this style with another, preferring values from `other` when present
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fill_color: other.fill_color.or(self.fill_color),
            stroke_color: other.stroke_color.or(self.stroke_color),
            corner_radius: other.corner_radius.or(self.corner_radius),
            opacity: other.opacity.or(self.opacity),
            text_color: other.text_color.or(self.text_color),
            offset_x: other.offset_x.or(self.offset_x),
            offset_y: other.offset_y.or(self.offset_y),
        }
    }
}

/// Interaction state a renderer resolves a node's style for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Idle,
    Hovered,
    Active,
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let base = Style {
            fill_color: Some(Color::rgb(1.0, 0.0, 0.0)),
            opacity: Some(1.0),
            ..Default::default()
        };
        let hover = Style::fill(Color::rgb(0.0, 1.0, 0.0));

        let merged = base.merge(&hover);

        assert_eq!(merged.fill_color, Some(Color::rgb(0.0, 1.0, 0.0)));
        assert_eq!(merged.opacity, Some(1.0));
    }

    #[test]
    fn test_merge_keeps_base_when_other_empty() {
        let base = Style {
            offset_x: Some(12.0),
            opacity: Some(0.5),
            ..Default::default()
        };

        let merged = base.merge(&Style::new());

        assert_eq!(merged, base);
    }
}
