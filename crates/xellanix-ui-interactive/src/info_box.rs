//! Status message box with an icon badge and a bold label

use xellanix_ui::{
    Align, Color, Content, FontWeight, Icon, IconContent, Layout, Node, Palette, Shape, Size,
    Spacing, Style, TextContent,
};

/// Kind of message shown by [`info_box`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InfoStatus {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl InfoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InfoStatus::Info => "Info:",
            InfoStatus::Warning => "Warning:",
            InfoStatus::Success => "Success:",
            InfoStatus::Error => "Error:",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            InfoStatus::Info => Icon::QuestionMark,
            InfoStatus::Warning => Icon::ExclamationMark,
            InfoStatus::Success => Icon::Check,
            InfoStatus::Error => Icon::Close,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InfoBoxStyle {
    pub palette: Palette,
    /// Alpha of the status color used as the box background
    pub background_alpha: f32,
    pub padding: Spacing,
    pub gap: f32,
    pub border_radius: f32,
    /// Diameter of the round icon badge
    pub badge_size: f32,
    pub icon_size: f32,
    pub font_size: f32,
}

impl InfoBoxStyle {
    /// Badge color for a status
    pub fn status_color(&self, status: InfoStatus) -> Color {
        match status {
            InfoStatus::Info => self.palette.info,
            InfoStatus::Warning => self.palette.warning,
            InfoStatus::Success => self.palette.success,
            InfoStatus::Error => self.palette.error,
        }
    }

    pub fn background_color(&self, status: InfoStatus) -> Color {
        self.status_color(status).with_alpha(self.background_alpha)
    }
}

impl Default for InfoBoxStyle {
    fn default() -> Self {
        Self {
            palette: Palette::mocha(),
            background_alpha: 0.15,
            padding: Spacing::all(16.0),
            gap: 8.0,
            border_radius: 8.0,
            badge_size: 24.0,
            icon_size: 14.0,
            font_size: 16.0,
        }
    }
}

/// Create an info box: icon badge, bold status label, then `content`
pub fn info_box(status: InfoStatus, content: Node, style: &InfoBoxStyle) -> Node {
    let background = style.background_color(status);
    let badge_color = style.status_color(status);

    let badge = Node::new()
        .with_size(style.badge_size, style.badge_size)
        .with_align(Align::Center)
        .with_shape(Shape::rounded(badge_color, style.badge_size / 2.0))
        .with_style(Style::fill(badge_color))
        .with_content(Content::Icon(IconContent::new(
            status.icon(),
            style.icon_size,
            style.palette.base,
        )));

    let label = Node::new().with_content(Content::Text(
        TextContent::new(status.label())
            .with_font_size(style.font_size)
            .with_color(style.palette.text)
            .with_weight(FontWeight::Bold),
    ));

    Node::new()
        .with_width(Size::Fill)
        .with_layout_direction(Layout::Horizontal)
        .with_align(Align::Center)
        .with_gap(style.gap)
        .with_padding(style.padding)
        .with_shape(Shape::rounded(background, style.border_radius))
        .with_style(Style::fill(background))
        .with_children(vec![badge, label, content])
}
