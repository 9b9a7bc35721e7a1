//! Button component for interactive UI
//!
//! Provides a clickable button widget with hover and press states.

use xellanix_ui::{
    Color, Content, HorizontalAlign, Icon, IconContent, InteractionEvent, Node, NodeId, Palette,
    Point, Rect, Shape, Size, Spacing, Style, TextContent,
};

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Button is idle (not being interacted with)
    #[default]
    Idle,
    /// Pointer is hovering over the button
    Hovered,
    /// Button is being pressed
    Pressed,
    /// Button is disabled (not interactive)
    Disabled,
}

impl ButtonState {
    /// Update the button state based on interaction flags
    pub fn update(&mut self, is_hovered: bool, is_pressed: bool, enabled: bool) {
        *self = if !enabled {
            ButtonState::Disabled
        } else if is_pressed {
            ButtonState::Pressed
        } else if is_hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        };
    }
}

/// Visual styling for a button
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Background color when idle
    pub idle_color: Color,
    /// Background color when hovered
    pub hover_color: Color,
    /// Background color when pressed
    pub pressed_color: Color,
    /// Background color when disabled
    pub disabled_color: Color,
    /// Text or icon color
    pub text_color: Color,
    /// Disabled text or icon color
    pub disabled_text_color: Color,
    /// Internal padding
    pub padding: Spacing,
    /// Corner radius for rounded corners
    pub border_radius: f32,
    /// Font size, also used as the icon size
    pub font_size: f32,
}

impl ButtonStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            idle_color: palette.surface0,
            hover_color: palette.surface1,
            pressed_color: palette.overlay0,
            disabled_color: palette.surface0.with_alpha(0.5),
            text_color: palette.text,
            disabled_text_color: palette.subtext0,
            padding: Spacing::symmetric(16.0, 8.0),
            border_radius: 8.0,
            font_size: 16.0,
        }
    }

    /// Square, background-less style used for header close/back buttons
    pub fn icon(palette: &Palette) -> Self {
        Self {
            idle_color: Color::transparent(),
            padding: Spacing::all(4.0),
            font_size: 24.0,
            ..Self::from_palette(palette)
        }
    }

    fn colors(&self, state: ButtonState) -> (Color, Color) {
        match state {
            ButtonState::Idle => (self.idle_color, self.text_color),
            ButtonState::Hovered => (self.hover_color, self.text_color),
            ButtonState::Pressed => (self.pressed_color, self.text_color),
            ButtonState::Disabled => (self.disabled_color, self.disabled_text_color),
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::mocha())
    }
}

fn button_frame(id: impl Into<NodeId>, background: Color, style: &ButtonStyle) -> Node {
    Node::new()
        .with_id(id)
        .with_width(Size::FitContent)
        .with_height(Size::FitContent)
        .with_padding(style.padding)
        .with_shape(Shape::rounded(background, style.border_radius))
        .with_style(Style::fill(background))
}

/// Create a text button node for the given state
pub fn button(
    id: impl Into<NodeId>,
    label: impl Into<String>,
    state: ButtonState,
    style: &ButtonStyle,
) -> Node {
    let (background, text_color) = style.colors(state);
    button_frame(id, background, style)
        .with_disabled(state == ButtonState::Disabled)
        .with_content(Content::Text(
            TextContent::new(label)
                .with_font_size(style.font_size)
                .with_color(text_color)
                .with_h_align(HorizontalAlign::Center),
        ))
}

/// Create an icon-only button node for the given state
pub fn icon_button(id: impl Into<NodeId>, icon: Icon, state: ButtonState, style: &ButtonStyle) -> Node {
    let (background, icon_color) = style.colors(state);
    button_frame(id, background, style)
        .with_disabled(state == ButtonState::Disabled)
        .with_content(Content::Icon(IconContent::new(
            icon,
            style.font_size,
            icon_color,
        )))
}

/// Click tracking for a button placed at known bounds
///
/// A click is a press and a release of the same pointer both inside the
/// bounds; pressing inside and releasing outside cancels it.
#[derive(Debug, Clone)]
pub struct Button {
    id: NodeId,
    rect: Rect,
    state: ButtonState,
    hovered: bool,
    pressed: bool,
    disabled: bool,
}

impl Button {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            rect: Rect::default(),
            state: ButtonState::Idle,
            hovered: false,
            pressed: false,
            disabled: false,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn set_bounds(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.pressed = false;
        }
        self.refresh();
    }

    /// Returns `true` when the event completes a click
    pub fn handle_event(&mut self, event: &InteractionEvent) -> bool {
        if self.disabled {
            return false;
        }

        let clicked = match event {
            InteractionEvent::PointerMove { position, .. } => {
                self.hovered = self.contains(*position);
                false
            }
            InteractionEvent::PointerDown { position, .. } => {
                self.hovered = self.contains(*position);
                self.pressed = self.hovered;
                false
            }
            InteractionEvent::PointerUp { position, .. } => {
                self.hovered = self.contains(*position);
                let clicked = self.pressed && self.hovered;
                self.pressed = false;
                clicked
            }
            _ => false,
        };

        self.refresh();
        clicked
    }

    fn contains(&self, position: Point) -> bool {
        self.rect.contains(position)
    }

    fn refresh(&mut self) {
        self.state.update(self.hovered, self.pressed, !self.disabled);
    }
}
