//! Toggle (switch) component for interactive UI
//!
//! Provides an iOS-style toggle switch with an optional label.

use xellanix_ui::{
    Align, Color, Content, InteractionEvent, Key, Layout, NamedKey, Node, NodeId, Palette,
    Point, Rect, Shape, Size, Spacing, Style, TextContent,
};

/// Which side of the switch the label is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    Before,
    #[default]
    After,
}

/// Visual styling for a toggle switch
#[derive(Debug, Clone)]
pub struct ToggleStyle {
    /// Background color when toggle is off
    pub off_color: Color,
    /// Background color when toggle is on
    pub on_color: Color,
    /// Color of the sliding knob
    pub knob_color: Color,
    pub hover_color: Color,
    pub disabled_color: Color,
    pub label_color: Color,
    /// Width of the track
    pub track_width: f32,
    /// Height of the track
    pub track_height: f32,
    /// Diameter of the knob
    pub knob_width: f32,
    /// Margin between knob and track edges
    pub knob_margin: f32,
    /// Space between the switch and its label
    pub gap: f32,
    pub font_size: f32,
}

impl ToggleStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            off_color: palette.surface0,
            on_color: palette.accent,
            knob_color: palette.base,
            hover_color: palette.surface1,
            disabled_color: palette.surface0,
            label_color: palette.text,
            track_width: 50.0,
            track_height: 30.0,
            knob_width: 26.0,
            knob_margin: 2.0,
            gap: 8.0,
            font_size: 16.0,
        }
    }

    fn knob_offset(&self, value: bool) -> f32 {
        if value {
            self.track_width - self.knob_width - self.knob_margin * 2.0
        } else {
            0.0
        }
    }
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::mocha())
    }
}

/// Create the switch node (track with knob) for the given state
pub fn toggle(id: impl Into<NodeId>, value: bool, disabled: bool, style: &ToggleStyle) -> Node {
    let id = id.into();
    let track_color = if value {
        style.on_color
    } else {
        style.off_color
    };

    Node::new()
        .with_id(id.clone())
        .with_width(Size::px(style.track_width))
        .with_height(Size::px(style.track_height))
        .with_layout_direction(Layout::Horizontal)
        .with_padding(Spacing::all(style.knob_margin))
        .with_shape(Shape::rounded(track_color, style.track_height / 2.0))
        .with_style(Style {
            fill_color: Some(track_color),
            corner_radius: Some(style.track_height / 2.0),
            opacity: Some(1.0),
            ..Default::default()
        })
        .with_hover_style(Style {
            fill_color: Some(if value { style.on_color } else { style.hover_color }),
            opacity: Some(0.9),
            ..Default::default()
        })
        .with_active_style(Style::opacity(0.7))
        .with_disabled_style(Style {
            fill_color: Some(style.disabled_color),
            opacity: Some(0.5),
            ..Default::default()
        })
        .with_disabled(disabled)
        .with_focusable(!disabled)
        .with_child(
            Node::new()
                .with_id(id.child("knob"))
                .with_width(Size::px(style.knob_width))
                .with_height(Size::Fill)
                .with_shape(Shape::rounded(style.knob_color, style.knob_width / 2.0))
                .with_style(Style {
                    fill_color: Some(style.knob_color),
                    corner_radius: Some(style.knob_width / 2.0),
                    offset_x: Some(style.knob_offset(value)),
                    ..Default::default()
                }),
        )
}

/// Stateful toggle switch with label and change callback
pub struct ToggleSwitch {
    id: NodeId,
    value: bool,
    label: Option<String>,
    label_position: LabelPosition,
    disabled: bool,
    focused: bool,
    pressed: bool,
    rect: Rect,
    style: ToggleStyle,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl ToggleSwitch {
    /// Switch that starts off, with no label
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            value: false,
            label: None,
            label_position: LabelPosition::default(),
            disabled: false,
            focused: false,
            pressed: false,
            rect: Rect::default(),
            style: ToggleStyle::default(),
            on_change: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    pub fn with_default_value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_style(mut self, style: ToggleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Bounds of the switch itself (not the label) in window coordinates
    pub fn set_bounds(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.pressed = false;
    }

    /// Flip the state and report it
    pub fn toggle(&mut self) {
        self.value = !self.value;
        log::debug!("toggle {} switched {}", self.id, if self.value { "on" } else { "off" });
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.value);
        }
    }

    /// Process an event targeted at this switch; returns `true` if it toggled
    pub fn handle_event(&mut self, event: &InteractionEvent) -> bool {
        if self.disabled {
            return false;
        }

        match event {
            InteractionEvent::PointerDown { position, .. } => {
                self.pressed = self.contains(*position);
                false
            }
            InteractionEvent::PointerUp { position, .. } => {
                let clicked = self.pressed && self.contains(*position);
                self.pressed = false;
                if clicked {
                    self.toggle();
                }
                clicked
            }
            InteractionEvent::KeyDown {
                key: Key::Named(NamedKey::Enter),
                repeat: false,
            } if self.focused => {
                self.toggle();
                true
            }
            InteractionEvent::Focus => {
                self.focused = true;
                false
            }
            InteractionEvent::Blur => {
                self.focused = false;
                false
            }
            _ => false,
        }
    }

    fn contains(&self, position: Point) -> bool {
        self.rect.contains(position)
    }

    /// Switch plus label laid out on the configured side
    pub fn node(&self) -> Node {
        let switch = toggle(self.id.clone(), self.value, self.disabled, &self.style);
        let Some(label) = &self.label else {
            return switch;
        };

        let label = Node::new()
            .with_id(self.id.child("label"))
            .with_content(Content::Text(
                TextContent::new(label.clone())
                    .with_font_size(self.style.font_size)
                    .with_color(self.style.label_color),
            ));
        let children = match self.label_position {
            LabelPosition::Before => vec![label, switch],
            LabelPosition::After => vec![switch, label],
        };

        Node::new()
            .with_layout_direction(Layout::Horizontal)
            .with_align(Align::Center)
            .with_gap(self.style.gap)
            .with_children(children)
    }
}

impl std::fmt::Debug for ToggleSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use xellanix_ui::PointerKind;

    fn switch_with_log() -> (ToggleSwitch, Rc<RefCell<Vec<bool>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut switch = ToggleSwitch::new("wifi").on_change(move |on| sink.borrow_mut().push(on));
        switch.set_bounds(Rect::from_min_size([0.0, 0.0], [50.0, 30.0]));
        (switch, log)
    }

    fn click(switch: &mut ToggleSwitch, x: f32) -> bool {
        let position = Point::new(x, 15.0);
        switch.handle_event(&InteractionEvent::PointerDown {
            pointer: PointerKind::Mouse,
            position,
        });
        switch.handle_event(&InteractionEvent::PointerUp {
            pointer: PointerKind::Mouse,
            position,
        })
    }

    fn enter(repeat: bool) -> InteractionEvent {
        InteractionEvent::KeyDown {
            key: Key::Named(NamedKey::Enter),
            repeat,
        }
    }

    #[test]
    fn test_click_toggles_and_reports() {
        let (mut switch, log) = switch_with_log();
        assert!(click(&mut switch, 10.0));
        assert!(click(&mut switch, 10.0));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let (mut switch, log) = switch_with_log();
        assert!(!click(&mut switch, 90.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_enter_toggles_unless_repeat() {
        let (mut switch, log) = switch_with_log();
        assert!(!switch.handle_event(&enter(false)));

        switch.handle_event(&InteractionEvent::Focus);
        assert!(switch.handle_event(&enter(false)));
        assert!(!switch.handle_event(&enter(true)));
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let (switch, log) = switch_with_log();
        let mut switch = switch.with_disabled(true);
        assert!(!click(&mut switch, 10.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_label_position() {
        let switch = ToggleSwitch::new("t")
            .with_label("Dark mode")
            .with_label_position(LabelPosition::Before);
        let node = switch.node();
        assert_eq!(node.children()[0].text(), Some("Dark mode"));
        assert_eq!(node.children()[1].id(), Some(&NodeId::new("t")));

        let node = ToggleSwitch::new("t").with_label("Dark mode").node();
        assert_eq!(node.children()[1].text(), Some("Dark mode"));
    }

    #[test]
    fn test_knob_moves_with_value() {
        let style = ToggleStyle::default();
        let on = toggle("t", true, false, &style);
        let knob = on.find("t_knob").map(|knob| knob.style().offset_x);
        assert_eq!(knob, Some(Some(20.0)));
    }
}
