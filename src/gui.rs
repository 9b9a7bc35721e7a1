use std::time::Instant;
use xellanix_ui::{
    Content, Document, InteractionEvent, Layout, Node, NodeId, Point, Rect, Spacing,
    TargetedEvent, TextContent,
};
use xellanix_ui_interactive::{
    info_box, use_popup, CallbackKind, InfoBoxStyle, InfoStatus, NumericInput, PopupError,
    PopupProvider, Slider, SliderHandle, SliderProps, ToggleSwitch,
};

const MARGIN: f32 = 40.0;
const ROW_HEIGHT: f32 = 36.0;

/// Demo surface: a slider and a numeric field sharing one handle, plus a
/// toggle that opens a popup
pub struct Gui {
    document: Document,
    handle: SliderHandle,
    slider: Slider,
    field: NumericInput,
    toggle: ToggleSwitch,
    popup: PopupProvider,
    slider_rect: Rect,
    field_rect: Rect,
    toggle_rect: Rect,
}

impl Gui {
    pub fn new() -> Result<Self, PopupError> {
        let document = Document::new();
        let handle = SliderHandle::new();
        handle.callback(CallbackKind::Input, |value| log::debug!("value {}", value));
        handle.callback(CallbackKind::Change, |value| log::info!("value settled at {}", value));

        let slider = Slider::new(
            "volume",
            &document,
            SliderProps {
                min: 0.0,
                max: 100.0,
                step: 5.0,
                default_value: 50.0,
            },
        )
        .with_handle(&handle);
        let field = NumericInput::bound("volume_field", &handle);

        let popup = PopupProvider::new("assets/xellanix.png", "Xellanix");
        let toggle = popup.provide(|| -> Result<ToggleSwitch, PopupError> {
            let popup = use_popup()?;
            Ok(ToggleSwitch::new("details")
                .with_label("Show details")
                .on_change(move |on| {
                    if on {
                        popup.set_item(details());
                        popup.open();
                    } else {
                        popup.close();
                    }
                }))
        })?;

        let mut gui = Self {
            document,
            handle,
            slider,
            field,
            toggle,
            popup,
            slider_rect: Rect::default(),
            field_rect: Rect::default(),
            toggle_rect: Rect::default(),
        };
        gui.layout(1280.0, 720.0);
        Ok(gui)
    }

    /// Place the widgets for a window of the given size
    pub fn layout(&mut self, width: f32, height: f32) {
        self.slider_rect = Rect::from_min_size([MARGIN, MARGIN], [200.0, 30.0]);
        self.field_rect = Rect::from_min_size([MARGIN + 220.0, MARGIN], [96.0, ROW_HEIGHT]);
        self.toggle_rect = Rect::from_min_size([MARGIN, MARGIN + 60.0], [50.0, 30.0]);

        self.slider.set_bounds(self.slider_rect);
        self.toggle.set_bounds(self.toggle_rect);

        let close = Rect::from_min_size([width / 2.0 + 120.0, height / 2.0 - 120.0], [32.0, 32.0]);
        self.popup.set_button_bounds(close, None);
    }

    pub fn value(&self) -> f64 {
        self.handle.value()
    }

    pub fn update(&mut self, now: Instant) {
        if self.popup.update(now) {
            log::info!("popup dismissed");
        }
    }

    /// Whether a timed transition needs the event loop to keep waking up
    pub fn is_animating(&self) -> bool {
        self.popup.hides_background()
    }

    pub fn handle_event(&mut self, event: &InteractionEvent) {
        self.document.dispatch(event);

        if self.popup.hides_background() {
            self.popup.handle_event(event);
            return;
        }

        match event {
            InteractionEvent::PointerDown { position, .. } => {
                let focus = if self.slider_rect.contains(*position) {
                    self.slider.handle_event(event)
                } else {
                    self.document.set_focus(self.hit_test(*position))
                };
                self.route(focus);
                self.toggle.handle_event(event);
            }
            InteractionEvent::PointerUp { .. } => {
                self.toggle.handle_event(event);
            }
            InteractionEvent::KeyDown { .. } | InteractionEvent::KeyUp { .. } => {
                if let Some(target) = self.document.focused() {
                    self.deliver(&target, event);
                }
            }
            _ => {}
        }
    }

    fn hit_test(&self, position: Point) -> Option<NodeId> {
        if self.field_rect.contains(position) {
            Some(self.field.id().clone())
        } else if self.toggle_rect.contains(position) {
            Some(self.toggle.id().clone())
        } else {
            None
        }
    }

    fn route(&mut self, events: Vec<TargetedEvent>) {
        for targeted in events {
            self.deliver(&targeted.target, &targeted.event);
        }
    }

    fn deliver(&mut self, target: &NodeId, event: &InteractionEvent) {
        if target == self.slider.id() {
            let focus = self.slider.handle_event(event);
            self.route(focus);
        } else if target == self.field.id() {
            self.field.handle_event(event);
        } else if target == self.toggle.id() {
            self.toggle.handle_event(event);
        }
    }

    /// Full UI tree: widgets with the popup layer stacked on top
    pub fn node(&self) -> Node {
        let content = Node::new()
            .with_layout_direction(Layout::Vertical)
            .with_padding(Spacing::all(MARGIN))
            .with_gap(24.0)
            .with_children(vec![
                Node::new()
                    .with_layout_direction(Layout::Horizontal)
                    .with_gap(20.0)
                    .with_children(vec![self.slider.node(), self.field.node()]),
                self.toggle.node(),
                info_box(
                    InfoStatus::Info,
                    text("Drag the slider or type a value; both stay in sync."),
                    &InfoBoxStyle::default(),
                ),
            ]);

        Node::new()
            .with_layout_direction(Layout::Stack)
            .with_children(vec![content, self.popup.node()])
    }
}

fn text(text: &str) -> Node {
    Node::new().with_content(Content::Text(TextContent::new(text)))
}

fn details() -> Node {
    Node::new()
        .with_layout_direction(Layout::Vertical)
        .with_gap(12.0)
        .with_children(vec![
            info_box(
                InfoStatus::Success,
                text("The slider, field and handle share one value."),
                &InfoBoxStyle::default(),
            ),
            info_box(
                InfoStatus::Warning,
                text("Typed values outside 0..100 are clamped on commit."),
                &InfoBoxStyle::default(),
            ),
        ])
}
