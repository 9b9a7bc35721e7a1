//! Slider component for interactive UI
//!
//! A [`Slider`] owns its value and routes pointer, keyboard and handle input
//! through three small pieces:
//! - [`DragController`] turns press/move/release into thumb offsets
//! - [`key_step`] turns arrow presses into step increments
//! - [`SliderHandle`] lets a host drive one or more sliders imperatively
//!
//! Every path ends in [`SliderBounds::quantize`], so the value is always in
//! range and step-aligned.

mod drag;
mod handle;
mod keyboard;
mod quantize;

pub use drag::*;
pub use handle::*;
pub use keyboard::*;
pub use quantize::*;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use xellanix_ui::{
    Color, Document, InteractionEvent, Key, Layout, Node, NodeId, Offset, Palette, PointerKind,
    Point, Rect, Shape, Size, Style, Subscription, TargetedEvent,
};

type ValueCallback = Rc<dyn Fn(f64)>;

/// Initial configuration of a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderProps {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            default_value: 0.0,
        }
    }
}

/// Visual styling for a slider
#[derive(Debug, Clone)]
pub struct SliderStyle {
    /// Color of the track (unfilled portion)
    pub track_color: Color,
    /// Color of the filled portion of the track
    pub filled_color: Color,
    /// Color of the draggable thumb
    pub thumb_color: Color,
    /// Color of the thumb when hovered
    pub thumb_hover_color: Color,
    /// Color of the thumb when being dragged
    pub thumb_active_color: Color,
    /// Fill color of the filled portion when disabled
    pub disabled_color: Color,
    /// Width of the slider track
    pub track_width: f32,
    /// Height of the slider track
    pub track_height: f32,
    /// Diameter of the thumb
    pub thumb_size: f32,
}

impl SliderStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            track_color: palette.surface0,
            filled_color: palette.accent,
            thumb_color: palette.base,
            thumb_hover_color: palette.surface0,
            thumb_active_color: palette.surface1,
            disabled_color: palette.surface1,
            track_width: 200.0,
            track_height: 30.0,
            thumb_size: 26.0,
        }
    }

    /// Gap between the thumb and the track edge when the track is taller
    pub fn thumb_inset(&self) -> f32 {
        ((self.track_height - self.thumb_size) / 2.0).max(0.0)
    }

    /// Distance the thumb can travel on a slider `width` pixels wide
    pub fn travel(&self, width: f32) -> f32 {
        (width - self.thumb_size - self.thumb_inset() * 2.0).max(0.0)
    }

    fn height(&self) -> f32 {
        self.thumb_size.max(self.track_height)
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::mocha())
    }
}

struct SliderState {
    bounds: SliderBounds,
    value: f64,
    /// Last value reported through `on_deferred_change`
    deferred: f64,
    rect: Rect,
    style: SliderStyle,
    disabled: bool,
    drag: DragController,
    subscription: Option<Subscription>,
    handle: Option<WeakSliderHandle>,
    updater: Option<UpdaterId>,
    /// Set while this slider pushes its own value into the handle
    syncing_handle: bool,
    on_change: Option<ValueCallback>,
    on_deferred_change: Option<ValueCallback>,
}

impl SliderState {
    fn travel(&self) -> f64 {
        f64::from(self.style.travel(self.rect.width()))
    }

    fn thumb_offset(&self) -> f64 {
        self.bounds.offset_of(self.value, self.travel())
    }

    fn thumb_rect(&self) -> Rect {
        let x = self.rect.min[0] + self.style.thumb_inset() + self.thumb_offset() as f32;
        Rect::new([x, self.rect.min[1]], [x + self.style.thumb_size, self.rect.max[1]])
    }

    /// Mark the current value as reported, returning it if it was not yet
    fn take_unsettled(&mut self) -> Option<f64> {
        if self.value == self.deferred {
            None
        } else {
            self.deferred = self.value;
            Some(self.value)
        }
    }
}

enum Notify {
    Live(f64),
    Deferred(f64),
}

struct SliderCore {
    id: NodeId,
    document: Document,
    state: RefCell<SliderState>,
}

impl SliderCore {
    fn begin_drag(self: &Rc<Self>, pointer: PointerKind, x: f32) {
        let mut state = self.state.borrow_mut();
        let offset = state.thumb_offset();
        if !state.drag.begin(pointer, x, offset) {
            return;
        }

        let weak = Rc::downgrade(self);
        state.subscription = Some(self.document.listen(self.id.clone(), move |event| {
            if let Some(core) = weak.upgrade() {
                core.document_event(event);
            }
        }));
        log::debug!("slider {} drag started at {}", self.id, state.value);
    }

    fn document_event(&self, event: &InteractionEvent) {
        match *event {
            InteractionEvent::PointerMove { pointer, position } => self.drag_to(pointer, position),
            InteractionEvent::PointerUp { pointer, .. } => self.release(pointer),
            _ => {}
        }
    }

    fn drag_to(&self, pointer: PointerKind, position: Point) {
        let changed = {
            let mut state = self.state.borrow_mut();
            let travel = state.travel();
            let Some(offset) = state.drag.offset_for(pointer, position.x, travel) else {
                return;
            };
            let value = state.bounds.quantize(state.bounds.value_at(offset, travel));
            if value == state.value {
                None
            } else {
                state.value = value;
                Some(value)
            }
        };

        if let Some(value) = changed {
            self.emit(Notify::Live(value));
        }
    }

    fn release(&self, pointer: PointerKind) {
        let (subscription, settled) = {
            let mut state = self.state.borrow_mut();
            if !state.drag.end(pointer) {
                return;
            }
            log::debug!("slider {} drag ended at {}", self.id, state.value);
            (state.subscription.take(), state.take_unsettled())
        };
        drop(subscription);

        if let Some(value) = settled {
            self.emit(Notify::Deferred(value));
        }
    }

    fn key_down(&self, key: &Key) {
        let changed = {
            let mut state = self.state.borrow_mut();
            match key_step(&state.bounds, state.value, key) {
                Some(value) if value != state.value => {
                    state.value = value;
                    Some(value)
                }
                _ => None,
            }
        };

        if let Some(value) = changed {
            self.emit(Notify::Live(value));
        }
    }

    fn settle(&self) {
        let settled = {
            let mut state = self.state.borrow_mut();
            if state.drag.is_dragging() {
                return;
            }
            state.take_unsettled()
        };

        if let Some(value) = settled {
            self.emit(Notify::Deferred(value));
        }
    }

    /// Run the element callback and mirror the value into the bound handle
    ///
    /// Must be called with no borrow of `state` held.
    fn emit(&self, notify: Notify) {
        let (callback, handle) = {
            let mut state = self.state.borrow_mut();
            let handle = state.handle.as_ref().and_then(WeakSliderHandle::upgrade);
            let callback = match notify {
                Notify::Live(_) => {
                    state.syncing_handle = handle.is_some();
                    state.on_change.clone()
                }
                Notify::Deferred(_) => state.on_deferred_change.clone(),
            };
            (callback, handle)
        };

        match notify {
            Notify::Live(value) => {
                if let Some(handle) = &handle {
                    handle.set(SliderField::Value, value);
                    self.state.borrow_mut().syncing_handle = false;
                }
                if let Some(callback) = callback {
                    callback(value);
                }
                if let Some(handle) = handle {
                    handle.fire_callback(CallbackKind::Input, value);
                }
            }
            Notify::Deferred(value) => {
                if let Some(callback) = callback {
                    callback(value);
                }
                if let Some(handle) = handle {
                    handle.fire_callback(CallbackKind::Change, value);
                }
            }
        }
    }

    /// Element updater: adopt bounds and value pushed through the handle
    fn sync_from_handle(&self, values: &SliderValues) {
        let mut state = self.state.borrow_mut();
        if state.syncing_handle {
            return;
        }
        state.bounds = values.bounds();
        let value = state.bounds.quantize(values.value);
        state.value = value;
        state.deferred = value;
    }

    fn unbind_handle(&self) {
        let (handle, updater) = {
            let mut state = self.state.borrow_mut();
            (state.handle.take(), state.updater.take())
        };
        if let (Some(handle), Some(updater)) = (handle.and_then(|h| h.upgrade()), updater) {
            handle.remove_element_updater(updater);
        }
    }
}

/// A draggable, keyboard-steppable numeric slider
///
/// ```ignore
/// let slider = Slider::new("volume", &document, SliderProps::default())
///     .on_change(|value| println!("live {value}"))
///     .on_deferred_change(|value| println!("settled {value}"))
///     .with_handle(&handle);
/// ```
pub struct Slider {
    core: Rc<SliderCore>,
}

impl Slider {
    /// Mount a slider at the default style size
    pub fn new(id: impl Into<NodeId>, document: &Document, props: SliderProps) -> Self {
        let bounds = SliderBounds::new(props.min, props.max, props.step);
        let value = bounds.quantize(props.default_value);
        let style = SliderStyle::default();
        let rect = Rect::from_min_size([0.0, 0.0], [style.track_width, style.height()]);

        let state = SliderState {
            bounds,
            value,
            deferred: value,
            rect,
            style,
            disabled: false,
            drag: DragController::new(),
            subscription: None,
            handle: None,
            updater: None,
            syncing_handle: false,
            on_change: None,
            on_deferred_change: None,
        };

        Self {
            core: Rc::new(SliderCore {
                id: id.into(),
                document: document.clone(),
                state: RefCell::new(state),
            }),
        }
    }

    /// Live callback, fired whenever the value changes during an interaction
    pub fn on_change(self, callback: impl Fn(f64) + 'static) -> Self {
        self.core.state.borrow_mut().on_change = Some(Rc::new(callback));
        self
    }

    /// Deferred callback, fired once an interaction settles on a new value
    pub fn on_deferred_change(self, callback: impl Fn(f64) + 'static) -> Self {
        self.core.state.borrow_mut().on_deferred_change = Some(Rc::new(callback));
        self
    }

    /// Bind to a host handle
    ///
    /// The handle is initialized with this slider's bounds and value, then
    /// every later `set` on the handle re-renders this slider.
    pub fn with_handle(self, handle: &SliderHandle) -> Self {
        self.core.unbind_handle();

        let (bounds, value) = {
            let state = self.core.state.borrow();
            (state.bounds, state.value)
        };
        handle.init(HandleInit {
            min: Some(bounds.min()),
            max: Some(bounds.max()),
            step: Some(bounds.step()),
            value: Some(value),
        });

        let weak = Rc::downgrade(&self.core);
        let updater = handle.element_updater(move |values| {
            if let Some(core) = weak.upgrade() {
                core.sync_from_handle(values);
            }
        });

        {
            let mut state = self.core.state.borrow_mut();
            state.handle = Some(handle.downgrade());
            state.updater = Some(updater);
        }
        self
    }

    /// Use a custom style; the slider keeps its position and adopts the style's size
    pub fn with_style(self, style: SliderStyle) -> Self {
        {
            let mut state = self.core.state.borrow_mut();
            let min = state.rect.min;
            state.rect = Rect::from_min_size(min, [style.track_width, style.height()]);
            state.style = style;
        }
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Enable or disable input; disabling cancels a drag in progress
    pub fn set_disabled(&self, disabled: bool) {
        let subscription = {
            let mut state = self.core.state.borrow_mut();
            state.disabled = disabled;
            if disabled {
                state.drag.cancel();
                state.subscription.take()
            } else {
                None
            }
        };
        drop(subscription);
    }

    /// Rendered geometry in window coordinates, set by the host on layout or resize
    pub fn set_bounds(&self, rect: Rect) {
        self.core.state.borrow_mut().rect = rect;
    }

    pub fn id(&self) -> &NodeId {
        &self.core.id
    }

    pub fn value(&self) -> f64 {
        self.core.state.borrow().value
    }

    /// Last value reported through `on_deferred_change`
    pub fn deferred_value(&self) -> f64 {
        self.core.state.borrow().deferred
    }

    pub fn bounds(&self) -> SliderBounds {
        self.core.state.borrow().bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.core.state.borrow().drag.is_dragging()
    }

    pub fn is_disabled(&self) -> bool {
        self.core.state.borrow().disabled
    }

    pub fn is_focused(&self) -> bool {
        self.core.document.is_focused(&self.core.id)
    }

    /// Thumb distance from the start of its travel, in pixels
    pub fn thumb_offset(&self) -> f64 {
        self.core.state.borrow().thumb_offset()
    }

    pub fn thumb_rect(&self) -> Rect {
        self.core.state.borrow().thumb_rect()
    }

    /// Bound handle, if one was supplied and is still alive
    pub fn handle(&self) -> Option<SliderHandle> {
        self.core
            .state
            .borrow()
            .handle
            .as_ref()
            .and_then(WeakSliderHandle::upgrade)
    }

    /// Process an event targeted at this slider
    ///
    /// Pointer moves and releases are received through the document while a
    /// drag is active and are ignored here. Returns the focus events the host
    /// must route when a press moves focus onto the slider.
    pub fn handle_event(&self, event: &InteractionEvent) -> Vec<TargetedEvent> {
        if self.is_disabled() {
            return Vec::new();
        }

        match event {
            InteractionEvent::PointerDown { pointer, position } => {
                self.press(*pointer, *position)
            }
            InteractionEvent::KeyDown { key, .. } if self.is_focused() => {
                self.core.key_down(key);
                Vec::new()
            }
            InteractionEvent::KeyUp { key } if self.is_focused() && key.is_arrow() => {
                self.core.settle();
                Vec::new()
            }
            InteractionEvent::Blur => {
                self.core.settle();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn press(&self, pointer: PointerKind, position: Point) -> Vec<TargetedEvent> {
        let (inside, on_thumb) = {
            let state = self.core.state.borrow();
            (
                state.rect.contains(position),
                state.thumb_rect().contains(position),
            )
        };
        if !inside {
            return Vec::new();
        }

        let focus_events = self.core.document.set_focus(Some(self.core.id.clone()));
        if on_thumb {
            self.core.begin_drag(pointer, position.x);
        }
        focus_events
    }

    /// Build the node tree: track, filled portion and thumb stacked on top of each other
    pub fn node(&self) -> Node {
        let state = self.core.state.borrow();
        let style = &state.style;
        let width = state.rect.width();
        let height = style.height();
        let inset = style.thumb_inset();
        let thumb_x = inset + state.thumb_offset() as f32;
        let filled_width = thumb_x + style.thumb_size + inset;
        let id = &self.core.id;

        Node::new()
            .with_id(id.clone())
            .with_width(Size::px(width))
            .with_height(Size::px(height))
            .with_layout_direction(Layout::Stack)
            .with_focusable(true)
            .with_disabled(state.disabled)
            .with_children(vec![
                Node::new()
                    .with_id(id.child("track"))
                    .with_width(Size::px(width))
                    .with_height(Size::px(style.track_height))
                    .with_offset(Offset::new(0.0, (height - style.track_height) / 2.0))
                    .with_shape(Shape::rounded(style.track_color, style.track_height / 2.0))
                    .with_style(Style::fill(style.track_color))
                    .with_disabled(state.disabled),
                Node::new()
                    .with_id(id.child("fill"))
                    .with_width(Size::px(filled_width))
                    .with_height(Size::px(style.track_height))
                    .with_offset(Offset::new(0.0, (height - style.track_height) / 2.0))
                    .with_shape(Shape::rounded(style.filled_color, style.track_height / 2.0))
                    .with_style(Style::fill(style.filled_color))
                    .with_disabled_style(Style::fill(style.disabled_color))
                    .with_disabled(state.disabled),
                Node::new()
                    .with_id(id.child("thumb"))
                    .with_size(style.thumb_size, style.thumb_size)
                    .with_offset(Offset::new(thumb_x, (height - style.thumb_size) / 2.0))
                    .with_shape(Shape::rounded(style.thumb_color, style.thumb_size / 2.0))
                    .with_style(Style {
                        fill_color: Some(style.thumb_color),
                        opacity: Some(1.0),
                        ..Default::default()
                    })
                    .with_hover_style(Style::fill(style.thumb_hover_color))
                    .with_active_style(Style::fill(style.thumb_active_color))
                    .with_disabled_style(Style::opacity(0.0))
                    .with_disabled(state.disabled),
            ])
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        let subscription = {
            let mut state = self.core.state.borrow_mut();
            state.drag.cancel();
            state.subscription.take()
        };
        drop(subscription);
        self.core.unbind_handle();
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.core.state.borrow();
        f.debug_struct("Slider")
            .field("id", &self.core.id)
            .field("bounds", &state.bounds)
            .field("value", &state.value)
            .field("deferred", &state.deferred)
            .field("dragging", &state.drag.is_dragging())
            .field("disabled", &state.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xellanix_ui::NamedKey;

    /// Thumb and track are both 20px, so a 120px slider has exactly 100px of travel
    fn test_style() -> SliderStyle {
        SliderStyle {
            track_height: 20.0,
            thumb_size: 20.0,
            track_width: 120.0,
            ..Default::default()
        }
    }

    struct Recorded {
        changes: Rc<RefCell<Vec<f64>>>,
        deferred: Rc<RefCell<Vec<f64>>>,
    }

    fn mount(document: &Document, props: SliderProps) -> (Slider, Recorded) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let deferred = Rc::new(RefCell::new(Vec::new()));
        let live = Rc::clone(&changes);
        let settled = Rc::clone(&deferred);

        let slider = Slider::new("slider", document, props)
            .with_style(test_style())
            .on_change(move |value| live.borrow_mut().push(value))
            .on_deferred_change(move |value| settled.borrow_mut().push(value));
        slider.set_bounds(Rect::from_min_size([10.0, 0.0], [120.0, 20.0]));

        (slider, Recorded { changes, deferred })
    }

    fn step_ten() -> SliderProps {
        SliderProps {
            step: 10.0,
            ..Default::default()
        }
    }

    fn down(x: f32) -> InteractionEvent {
        InteractionEvent::PointerDown {
            pointer: PointerKind::Mouse,
            position: Point::new(x, 10.0),
        }
    }

    fn move_to(x: f32) -> InteractionEvent {
        InteractionEvent::PointerMove {
            pointer: PointerKind::Mouse,
            position: Point::new(x, 10.0),
        }
    }

    fn up(x: f32) -> InteractionEvent {
        InteractionEvent::PointerUp {
            pointer: PointerKind::Mouse,
            position: Point::new(x, 10.0),
        }
    }

    fn key_down(key: NamedKey) -> InteractionEvent {
        InteractionEvent::KeyDown {
            key: Key::Named(key),
            repeat: false,
        }
    }

    #[test]
    fn test_tiny_drag_fires_nothing() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        assert!(slider.is_dragging());
        document.dispatch(&move_to(23.0));
        document.dispatch(&up(23.0));

        assert_eq!(slider.value(), 0.0);
        assert!(recorded.changes.borrow().is_empty());
        assert!(recorded.deferred.borrow().is_empty());
    }

    #[test]
    fn test_drag_to_tie_settles_on_lower_step() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        document.dispatch(&move_to(75.0));
        document.dispatch(&up(75.0));

        assert_eq!(slider.value(), 50.0);
        assert_eq!(*recorded.changes.borrow(), vec![50.0]);
        assert_eq!(*recorded.deferred.borrow(), vec![50.0]);
    }

    #[test]
    fn test_drag_only_fires_on_step_crossings() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        for x in [24.0, 28.0, 32.0, 36.0, 40.0, 44.0] {
            document.dispatch(&move_to(x));
        }
        document.dispatch(&up(44.0));

        assert_eq!(*recorded.changes.borrow(), vec![10.0, 20.0]);
        assert_eq!(*recorded.deferred.borrow(), vec![20.0]);
    }

    #[test]
    fn test_drag_returning_to_start_skips_deferred() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        document.dispatch(&move_to(50.0));
        document.dispatch(&move_to(20.0));
        document.dispatch(&up(20.0));

        assert_eq!(*recorded.changes.borrow(), vec![30.0, 0.0]);
        assert!(recorded.deferred.borrow().is_empty());
    }

    #[test]
    fn test_touch_drag_follows_its_own_finger() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());
        let finger = PointerKind::Touch(3);
        let at = |x: f32| Point::new(x, 10.0);

        slider.handle_event(&InteractionEvent::PointerDown {
            pointer: finger,
            position: at(20.0),
        });
        assert!(slider.is_dragging());

        document.dispatch(&InteractionEvent::PointerMove {
            pointer: finger,
            position: at(60.0),
        });
        // Other pointers leave the drag alone
        document.dispatch(&move_to(100.0));
        document.dispatch(&up(100.0));
        assert!(slider.is_dragging());

        document.dispatch(&InteractionEvent::PointerUp {
            pointer: finger,
            position: at(60.0),
        });

        assert_eq!(slider.value(), 40.0);
        assert_eq!(*recorded.changes.borrow(), vec![40.0]);
        assert_eq!(*recorded.deferred.borrow(), vec![40.0]);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_press_off_thumb_only_focuses() {
        let document = Document::new();
        let (slider, _) = mount(&document, step_ten());

        let focus = slider.handle_event(&down(100.0));
        assert_eq!(focus.len(), 1);
        assert!(slider.is_focused());
        assert!(!slider.is_dragging());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_release_leaves_no_listeners() {
        let document = Document::new();
        let (slider, _) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        assert_eq!(document.listener_count(), 1);
        document.dispatch(&up(20.0));
        assert_eq!(document.listener_count(), 0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_drop_while_dragging_leaves_no_listeners() {
        let document = Document::new();
        let (slider, _) = mount(&document, step_ten());

        slider.handle_event(&down(20.0));
        drop(slider);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.dispatch(&move_to(80.0)), 0);
    }

    #[test]
    fn test_arrow_keys_step_and_settle_once() {
        let document = Document::new();
        let (slider, recorded) = mount(
            &document,
            SliderProps {
                step: 5.0,
                ..Default::default()
            },
        );
        document.set_focus(Some(slider.id().clone()));

        for _ in 0..3 {
            slider.handle_event(&key_down(NamedKey::ArrowRight));
        }
        slider.handle_event(&InteractionEvent::KeyUp {
            key: Key::Named(NamedKey::ArrowRight),
        });
        slider.handle_event(&InteractionEvent::KeyUp {
            key: Key::Named(NamedKey::ArrowRight),
        });

        assert_eq!(slider.value(), 15.0);
        assert_eq!(*recorded.changes.borrow(), vec![5.0, 10.0, 15.0]);
        assert_eq!(*recorded.deferred.borrow(), vec![15.0]);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());

        slider.handle_event(&key_down(NamedKey::ArrowRight));
        assert_eq!(slider.value(), 0.0);
        assert!(recorded.changes.borrow().is_empty());
    }

    #[test]
    fn test_blur_settles_pending_keyboard_change() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());
        document.set_focus(Some(slider.id().clone()));

        slider.handle_event(&key_down(NamedKey::ArrowUp));
        slider.handle_event(&InteractionEvent::Blur);

        assert_eq!(*recorded.deferred.borrow(), vec![10.0]);
    }

    #[test]
    fn test_disabled_slider_ignores_input() {
        let document = Document::new();
        let (slider, recorded) = mount(&document, step_ten());
        slider.set_disabled(true);

        assert!(slider.handle_event(&down(20.0)).is_empty());
        assert!(!slider.is_dragging());
        assert!(recorded.changes.borrow().is_empty());
    }

    #[test]
    fn test_default_value_is_quantized() {
        let document = Document::new();
        let slider = Slider::new(
            "s",
            &document,
            SliderProps {
                default_value: 57.0,
                step: 10.0,
                ..Default::default()
            },
        );
        assert_eq!(slider.value(), 60.0);
        assert_eq!(slider.deferred_value(), 60.0);
    }

    #[test]
    fn test_node_places_thumb_at_value() {
        let document = Document::new();
        let slider = Slider::new(
            "volume",
            &document,
            SliderProps {
                default_value: 50.0,
                ..Default::default()
            },
        )
        .with_style(test_style());

        let node = slider.node();
        let thumb = node.find("volume_thumb");
        assert_eq!(thumb.map(|thumb| thumb.offset().x), Some(50.0));
        assert!(node.is_focusable());
        assert_eq!(node.children().len(), 3);
    }
}
