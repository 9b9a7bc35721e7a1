//! Numeric text field that mirrors a slider value
//!
//! The field keeps its own text buffer. Character edits propagate a live value
//! as soon as the text parses; Enter or losing focus after an edit commits, clamping the
//! value into range or replacing unparsable text with [`INVALID_SENTINEL`].

use crate::slider::{
    CallbackKind, SliderBounds, SliderField, SliderHandle, SliderValues, UpdaterId,
    WeakSliderHandle,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use xellanix_ui::{
    Color, Content, HorizontalAlign, InteractionEvent, Key, NamedKey, Node, NodeId, Palette,
    Shape, Size, Spacing, Style, TextContent,
};

/// Text shown after committing something that is not a finite number
pub const INVALID_SENTINEL: &str = "-";

/// Visual styling for a numeric input
#[derive(Debug, Clone)]
pub struct NumericInputStyle {
    /// Background color when idle
    pub idle_color: Color,
    /// Background color when focused
    pub focused_color: Color,
    pub text_color: Color,
    /// Text color while the field shows the sentinel
    pub invalid_text_color: Color,
    pub padding: Spacing,
    pub border_radius: f32,
    pub font_size: f32,
    pub width: f32,
}

impl NumericInputStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            idle_color: palette.surface0,
            focused_color: palette.surface1,
            text_color: palette.text,
            invalid_text_color: palette.subtext0,
            padding: Spacing::symmetric(12.0, 8.0),
            border_radius: 8.0,
            font_size: 16.0,
            width: 96.0,
        }
    }
}

impl Default for NumericInputStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::mocha())
    }
}

/// Parse user text as a finite number, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn format_number(value: f64) -> String {
    // Avoid showing "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

struct InputState {
    text: String,
    bounds: SliderBounds,
    value: f64,
    focused: bool,
    disabled: bool,
    /// Text shows the sentinel after an invalid commit
    invalid: bool,
    /// Edited since the last commit
    dirty: bool,
    /// Set while this field pushes its own edit into the handle
    suppress: bool,
    handle: Option<WeakSliderHandle>,
    updater: Option<UpdaterId>,
}

struct InputCore {
    id: NodeId,
    state: RefCell<InputState>,
}

impl InputCore {
    /// Mirror a live edit into the handle without letting the handle rewrite our text
    fn propagate(&self, value: f64, live: f64) {
        if let Some(handle) = self.push_value(value) {
            handle.fire_callback(CallbackKind::Input, live);
        }
    }

    /// Push a committed value and adopt the step-aligned value the handle stored
    fn propagate_commit(&self, value: f64) -> f64 {
        let Some(handle) = self.push_value(value) else {
            return value;
        };

        let committed = {
            let mut state = self.state.borrow_mut();
            if state.invalid {
                // The sentinel always signals zero downstream
                value
            } else {
                state.value = handle.value();
                state.text = format_number(state.value);
                state.value
            }
        };
        handle.fire_callback(CallbackKind::Input, committed);
        handle.fire_callback(CallbackKind::Change, committed);
        committed
    }

    fn push_value(&self, value: f64) -> Option<SliderHandle> {
        let handle = {
            let mut state = self.state.borrow_mut();
            let handle = state.handle.as_ref().and_then(WeakSliderHandle::upgrade);
            state.suppress = handle.is_some();
            handle
        }?;

        handle.set(SliderField::Value, value);
        self.state.borrow_mut().suppress = false;
        Some(handle)
    }

    fn sync_from_handle(&self, values: &SliderValues) {
        let mut state = self.state.borrow_mut();
        if state.suppress {
            return;
        }
        state.bounds = values.bounds();
        state.value = values.value;
        state.text = format_number(values.value);
        state.invalid = false;
        state.dirty = false;
    }
}

/// Numeric text field, optionally bound to a [`SliderHandle`]
pub struct NumericInput {
    core: Rc<InputCore>,
    style: NumericInputStyle,
}

impl NumericInput {
    /// Standalone field that clamps into `bounds`; starts at `bounds.min()`
    pub fn new(id: impl Into<NodeId>, bounds: SliderBounds) -> Self {
        let value = bounds.min();
        Self::from_state(
            id.into(),
            InputState {
                text: format_number(value),
                bounds,
                value,
                focused: false,
                disabled: false,
                invalid: false,
                dirty: false,
                suppress: false,
                handle: None,
                updater: None,
            },
        )
    }

    /// Field mirroring `handle`: it shows the handle's value and reports edits back to it
    pub fn bound(id: impl Into<NodeId>, handle: &SliderHandle) -> Self {
        let values = handle.values();
        let input = Self::from_state(
            id.into(),
            InputState {
                text: format_number(values.value),
                bounds: values.bounds(),
                value: values.value,
                focused: false,
                disabled: false,
                invalid: false,
                dirty: false,
                suppress: false,
                handle: Some(handle.downgrade()),
                updater: None,
            },
        );

        let weak = Rc::downgrade(&input.core);
        let updater = handle.element_updater(move |values| {
            if let Some(core) = weak.upgrade() {
                core.sync_from_handle(values);
            }
        });
        input.core.state.borrow_mut().updater = Some(updater);
        input
    }

    fn from_state(id: NodeId, state: InputState) -> Self {
        Self {
            core: Rc::new(InputCore {
                id,
                state: RefCell::new(state),
            }),
            style: NumericInputStyle::default(),
        }
    }

    pub fn with_style(mut self, style: NumericInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Initial value for a standalone field, clamped into its bounds
    pub fn with_value(self, value: f64) -> Self {
        {
            let mut state = self.core.state.borrow_mut();
            state.value = state.bounds.clamp(value);
            state.text = format_number(state.value);
            state.invalid = false;
        }
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.core.state.borrow_mut().disabled = disabled;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.core.id
    }

    pub fn text(&self) -> String {
        self.core.state.borrow().text.clone()
    }

    pub fn value(&self) -> f64 {
        self.core.state.borrow().value
    }

    pub fn is_focused(&self) -> bool {
        self.core.state.borrow().focused
    }

    /// Whether the field currently shows [`INVALID_SENTINEL`]
    pub fn is_invalid(&self) -> bool {
        self.core.state.borrow().invalid
    }

    /// Replace the text as a character-level edit would
    ///
    /// Parsable text is reported live (unclamped) to the handle's `input`
    /// subscriber while bound visuals receive the clamped value. Partial text
    /// such as `"-"` or `"1e"` is kept but not propagated.
    pub fn input(&self, text: &str) {
        let parsed = {
            let mut state = self.core.state.borrow_mut();
            state.text = text.to_owned();
            state.invalid = false;
            state.dirty = true;
            let parsed = parse_number(text).map(|raw| (raw, state.bounds.clamp(raw)));
            if let Some((_, clamped)) = parsed {
                state.value = clamped;
            }
            parsed
        };

        if let Some((raw, clamped)) = parsed {
            self.core.propagate(clamped, raw);
        }
    }

    /// Commit the current text, as on Enter or blur
    ///
    /// Returns the committed value. Invalid text shows the sentinel and
    /// commits `0`. Valid text on a bound field is replaced by the
    /// step-aligned value the handle stored.
    pub fn commit(&self) -> f64 {
        let value = {
            let mut state = self.core.state.borrow_mut();
            state.dirty = false;
            match parse_number(&state.text) {
                Some(raw) => {
                    let value = state.bounds.clamp(raw);
                    state.text = format_number(value);
                    state.invalid = false;
                    state.value = value;
                    value
                }
                None => {
                    log::debug!("numeric input {} rejected {:?}", self.core.id, state.text);
                    state.text = INVALID_SENTINEL.to_owned();
                    state.invalid = true;
                    state.value = 0.0;
                    0.0
                }
            }
        };

        self.core.propagate_commit(value)
    }

    /// Process an event targeted at this field
    ///
    /// Characters append and Backspace deletes the last character. Enter and
    /// Blur commit, but only after an edit. Returns `true` if the event was
    /// consumed.
    pub fn handle_event(&self, event: &InteractionEvent) -> bool {
        let (focused, disabled) = {
            let state = self.core.state.borrow();
            (state.focused, state.disabled)
        };
        if disabled {
            return false;
        }

        match event {
            InteractionEvent::Focus => {
                self.core.state.borrow_mut().focused = true;
                true
            }
            InteractionEvent::Blur => {
                self.core.state.borrow_mut().focused = false;
                self.commit_edit();
                true
            }
            InteractionEvent::KeyDown { key, .. } if focused => self.key_down(key),
            _ => false,
        }
    }

    fn key_down(&self, key: &Key) -> bool {
        match key {
            Key::Character(characters) => {
                let mut text = self.text();
                if self.is_invalid() {
                    text.clear();
                }
                text.push_str(characters);
                self.input(&text);
                true
            }
            Key::Named(NamedKey::Backspace) => {
                let mut text = self.text();
                text.pop();
                self.input(&text);
                true
            }
            Key::Named(NamedKey::Enter) => {
                self.commit_edit();
                true
            }
            _ => false,
        }
    }

    fn commit_edit(&self) {
        let dirty = self.core.state.borrow().dirty;
        if dirty {
            self.commit();
        }
    }

    pub fn node(&self) -> Node {
        let state = self.core.state.borrow();
        let style = &self.style;
        let background = if state.focused {
            style.focused_color
        } else {
            style.idle_color
        };
        let text_color = if state.invalid {
            style.invalid_text_color
        } else {
            style.text_color
        };

        Node::new()
            .with_id(self.core.id.clone())
            .with_width(Size::px(style.width))
            .with_height(Size::FitContent)
            .with_padding(style.padding)
            .with_shape(Shape::rounded(background, style.border_radius))
            .with_style(Style::fill(background))
            .with_disabled_style(Style::opacity(0.5))
            .with_disabled(state.disabled)
            .with_focusable(true)
            .with_content(Content::Text(
                TextContent::new(state.text.clone())
                    .with_font_size(style.font_size)
                    .with_color(text_color)
                    .with_h_align(HorizontalAlign::Right),
            ))
    }
}

impl Drop for NumericInput {
    fn drop(&mut self) {
        let (handle, updater) = {
            let mut state = self.core.state.borrow_mut();
            (state.handle.take(), state.updater.take())
        };
        if let (Some(handle), Some(updater)) = (handle.and_then(|h| h.upgrade()), updater) {
            handle.remove_element_updater(updater);
        }
    }
}

impl fmt::Debug for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.core.state.borrow();
        f.debug_struct("NumericInput")
            .field("id", &self.core.id)
            .field("text", &state.text)
            .field("value", &state.value)
            .field("bound", &state.handle.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::HandleInit;
    use std::cell::Cell;

    fn type_text(input: &NumericInput, text: &str) {
        for character in text.chars() {
            input.handle_event(&InteractionEvent::KeyDown {
                key: Key::Character(character.to_string()),
                repeat: false,
            });
        }
    }

    fn focused(input: NumericInput) -> NumericInput {
        input.handle_event(&InteractionEvent::Focus);
        input
    }

    fn handle_0_100() -> SliderHandle {
        let handle = SliderHandle::new();
        handle.init(HandleInit {
            min: Some(0.0),
            max: Some(100.0),
            step: Some(1.0),
            value: Some(0.0),
        });
        handle
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_garbage_commits_sentinel_and_zero() {
        let handle = handle_0_100();
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        handle.callback(CallbackKind::Change, move |value| sink.borrow_mut().push(value));

        let input = focused(NumericInput::bound("amount", &handle));
        input.handle_event(&InteractionEvent::KeyDown {
            key: Key::Named(NamedKey::Backspace),
            repeat: false,
        });
        type_text(&input, "abc");
        input.handle_event(&InteractionEvent::Blur);

        assert_eq!(input.text(), INVALID_SENTINEL);
        assert!(input.is_invalid());
        assert_eq!(*committed.borrow(), vec![0.0]);
        assert_eq!(handle.value(), 0.0);
    }

    #[test]
    fn test_out_of_range_commit_clamps() {
        let handle = handle_0_100();
        let input = focused(NumericInput::bound("amount", &handle));
        input.input("200");
        input.handle_event(&InteractionEvent::Blur);

        assert_eq!(input.text(), "100");
        assert_eq!(input.value(), 100.0);
        assert_eq!(handle.value(), 100.0);
    }

    #[test]
    fn test_live_input_is_unclamped_for_subscriber() {
        let handle = handle_0_100();
        let live = Rc::new(Cell::new(f64::NAN));
        let sink = Rc::clone(&live);
        handle.callback(CallbackKind::Input, move |value| sink.set(value));

        let input = NumericInput::bound("amount", &handle);
        input.input("150");

        assert_eq!(live.get(), 150.0);
        assert_eq!(handle.value(), 100.0);
        // The user's text is left alone until commit
        assert_eq!(input.text(), "150");
    }

    #[test]
    fn test_partial_text_is_not_propagated() {
        let handle = handle_0_100();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        handle.callback(CallbackKind::Input, move |_| counter.set(counter.get() + 1));

        let input = NumericInput::bound("amount", &handle);
        input.input("-");
        assert_eq!(calls.get(), 0);
        assert_eq!(input.text(), "-");
    }

    #[test]
    fn test_handle_updates_rewrite_text() {
        let handle = handle_0_100();
        let input = NumericInput::bound("amount", &handle);
        handle.set_value(42.0);
        assert_eq!(input.text(), "42");
        assert_eq!(input.value(), 42.0);
    }

    #[test]
    fn test_standalone_clamps_with_own_bounds() {
        let input = focused(NumericInput::new("n", SliderBounds::new(-10.0, 10.0, 1.0)));
        input.input("-25");
        input.handle_event(&InteractionEvent::KeyDown {
            key: Key::Named(NamedKey::Enter),
            repeat: false,
        });
        assert_eq!(input.text(), "-10");
    }

    #[test]
    fn test_typing_after_sentinel_starts_fresh() {
        let input = focused(NumericInput::new("n", SliderBounds::default()));
        input.input("x");
        input.commit();
        type_text(&input, "7");
        assert_eq!(input.text(), "7");
    }

    #[test]
    fn test_negative_values_can_be_typed() {
        let input = focused(NumericInput::new("n", SliderBounds::new(-10.0, 10.0, 1.0)));
        for _ in 0..3 {
            input.handle_event(&InteractionEvent::KeyDown {
                key: Key::Named(NamedKey::Backspace),
                repeat: false,
            });
        }
        type_text(&input, "-");
        assert!(!input.is_invalid());
        type_text(&input, "5");
        assert_eq!(input.text(), "-5");

        input.handle_event(&InteractionEvent::KeyDown {
            key: Key::Named(NamedKey::Enter),
            repeat: false,
        });
        assert_eq!(input.value(), -5.0);
        assert_eq!(input.text(), "-5");
    }

    #[test]
    fn test_blur_without_edit_commits_nothing() {
        let handle = handle_0_100();
        handle.set_value(40.0);
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        handle.callback(CallbackKind::Change, move |value| sink.borrow_mut().push(value));

        let input = NumericInput::bound("amount", &handle);
        for _ in 0..3 {
            input.handle_event(&InteractionEvent::Focus);
            input.handle_event(&InteractionEvent::Blur);
        }
        assert!(committed.borrow().is_empty());

        input.handle_event(&InteractionEvent::Focus);
        type_text(&input, "x");
        input.handle_event(&InteractionEvent::Blur);
        assert!(input.is_invalid());
        input.handle_event(&InteractionEvent::Focus);
        input.handle_event(&InteractionEvent::Blur);
        assert_eq!(*committed.borrow(), vec![0.0]);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let input = NumericInput::new("n", SliderBounds::default());
        type_text(&input, "5");
        assert_eq!(input.text(), "0");
    }

    #[test]
    fn test_drop_unregisters_updater() {
        let handle = handle_0_100();
        let input = NumericInput::bound("amount", &handle);
        assert_eq!(handle.updater_count(), 1);
        drop(input);
        assert_eq!(handle.updater_count(), 0);
    }
}
