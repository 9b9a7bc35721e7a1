//! Translation of winit window events into interaction events
//!
//! winit reports the cursor position and button state separately; the
//! translator remembers the last cursor position so button presses can be
//! turned into positioned pointer events.

use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey as WinitNamedKey};
use xellanix_ui::{InteractionEvent, Key, NamedKey, Point, PointerKind};

/// Map a winit logical key to a component key
///
/// Keys no component reacts to (function keys, modifiers, media keys) map
/// to `None`.
pub fn map_key(key: &WinitKey) -> Option<Key> {
    let named = match key {
        WinitKey::Character(text) => return Some(Key::Character(text.to_string())),
        WinitKey::Named(named) => named,
        _ => return None,
    };

    let named = match named {
        WinitNamedKey::ArrowLeft => NamedKey::ArrowLeft,
        WinitNamedKey::ArrowRight => NamedKey::ArrowRight,
        WinitNamedKey::ArrowUp => NamedKey::ArrowUp,
        WinitNamedKey::ArrowDown => NamedKey::ArrowDown,
        WinitNamedKey::Enter => NamedKey::Enter,
        WinitNamedKey::Escape => NamedKey::Escape,
        WinitNamedKey::Backspace => NamedKey::Backspace,
        WinitNamedKey::Delete => NamedKey::Delete,
        WinitNamedKey::Tab => NamedKey::Tab,
        WinitNamedKey::Space => NamedKey::Space,
        _ => return None,
    };
    Some(Key::Named(named))
}

/// Stateful converter from winit events to [`InteractionEvent`]s
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    /// Current cursor position in window coordinates, if known
    cursor_position: Option<Point>,
    /// Whether the primary mouse button is held down
    primary_down: bool,
    /// Whether Ctrl (or Cmd on macOS) is currently held down
    ctrl_held: bool,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }

    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Process a winit WindowEvent and return the resulting interaction events
    pub fn handle_event(&mut self, event: &WindowEvent) -> Vec<InteractionEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(Point::new(position.x as f32, position.y as f32))]
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                Vec::new()
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*state, *button).into_iter().collect()
            }
            WindowEvent::Touch(touch) => vec![self.touch(
                touch.phase,
                touch.id,
                Point::new(touch.location.x as f32, touch.location.y as f32),
            )],
            WindowEvent::KeyboardInput { event, .. } => self
                .key(&event.logical_key, event.state, event.repeat)
                .into_iter()
                .collect(),
            WindowEvent::Focused(false) => self.focus_lost().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    pub fn cursor_moved(&mut self, position: Point) -> InteractionEvent {
        self.cursor_position = Some(position);
        InteractionEvent::PointerMove {
            pointer: PointerKind::Mouse,
            position,
        }
    }

    /// Forget the cursor position; a drag in progress still ends on release
    pub fn cursor_left(&mut self) {
        self.cursor_position = None;
    }

    /// Primary button presses and releases at the last known cursor position
    pub fn mouse_button(
        &mut self,
        state: ElementState,
        button: MouseButton,
    ) -> Option<InteractionEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                let position = self.cursor_position?;
                self.primary_down = true;
                Some(InteractionEvent::PointerDown {
                    pointer: PointerKind::Mouse,
                    position,
                })
            }
            ElementState::Released => {
                if !std::mem::take(&mut self.primary_down) {
                    return None;
                }
                // Releasing outside the window still has to end a drag
                let position = self.cursor_position.unwrap_or(Point::new(-1.0, -1.0));
                Some(InteractionEvent::PointerUp {
                    pointer: PointerKind::Mouse,
                    position,
                })
            }
        }
    }

    pub fn touch(&mut self, phase: TouchPhase, id: u64, position: Point) -> InteractionEvent {
        let pointer = PointerKind::Touch(id);
        match phase {
            TouchPhase::Started => InteractionEvent::PointerDown { pointer, position },
            TouchPhase::Moved => InteractionEvent::PointerMove { pointer, position },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                InteractionEvent::PointerUp { pointer, position }
            }
        }
    }

    pub fn key(
        &mut self,
        logical_key: &WinitKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InteractionEvent> {
        if matches!(
            logical_key,
            WinitKey::Named(WinitNamedKey::Control | WinitNamedKey::Super)
        ) {
            self.ctrl_held = state == ElementState::Pressed;
            return None;
        }

        let key = map_key(logical_key)?;
        match state {
            ElementState::Pressed => {
                // Ctrl+letter is a shortcut, not text
                let is_shortcut = self.ctrl_held
                    && matches!(&key, Key::Character(text)
                        if text.chars().count() == 1 && text.chars().all(char::is_alphabetic));
                if is_shortcut {
                    return None;
                }
                Some(InteractionEvent::KeyDown { key, repeat })
            }
            ElementState::Released => Some(InteractionEvent::KeyUp { key }),
        }
    }

    /// Losing window focus releases a held primary button
    fn focus_lost(&mut self) -> Option<InteractionEvent> {
        log::trace!("window focus lost, primary down: {}", self.primary_down);
        self.ctrl_held = false;
        self.mouse_button(ElementState::Released, MouseButton::Left)
    }
}
