//! Interaction events delivered to components
//!
//! Backends translate their native input into these events; components never
//! see windowing-system types.

use crate::node::NodeId;
use crate::primitives::Point;

/// Device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    /// Touch contact with the given finger id
    Touch(u64),
}

/// Keys with a meaning beyond the character they produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
}

/// A logical key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Named(NamedKey),
    /// Text produced by the key
    Character(String),
}

impl Key {
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Key::Named(
                NamedKey::ArrowLeft | NamedKey::ArrowRight | NamedKey::ArrowUp | NamedKey::ArrowDown
            )
        )
    }
}

/// Type of interaction event
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Mouse button pressed or touch started
    PointerDown { pointer: PointerKind, position: Point },
    /// Pointer moved (mouse motion or touch drag)
    PointerMove { pointer: PointerKind, position: Point },
    /// Mouse button released or touch ended
    PointerUp { pointer: PointerKind, position: Point },
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    /// Node gained focus
    Focus,
    /// Node lost focus
    Blur,
}

impl InteractionEvent {
    /// Window position for pointer events
    pub fn position(&self) -> Option<Point> {
        match self {
            InteractionEvent::PointerDown { position, .. }
            | InteractionEvent::PointerMove { position, .. }
            | InteractionEvent::PointerUp { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        self.position().is_some()
    }
}

/// An interaction event targeted at a specific node
#[derive(Debug, Clone, PartialEq)]
pub struct TargetedEvent {
    pub event: InteractionEvent,
    pub target: NodeId,
}
