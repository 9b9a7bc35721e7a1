//! # xellanix-ui-winit
//!
//! winit input backend for xellanix-ui.
//!
//! Feed every `WindowEvent` to an [`InputTranslator`] and route the returned
//! [`InteractionEvent`](xellanix_ui::InteractionEvent)s to the document and
//! to the components under the pointer.

mod input;

pub use input::*;

// Re-export the winit event types hosts need alongside the translator
pub use winit::event::{ElementState, MouseButton, TouchPhase};
