//! # xellanix-ui
//!
//! Graphics backend agnostic UI core.
//!
//! This crate provides the node tree that components render into, the style and
//! color primitives, the interaction event model and the [`Document`] that owns
//! document-level listeners. Input comes from backend crates like
//! `xellanix-ui-winit`, components live in `xellanix-ui-interactive`.

mod color;
mod content;
mod document;
mod events;
mod layout;
mod node;
mod primitives;
mod style;

pub use color::*;
pub use content::*;
pub use document::*;
pub use events::*;
pub use layout::*;
pub use node::*;
pub use primitives::*;
pub use style::*;
