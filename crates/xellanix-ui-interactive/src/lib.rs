//! # xellanix-ui-interactive
//!
//! Interactive UI components built on xellanix-ui.
//!
//! The centerpiece is the [`Slider`], which keeps pointer, keyboard and
//! host-driven updates consistent through a shared [`SliderHandle`]. A
//! [`NumericInput`] can be bound to the same handle to edit the value as
//! text. The remaining components ([`ToggleSwitch`], [`info_box`],
//! [`PopupProvider`], [`Button`]) are small state holders around a node
//! builder.

mod button;
mod info_box;
mod numeric_input;
mod popup;
mod slider;
mod toggle;

pub use button::*;
pub use info_box::*;
pub use numeric_input::*;
pub use popup::*;
pub use slider::*;
pub use toggle::*;
