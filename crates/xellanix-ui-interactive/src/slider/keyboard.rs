//! Arrow-key stepping

use super::quantize::SliderBounds;
use xellanix_ui::{Key, NamedKey};

/// Fraction of the range moved per key press on a continuous slider
const CONTINUOUS_KEY_FRACTION: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStep {
    Decrement,
    Increment,
}

impl KeyStep {
    /// Left/down decrement, right/up increment, anything else is ignored
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::ArrowLeft | NamedKey::ArrowDown) => Some(Self::Decrement),
            Key::Named(NamedKey::ArrowRight | NamedKey::ArrowUp) => Some(Self::Increment),
            _ => None,
        }
    }
}

/// Value after one arrow press, or `None` for non-arrow keys
///
/// The result is clamped and quantized, so pressing against a bound returns
/// the current value unchanged.
pub fn key_step(bounds: &SliderBounds, current: f64, key: &Key) -> Option<f64> {
    let direction = KeyStep::from_key(key)?;
    let amount = if bounds.step() > 0.0 {
        bounds.step()
    } else {
        bounds.span() * CONTINUOUS_KEY_FRACTION
    };

    let raw = match direction {
        KeyStep::Decrement => current - amount,
        KeyStep::Increment => current + amount,
    };
    Some(bounds.quantize(raw))
}
