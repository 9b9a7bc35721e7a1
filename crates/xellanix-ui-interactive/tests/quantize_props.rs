use proptest::prelude::*;
use xellanix_ui_interactive::{quantize, SliderBounds};

fn bounds_strategy() -> impl Strategy<Value = SliderBounds> {
    (-1_000.0f64..1_000.0, 0.0f64..2_000.0, 0.01f64..100.0)
        .prop_map(|(min, span, step)| SliderBounds::new(min, min + span, step))
}

/// Whether `value` sits a whole number of steps above `min`, allowing float noise
fn is_step_aligned(bounds: &SliderBounds, value: f64) -> bool {
    let steps = (value - bounds.min()) / bounds.step();
    (steps - steps.round()).abs() < 1e-6 || value == bounds.max()
}

proptest! {
    #[test]
    fn quantize_is_idempotent(bounds in bounds_strategy(), fraction in 0.0f64..=1.0) {
        let value = bounds.min() + bounds.span() * fraction;
        let once = bounds.quantize(value);
        prop_assert_eq!(bounds.quantize(once), once);
    }

    #[test]
    fn quantize_stays_in_range_and_aligned(bounds in bounds_strategy(), raw in -1e6f64..1e6) {
        let value = bounds.quantize(raw);
        prop_assert!(value >= bounds.min() && value <= bounds.max());
        prop_assert!(is_step_aligned(&bounds, value));
    }

    #[test]
    fn quantize_rounds_to_a_neighbouring_step(bounds in bounds_strategy(), fraction in 0.0f64..=1.0) {
        let raw = bounds.min() + bounds.span() * fraction;
        let value = bounds.quantize(raw);
        prop_assert!((value - raw).abs() <= bounds.step() + 1e-9);
    }

    #[test]
    fn free_function_matches_bounds(min in -100.0f64..100.0, span in 0.0f64..100.0, raw in -500.0f64..500.0) {
        let bounds = SliderBounds::new(min, min + span, 5.0);
        prop_assert_eq!(quantize(raw, min, min + span, 5.0), bounds.quantize(raw));
    }
}
