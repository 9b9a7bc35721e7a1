//! Clamping and step quantization of slider values

/// Slack allowed when comparing step counts and bounds, so values produced by
/// float arithmetic (`0.1 + 2.0 * 0.1`) still land on the intended step.
const EPSILON: f64 = 1e-9;

/// Numeric range and granularity of a slider
///
/// Always satisfies `min <= max`. A `step` of zero means the slider is
/// continuous and values are only clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderBounds {
    /// Build bounds, repairing inconsistent input instead of failing
    ///
    /// Reversed bounds are swapped, non-finite bounds fall back to zero width
    /// and a step that is not a positive finite number disables quantization.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let min = if min.is_finite() {
            min
        } else {
            log::warn!("slider min {} is not finite, using 0", min);
            0.0
        };
        let max = if max.is_finite() {
            max
        } else {
            log::warn!("slider max {} is not finite, using min {}", max, min);
            min
        };
        let (min, max) = if min <= max {
            (min, max)
        } else {
            log::warn!("slider bounds reversed ({} > {}), swapping", min, max);
            (max, min)
        };
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            log::warn!("slider step {} is not positive, slider is continuous", step);
            0.0
        };

        Self { min, max, step }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size, zero for a continuous slider
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp into `[min, max]` without snapping to a step; NaN maps to `min`
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            self.min
        } else {
            raw.clamp(self.min, self.max)
        }
    }

    /// Nearest step-aligned value inside the bounds
    ///
    /// The raw value is clamped first, then rounded to the nearest multiple of
    /// `step` counted from `min`. Exact ties round down. When `max` is not
    /// step-aligned and rounding would overshoot it, the previous step is used.
    pub fn quantize(&self, raw: f64) -> f64 {
        let clamped = self.clamp(raw);
        if self.step == 0.0 {
            return clamped;
        }

        let steps = (clamped - self.min) / self.step;
        let lower = steps.floor();
        let mut count = if steps - lower > 0.5 + EPSILON {
            lower + 1.0
        } else {
            lower
        };

        let mut value = self.min + count * self.step;
        if value > self.max + self.step * EPSILON {
            count -= 1.0;
            value = self.min + count * self.step;
        } else if value > self.max {
            value = self.max;
        }
        value
    }

    /// Position of `value` along the range, 0.0 at `min` and 1.0 at `max`
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Raw (unquantized) value for a thumb offset along a track of `travel` pixels
    pub fn value_at(&self, offset: f64, travel: f64) -> f64 {
        if travel <= 0.0 {
            return self.min;
        }
        let offset = offset.clamp(0.0, travel);
        self.min + offset * self.span() / travel
    }

    /// Thumb offset in pixels for `value` along a track of `travel` pixels
    pub fn offset_of(&self, value: f64, travel: f64) -> f64 {
        self.fraction(value) * travel.max(0.0)
    }
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

/// Free-function form of [`SliderBounds::quantize`]
pub fn quantize(raw: f64, min: f64, max: f64, step: f64) -> f64 {
    SliderBounds::new(min, max, step).quantize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_nearest_step() {
        let bounds = SliderBounds::new(0.0, 100.0, 10.0);
        assert_eq!(bounds.quantize(54.0), 50.0);
        assert_eq!(bounds.quantize(56.0), 60.0);
        assert_eq!(bounds.quantize(4.9), 0.0);
    }

    #[test]
    fn test_ties_round_down() {
        let bounds = SliderBounds::new(0.0, 100.0, 10.0);
        assert_eq!(bounds.quantize(55.0), 50.0);
        assert_eq!(bounds.quantize(5.0), 0.0);
    }

    #[test]
    fn test_clamps_before_quantizing() {
        let bounds = SliderBounds::new(0.0, 100.0, 10.0);
        assert_eq!(bounds.quantize(-30.0), 0.0);
        assert_eq!(bounds.quantize(1e9), 100.0);
        assert_eq!(bounds.quantize(f64::INFINITY), 100.0);
        assert_eq!(bounds.quantize(f64::NEG_INFINITY), 0.0);
        assert_eq!(bounds.quantize(f64::NAN), 0.0);
    }

    #[test]
    fn test_steps_are_counted_from_min() {
        let bounds = SliderBounds::new(3.0, 23.0, 5.0);
        assert_eq!(bounds.quantize(9.0), 8.0);
        assert_eq!(bounds.quantize(11.0), 13.0);
    }

    #[test]
    fn test_unaligned_max_steps_back() {
        let bounds = SliderBounds::new(0.0, 95.0, 10.0);
        assert_eq!(bounds.quantize(95.0), 90.0);
        assert_eq!(bounds.quantize(200.0), 90.0);

        let bounds = SliderBounds::new(0.0, 96.0, 10.0);
        assert_eq!(bounds.quantize(96.0), 90.0);
    }

    #[test]
    fn test_float_noise_at_max() {
        let bounds = SliderBounds::new(0.1, 0.3, 0.1);
        assert_eq!(bounds.quantize(0.3), 0.3);
        assert_eq!(bounds.quantize(bounds.quantize(0.3)), 0.3);
    }

    #[test]
    fn test_sanitizes_bounds() {
        let bounds = SliderBounds::new(10.0, 0.0, -1.0);
        assert_eq!(bounds.min(), 0.0);
        assert_eq!(bounds.max(), 10.0);
        assert_eq!(bounds.step(), 0.0);
        // Continuous slider only clamps
        assert_eq!(bounds.quantize(3.3), 3.3);
    }

    #[test]
    fn test_geometry_round_trip() {
        let bounds = SliderBounds::new(0.0, 100.0, 10.0);
        assert_eq!(bounds.value_at(55.0, 100.0), 55.0);
        assert_eq!(bounds.value_at(-20.0, 100.0), 0.0);
        assert_eq!(bounds.value_at(250.0, 100.0), 100.0);
        assert_eq!(bounds.offset_of(50.0, 200.0), 100.0);
        assert_eq!(bounds.value_at(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_width_range() {
        let bounds = SliderBounds::new(5.0, 5.0, 1.0);
        assert_eq!(bounds.quantize(100.0), 5.0);
        assert_eq!(bounds.fraction(5.0), 0.0);
    }
}
