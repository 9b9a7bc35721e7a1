/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert an sRGB color (0-255) to linear space
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial fit of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl From<&catppuccin::Color> for Color {
    fn from(color: &catppuccin::Color) -> Self {
        Self::from_srgba(color.rgb.r, color.rgb.g, color.rgb.b, 255)
    }
}

/// Semantic colors used by the component defaults
///
/// Built from one catppuccin flavor. Components only ever read roles from here,
/// so switching flavor is a matter of building a different palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay0: Color,
    pub text: Color,
    pub subtext0: Color,
    /// Accent used for filled tracks and active toggles
    pub accent: Color,
    pub info: Color,
    pub warning: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn from_flavor(flavor: &catppuccin::Flavor) -> Self {
        let colors = &flavor.colors;
        Self {
            base: (&colors.base).into(),
            mantle: (&colors.mantle).into(),
            crust: (&colors.crust).into(),
            surface0: (&colors.surface0).into(),
            surface1: (&colors.surface1).into(),
            overlay0: (&colors.overlay0).into(),
            text: (&colors.text).into(),
            subtext0: (&colors.subtext0).into(),
            accent: (&colors.lavender).into(),
            info: (&colors.blue).into(),
            warning: (&colors.yellow).into(),
            success: (&colors.green).into(),
            error: (&colors.red).into(),
        }
    }

    /// Dark palette, the default for every component style
    pub fn mocha() -> Self {
        Self::from_flavor(&catppuccin::PALETTE.mocha)
    }

    pub fn latte() -> Self {
        Self::from_flavor(&catppuccin::PALETTE.latte)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::mocha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(Color::from_srgba(0, 0, 0, 255), Color::rgb(0.0, 0.0, 0.0));
        let white = Color::from_srgba(255, 255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn test_palettes_differ() {
        let mocha = Palette::mocha();
        let latte = Palette::latte();
        assert_ne!(mocha.base, latte.base);
        // Mocha is the dark flavor
        assert!(mocha.base.r < latte.base.r);
    }
}
