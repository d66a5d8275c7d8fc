/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Invariant:
/// - `r`, `g`, `b` are *not* multiplied by `a`. Hex literals, style properties
///   and gradient stops all carry straight alpha; conversion to premultiplied
///   form happens once, at GPU upload time, via [`to_premul`](Self::to_premul).
///
/// Values are treated as immutable: every adjustment returns a new `Color`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    ///
    /// Each channel is divided by `255.0`, matching what hex literals decode to.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Returns the same color with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Returns premultiplied `[r, g, b, a]`, the layout GPU blending expects.
    #[inline]
    pub fn to_premul(self) -> [f32; 4] {
        let c = self.clamped();
        [c.r * c.a, c.g * c.a, c.b * c.a, c.a]
    }

    /// Quantizes back to bytes, rounding to nearest.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Formats the color as an uppercase `#RRGGBBAA` literal.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_scale_by_255() {
        let c = Color::from_srgb_u8(255, 0, 51, 102);
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.2, 0.4));
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::white().with_alpha(0.2);
        assert_eq!(c, Color::rgba(1.0, 1.0, 1.0, 0.2));
    }

    #[test]
    fn premul_multiplies_rgb_by_alpha() {
        let p = Color::rgba(1.0, 0.5, 0.0, 0.5).to_premul();
        assert_eq!(p, [0.5, 0.25, 0.0, 0.5]);
    }

    #[test]
    fn to_hex_is_uppercase_rgba() {
        assert_eq!(Color::from_srgb_u8(0xab, 0x01, 0xff, 0x80).to_hex(), "#AB01FF80");
        assert_eq!(Color::transparent().to_hex(), "#00000000");
    }
}
