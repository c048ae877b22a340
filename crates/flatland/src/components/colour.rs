/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const SILVER: Rgb = Rgb::new(192, 192, 192);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const MAROON: Rgb = Rgb::new(128, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const OLIVE: Rgb = Rgb::new(128, 128, 0);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const AQUA: Rgb = Rgb::new(0, 255, 255);
    pub const TEAL: Rgb = Rgb::new(0, 128, 128);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const NAVY: Rgb = Rgb::new(0, 0, 128);
    pub const FUCHSIA: Rgb = Rgb::new(255, 0, 255);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#RRGGBB`, upper case.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string with the given alpha.
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        assert_eq!(Rgb::from_hex("#8ACF17"), Some(Rgb::new(0x8A, 0xCF, 0x17)));
        assert_eq!(Rgb::from_hex("c0c0c0"), Some(Rgb::SILVER));
        assert_eq!(Rgb::PURPLE.to_hex(), "#800080");
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn css_rgba() {
        assert_eq!(Rgb::RED.to_css_rgba(0.5), "rgba(255, 0, 0, 0.5)");
        assert_eq!(Rgb::WHITE.to_css_rgba(1.0), "rgba(255, 255, 255, 1)");
    }
}
