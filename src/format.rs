//! Text representations of a [`Color`]: HEX, RGB and HSL.

use std::{fmt, str::FromStr};

use crate::{color::Color, error::ParseError, math::round_to_u16};

/// One of the text representations a color can be copied as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `#RRGGBB`, uppercase.
    Hex,
    /// `R, G, B` in decimal.
    Rgb,
    /// `H, S%, L%` with integer degrees and percentages.
    Hsl,
}

impl Representation {
    /// All representations in display order.
    pub const ALL: [Representation; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// The label shown next to the value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        })
    }
}

impl FromStr for Representation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(ParseError::UnknownRepresentation(s.to_string())),
        }
    }
}

impl Color {
    /// Format as `#RRGGBB` with uppercase, zero padded digits. Always 7
    /// characters long.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Format as `#RRGGBBAA`. Used to derive translucent washes of the color.
    pub fn to_hex_with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02X}", self.to_hex(), alpha)
    }

    /// Format as `R, G, B` in decimal without padding.
    pub fn to_rgb_string(&self) -> String {
        format!("{}, {}, {}", self.red, self.green, self.blue)
    }

    /// The HSL notation rounded to integer degrees and percentages. Hue is
    /// kept in `[0, 360)`, so a hue that rounds up to 360 wraps to 0.
    pub fn to_hsl_rounded(&self) -> (u16, u16, u16) {
        let (hue, saturation, lightness) = self.to_hsl_unrounded();
        (
            round_to_u16(hue) % 360,
            round_to_u16(saturation * 100.0),
            round_to_u16(lightness * 100.0),
        )
    }

    /// Format as `H, S%, L%`.
    pub fn to_hsl_string(&self) -> String {
        let (hue, saturation, lightness) = self.to_hsl_rounded();
        format!("{hue}, {saturation}%, {lightness}%")
    }

    /// Format in the given representation.
    pub fn format(&self, representation: Representation) -> String {
        match representation {
            Representation::Hex => self.to_hex(),
            Representation::Rgb => self.to_rgb_string(),
            Representation::Hsl => self.to_hsl_string(),
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidDigit(hex.to_string()));
        }
        if digits.len() != 6 {
            return Err(ParseError::InvalidLength(digits.len()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseError::InvalidDigit(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn hex_of_known_colors() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(255, 255, 255).to_hex(), "#FFFFFF");
        assert_eq!(Color::new(108, 92, 231).to_hex(), "#6C5CE7");
        assert_eq!(Color::new(1, 16, 171).to_hex(), "#0110AB");
    }

    #[test]
    fn hex_shape_holds_for_every_channel_value() {
        for v in 0..=255u8 {
            for c in [Color::new(v, 0, 0), Color::new(0, v, 0), Color::new(v, v, 255 - v)] {
                let hex = c.to_hex();
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
                assert!(hex[1..]
                    .chars()
                    .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)));
            }
        }
    }

    #[test]
    fn hex_round_trip_is_stable() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1_000 {
            let c = Color::random(&mut rng);
            let hex = c.to_hex();
            assert_eq!(Color::from_hex(&hex).map(|c| c.to_hex()), Ok(hex));
        }
    }

    #[test]
    fn hex_with_alpha() {
        let c = Color::new(108, 92, 231);
        assert_eq!(c.to_hex_with_alpha(0x22), "#6C5CE722");
        assert_eq!(c.to_hex_with_alpha(0), "#6C5CE700");
    }

    #[test]
    fn parse_hex() {
        assert_eq!(Color::from_hex("#6c5ce7"), Ok(Color::new(108, 92, 231)));
        assert_eq!("6C5CE7".parse::<Color>(), Ok(Color::new(108, 92, 231)));
        assert_eq!(Color::from_hex("#FFF"), Err(ParseError::InvalidLength(3)));
        assert_eq!(Color::from_hex(""), Err(ParseError::InvalidLength(0)));
        assert_eq!(
            Color::from_hex("#GG0000"),
            Err(ParseError::InvalidDigit("#GG0000".to_string()))
        );
        assert!(matches!(
            Color::from_hex("+12345"),
            Err(ParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("ééé"),
            Err(ParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn rgb_string() {
        assert_eq!(Color::new(108, 92, 231).to_rgb_string(), "108, 92, 231");
        assert_eq!(Color::new(0, 0, 0).to_rgb_string(), "0, 0, 0");
    }

    #[test]
    fn hsl_string() {
        assert_eq!(Color::new(128, 128, 128).to_hsl_string(), "0, 0%, 50%");
        assert_eq!(Color::new(255, 0, 0).to_hsl_string(), "0, 100%, 50%");
        assert_eq!(Color::new(0, 0, 0).to_hsl_string(), "0, 0%, 0%");
        assert_eq!(Color::new(255, 255, 255).to_hsl_string(), "0, 0%, 100%");
        assert_eq!(Color::new(108, 92, 231).to_hsl_string(), "247, 74%, 63%");
        assert_eq!(Color::new(210, 105, 30).to_hsl_string(), "25, 75%, 47%");
    }

    #[test]
    fn hue_rounding_up_to_a_full_turn_wraps() {
        // Raw hue is ~359.76 degrees.
        assert_eq!(Color::new(255, 0, 1).to_hsl_rounded().0, 0);
    }

    /// Straight line evaluation of the HSL notation, rounding half up.
    fn reference_hsl(color: &Color) -> String {
        let [r, g, b] = color.channels().map(|c| f64::from(c) / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (mut h, mut s) = (0.0, 0.0);
        if max != min {
            let d = max - min;
            s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }
        let round = |v: f64| (v + 0.5).floor() as u32;
        format!("{}, {}%, {}%", round(h * 360.0) % 360, round(s * 100.0), round(l * 100.0))
    }

    #[test]
    fn hsl_rounding_boundaries() {
        // Saturation exactly 87.5%.
        assert_eq!(Color::new(1, 1, 15).to_hsl_string(), "240, 88%, 3%");
        // Hues landing on a half degree.
        assert_eq!(Color::new(0, 13, 40).to_hsl_string(), "220, 100%, 8%");
        assert_eq!(Color::new(0, 24, 19).to_hsl_string(), "167, 100%, 5%");
    }

    #[test]
    fn hsl_matches_reference_on_a_grid() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(7) {
                for b in 0..=255u8 {
                    let c = Color::new(r, g, b);
                    assert_eq!(c.to_hsl_string(), reference_hsl(&c), "{c:?}");
                }
            }
        }
        for c in [Color::new(1, 1, 15), Color::new(0, 13, 40), Color::new(0, 24, 19)] {
            assert_eq!(c.to_hsl_string(), reference_hsl(&c));
        }
    }

    #[test]
    fn hsl_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1_000 {
            let (h, s, l) = Color::random(&mut rng).to_hsl_rounded();
            assert!(h < 360);
            assert!(s <= 100);
            assert!(l <= 100);
        }
    }

    #[test]
    fn format_dispatches_on_representation() {
        let c = Color::new(108, 92, 231);
        assert_eq!(c.format(Representation::Hex), "#6C5CE7");
        assert_eq!(c.format(Representation::Rgb), "108, 92, 231");
        assert_eq!(c.format(Representation::Hsl), "247, 74%, 63%");
        assert_eq!(c.to_string(), "#6C5CE7");
    }

    #[test]
    fn parse_representation() {
        assert_eq!("HEX".parse::<Representation>(), Ok(Representation::Hex));
        assert_eq!("rgb".parse::<Representation>(), Ok(Representation::Rgb));
        assert_eq!("Hsl".parse::<Representation>(), Ok(Representation::Hsl));
        assert!("cmyk".parse::<Representation>().is_err());
        for r in Representation::ALL {
            assert_eq!(r.to_string().parse::<Representation>(), Ok(r));
        }
    }
}
