//! The card color system.
//!
//! A single user-chosen color drives everything else on the card. The chosen
//! value resolves into a tagged [`Background`], and each derived color (text,
//! pastel, pattern, picture border) is its own small lookup over that tag.
//! The rules are fixed tables rather than general contrast math, so arbitrary
//! custom hex input still produces a plausible, legible card.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Brand purple, the default card background.
pub const BRAND_PURPLE: Rgb = Rgb::new(0x6B, 0x5B, 0xFF);
/// Deep purple used for text on white cards.
pub const TEXT_PURPLE: Rgb = Rgb::new(0x56, 0x3A, 0xFE);
/// Deep purple used for line patterns on white cards.
pub const PATTERN_PURPLE: Rgb = Rgb::new(0x57, 0x3B, 0xFF);
/// Border purple around the profile picture on white cards.
pub const PFP_BORDER_PURPLE: Rgb = Rgb::new(0x5A, 0x2D, 0xB3);
/// Fixed pastel lavender used on white and brand-purple cards.
pub const PASTEL_LAVENDER: Rgb = Rgb::new(0xF4, 0xDF, 0xF8);
/// Pure white.
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Amount added to each channel when tinting a custom background into its
/// pastel. Existing cards depend on this exact arithmetic; do not replace it
/// with a perceptual lightening.
const PASTEL_LIFT: u8 = 150;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strict `#RRGGBB` parse. Shorthand forms and stray characters are
    /// rejected so callers can fall back deliberately.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let bytes = hex::decode(digits).ok()?;
        Some(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Upper-case `#RRGGBB` form used throughout the composed document.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Resolved card background, tagged so each derivation rule stays a small
/// independent lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    White,
    Purple,
    Custom(Rgb),
}

impl Background {
    /// Resolve the submitted `card_color` string. Total over all inputs:
    ///
    /// - `#RRGGBB` values are used verbatim, with pure white and the brand
    ///   purple folding into their named variants;
    /// - `"white"` maps to [`Background::White`];
    /// - everything else, including `"purple"`, malformed hex, and arbitrary
    ///   garbage, falls back to the brand purple.
    pub fn resolve(card_color: &str) -> Self {
        if card_color.starts_with('#') {
            return match Rgb::parse_hex(card_color) {
                Some(rgb) if rgb == WHITE => Background::White,
                Some(rgb) if rgb == BRAND_PURPLE => Background::Purple,
                Some(rgb) => Background::Custom(rgb),
                None => {
                    log::warn!("unparseable card color {card_color:?}, using brand purple");
                    Background::Purple
                }
            };
        }
        match card_color {
            "white" => Background::White,
            "purple" => Background::Purple,
            other => {
                if !other.is_empty() {
                    log::warn!("unrecognized card color token {other:?}, using brand purple");
                }
                Background::Purple
            }
        }
    }

    /// The background fill itself.
    pub fn color(self) -> Rgb {
        match self {
            Background::White => WHITE,
            Background::Purple => BRAND_PURPLE,
            Background::Custom(rgb) => rgb,
        }
    }

    /// Text color. A fixed two-color contrast system: deep purple on white,
    /// white on everything else.
    pub fn text_color(self) -> Rgb {
        match self {
            Background::White => TEXT_PURPLE,
            _ => WHITE,
        }
    }

    /// Pastel tint used by fill decorations. White and brand-purple cards get
    /// the fixed lavender; custom backgrounds are lifted per channel by
    /// `min(255, c + 150)`.
    pub fn pastel(self) -> Rgb {
        match self {
            Background::White | Background::Purple => PASTEL_LAVENDER,
            Background::Custom(rgb) => Rgb::new(
                rgb.r.saturating_add(PASTEL_LIFT),
                rgb.g.saturating_add(PASTEL_LIFT),
                rgb.b.saturating_add(PASTEL_LIFT),
            ),
        }
    }

    /// Color for line and stroke decorations. On white cards this is a deep
    /// purple so the patterns stay visible; elsewhere it is the pastel.
    pub fn pattern_color(self) -> Rgb {
        match self {
            Background::White => PATTERN_PURPLE,
            _ => self.pastel(),
        }
    }

    /// Profile picture border. A separate table from `text_color` even though
    /// the two coincide on the white case today.
    pub fn pfp_border_color(self) -> Rgb {
        match self {
            Background::White => PFP_BORDER_PURPLE,
            _ => WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_strict() {
        assert_eq!(Rgb::parse_hex("#112233"), Some(Rgb::new(0x11, 0x22, 0x33)));
        assert_eq!(Rgb::parse_hex("#FFffFF"), Some(WHITE));
        assert_eq!(Rgb::parse_hex("112233"), None);
        assert_eq!(Rgb::parse_hex("#123"), None);
        assert_eq!(Rgb::parse_hex("#11223G"), None);
        assert_eq!(Rgb::parse_hex("#1122334"), None);
    }

    #[test]
    fn resolve_named_tokens() {
        assert_eq!(Background::resolve("white"), Background::White);
        assert_eq!(Background::resolve("purple"), Background::Purple);
    }

    #[test]
    fn resolve_hex_verbatim() {
        assert_eq!(
            Background::resolve("#112233"),
            Background::Custom(Rgb::new(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn resolve_folds_named_values() {
        // Classification is by resolved value, not raw string.
        assert_eq!(Background::resolve("#FFFFFF"), Background::White);
        assert_eq!(Background::resolve("#ffffff"), Background::White);
        assert_eq!(Background::resolve("#6B5BFF"), Background::Purple);
    }

    #[test]
    fn resolve_is_total() {
        for garbage in ["", "mauve", "#", "#xyzxyz", "#12", "rgb(1,2,3)", "WHITE"] {
            let bg = Background::resolve(garbage);
            assert!(
                matches!(bg, Background::White | Background::Purple | Background::Custom(_)),
                "{garbage:?} resolved to {bg:?}"
            );
        }
        // Anything unrecognized lands on the brand purple.
        assert_eq!(Background::resolve("mauve"), Background::Purple);
        assert_eq!(Background::resolve("#nothex"), Background::Purple);
    }

    #[test]
    fn text_color_two_state() {
        assert_eq!(Background::White.text_color(), TEXT_PURPLE);
        assert_eq!(Background::Purple.text_color(), WHITE);
        assert_eq!(
            Background::Custom(Rgb::new(1, 2, 3)).text_color(),
            WHITE
        );
        // Idempotent under repeated calls.
        let bg = Background::White;
        assert_eq!(bg.text_color(), bg.text_color());
    }

    #[test]
    fn pastel_additive_formula() {
        let black = Background::Custom(Rgb::new(0, 0, 0));
        assert_eq!(black.pastel(), Rgb::new(150, 150, 150));

        let dark_blue = Background::Custom(Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(dark_blue.pastel(), Rgb::new(167, 184, 201));

        // Channels saturate at 255 rather than wrapping.
        let near_white = Background::Custom(Rgb::new(254, 200, 106));
        assert_eq!(near_white.pastel(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn pastel_fixed_for_named_backgrounds() {
        assert_eq!(Background::White.pastel(), PASTEL_LAVENDER);
        assert_eq!(Background::Purple.pastel(), PASTEL_LAVENDER);
    }

    #[test]
    fn pattern_color_visible_on_white() {
        assert_eq!(Background::White.pattern_color(), PATTERN_PURPLE);
        let custom = Background::Custom(Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(custom.pattern_color(), custom.pastel());
    }

    #[test]
    fn pfp_border_lookup() {
        assert_eq!(Background::White.pfp_border_color(), PFP_BORDER_PURPLE);
        assert_eq!(Background::Purple.pfp_border_color(), WHITE);
    }

    #[test]
    fn hex_display_upper_case() {
        assert_eq!(Rgb::new(167, 184, 201).to_hex(), "#A7B8C9");
        assert_eq!(format!("{}", BRAND_PURPLE), "#6B5BFF");
    }
}
