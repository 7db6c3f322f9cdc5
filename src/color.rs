//! Color parsing, formatting, and inversion.
//!
//! Hex colors are 6 hex digits with an optional leading `#`, case-insensitive.
//! Parsing is deliberately lenient: a malformed color string falls back to
//! pure black instead of failing, so a bad `--foreground-color` argument can
//! never abort QR generation.

/// An opaque RGB color. Alpha is decided later by the recoloring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses a `#rrggbb` string into a color.
    ///
    /// Returns black when the input is not exactly 6 hex digits after an
    /// optional `#`. This fallback is part of the contract, not an error
    /// path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrtint::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#1A2b3C"), Rgb::new(0x1a, 0x2b, 0x3c));
    /// assert_eq!(Rgb::from_hex("not a color"), Rgb::BLACK);
    /// ```
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Rgb::BLACK;
        }
        // Length and digit checks above make these parses infallible.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };
        Rgb {
            r: channel(0..2),
            g: channel(2..4),
            b: channel(4..6),
        }
    }

    /// Formats the color as `#rrggbb`, lowercase, zero-padded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel complement: `(255-r, 255-g, 255-b)`.
    ///
    /// Involution: `c.invert().invert() == c`.
    pub const fn invert(self) -> Self {
        Rgb {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Squared Euclidean distance to raw RGB channel values.
    ///
    /// Squared form is monotone with the true distance, so comparisons
    /// (including exact ties) behave identically without the sqrt.
    pub fn distance_sq(self, r: u8, g: u8, b: u8) -> u32 {
        let d = |a: u8, b: u8| {
            let d = a as i32 - b as i32;
            (d * d) as u32
        };
        d(self.r, r) + d(self.g, g) + d(self.b, b)
    }
}

/// Inverts a hex color string, returning `#rrggbb` form.
///
/// Used by the style resolver to pick a maximally distinct background for
/// transparent rendering: `invert_hex("#000000") == "#ffffff"`.
pub fn invert_hex(hex: &str) -> String {
    Rgb::from_hex(hex).invert().to_hex()
}
