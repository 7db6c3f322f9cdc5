//! Styling options and background resolution.
//!
//! [`StyleOptions`] is built once from CLI or interactive input and read-only
//! afterwards; every stage of the pipeline borrows it.

use clap::ValueEnum;

use crate::color::Rgb;

/// QR error correction level, trading capacity for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl EcLevel {
    /// Parses the single-letter form used on the command line.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::Low),
            "M" => Ok(EcLevel::Medium),
            "Q" => Ok(EcLevel::Quartile),
            "H" => Ok(EcLevel::High),
            _ => Err(format!("unknown error correction level '{s}', expected L, M, Q, or H")),
        }
    }

}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(ec: EcLevel) -> Self {
        match ec {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }
}

/// Shape drawn for each dark module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModuleShape {
    #[default]
    Square,
    /// Dark modules are masked to the circle inscribed in their cell.
    Circle,
}

/// Immutable per-request styling configuration.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Color of dark modules.
    pub foreground: Rgb,
    /// Nominal background color; ignored for rendering when `transparent`.
    pub background: Rgb,
    /// Replace the background with fully transparent pixels.
    pub transparent: bool,
    pub shape: ModuleShape,
    /// Requested output edge length in pixels. Actual dimensions are rounded
    /// down to a whole number of pixels per module.
    pub size: u32,
    /// Quiet zone width in modules.
    pub margin: u32,
    pub ec_level: EcLevel,
    /// Fixed QR version 1..=40, or `None` to pick the smallest that fits.
    pub version: Option<u8>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            transparent: false,
            shape: ModuleShape::Square,
            size: 300,
            margin: 4,
            ec_level: EcLevel::Medium,
            version: None,
        }
    }
}

impl StyleOptions {
    /// The background color the renderer actually draws, and the reference
    /// color the classifier later treats as background.
    ///
    /// In transparent mode the foreground's complement is used so the two
    /// flat colors are far apart in RGB space and pixel classification is
    /// unambiguous. Inversion is a simple deterministic heuristic, not a
    /// contrast-maximizing search; it is weakest near mid-gray foregrounds.
    pub fn resolved_background(&self) -> Rgb {
        if self.transparent {
            self.foreground.invert()
        } else {
            self.background
        }
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ec_level_parse() {
        assert_eq!(EcLevel::parse("q").unwrap(), EcLevel::Quartile);
        assert_eq!(EcLevel::parse("M").unwrap(), EcLevel::Medium);
        assert!(EcLevel::parse("X").is_err());
    }

    #[test]
    fn test_resolved_background_opaque() {
        let opts = StyleOptions {
            background: Rgb::new(10, 20, 30),
            ..Default::default()
        };
        assert_eq!(opts.resolved_background(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_resolved_background_transparent_inverts_foreground() {
        let opts = StyleOptions {
            foreground: Rgb::BLACK,
            transparent: true,
            ..Default::default()
        };
        assert_eq!(opts.resolved_background(), Rgb::WHITE);

        let opts = StyleOptions {
            foreground: Rgb::new(0, 0, 255),
            transparent: true,
            ..Default::default()
        };
        assert_eq!(opts.resolved_background(), Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_defaults_match_cli_contract() {
        let opts = StyleOptions::default();
        assert_eq!(opts.foreground, Rgb::BLACK);
        assert_eq!(opts.background, Rgb::WHITE);
        assert!(!opts.transparent);
        assert_eq!(opts.size, 300);
        assert_eq!(opts.margin, 4);
        assert_eq!(opts.ec_level, EcLevel::Medium);
        assert_eq!(opts.version, None);
    }
}
