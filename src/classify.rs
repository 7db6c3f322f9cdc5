//! Per-pixel module/background classification.
//!
//! The baseline raster is drawn with exactly two flat colors, so a pixel
//! belongs to whichever reference color it is nearest to. Nearest-color
//! assignment also stays correct for rasters that picked up anti-aliasing
//! or resizing artifacts along module edges.

use crate::color::Rgb;

/// Binary label for one pixel of the rendered raster. Transient: computed
/// during the sweep and consumed immediately by the recolorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Part of a dark module.
    Foreground,
    /// Part of the background or quiet zone.
    Background,
}

/// Labels one pixel against the two reference colors. Alpha is ignored on
/// input.
///
/// The comparison is strict, so an exact tie labels the pixel background.
/// The degenerate case `foreground == background` therefore classifies the
/// whole raster as background; such styling carries no visual signal and
/// producing a uniform output for it is intended behavior.
pub fn classify(r: u8, g: u8, b: u8, foreground: Rgb, background: Rgb) -> PixelClass {
    if foreground.distance_sq(r, g, b) < background.distance_sq(r, g, b) {
        PixelClass::Foreground
    } else {
        PixelClass::Background
    }
}
