//! Classification-driven recoloring of a rendered raster.
//!
//! Every pixel is labeled by [`crate::classify`] against the foreground and
//! the resolved background reference colors, then rewritten:
//!
//! 1. foreground → requested foreground color, fully opaque (always);
//! 2. background, transparent mode → `(0, 0, 0, 0)`;
//! 3. background, opaque mode → requested background color, alpha 255.
//!
//! The circle module shape is a masking pass layered on top: foreground
//! pixels outside their module cell's inscribed circle get the background
//! treatment instead.

use image::{Rgba, RgbaImage};
use log::warn;

use crate::classify::{classify, PixelClass};
use crate::render::{self, GridGeometry};
use crate::style::{ModuleShape, StyleOptions};

/// Applies the requested style to PNG bytes of a baseline raster.
///
/// Never fails: if decoding, recoloring, or re-encoding goes wrong the
/// original bytes are returned unchanged and a warning is logged. A valid
/// base image was already produced at this point; losing it to a styling
/// post-process error would punish the caller for a cosmetic step.
pub fn apply_style(png: &[u8], opts: &StyleOptions, geometry: GridGeometry) -> Vec<u8> {
    match restyle_png(png, opts, geometry) {
        Ok(styled) => styled,
        Err(err) => {
            warn!("styling failed, keeping unstyled image: {err}");
            png.to_vec()
        }
    }
}

fn restyle_png(
    png: &[u8],
    opts: &StyleOptions,
    geometry: GridGeometry,
) -> Result<Vec<u8>, image::ImageError> {
    let mut image = image::load_from_memory(png)?.to_rgba8();
    restyle_pixels(&mut image, opts, geometry);
    render::png_bytes(&image)
}

/// Classifies and rewrites every pixel of `image` in place.
///
/// Classification uses the resolved background as its reference, but rule 3
/// writes the caller's nominal background color; the two differ exactly when
/// transparency is active, in which case rule 2 applies instead.
pub fn restyle_pixels(image: &mut RgbaImage, opts: &StyleOptions, geometry: GridGeometry) {
    let fg_ref = opts.foreground;
    let bg_ref = opts.resolved_background();
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let mut class = classify(r, g, b, fg_ref, bg_ref);
        if class == PixelClass::Foreground
            && opts.shape == ModuleShape::Circle
            && outside_inscribed_circle(x, y, geometry)
        {
            class = PixelClass::Background;
        }
        *pixel = match class {
            PixelClass::Foreground => {
                Rgba([opts.foreground.r, opts.foreground.g, opts.foreground.b, 255])
            }
            PixelClass::Background if opts.transparent => Rgba([0, 0, 0, 0]),
            PixelClass::Background => {
                Rgba([opts.background.r, opts.background.g, opts.background.b, 255])
            }
        };
    }
}

/// True when the pixel center falls outside the circle inscribed in its
/// module cell. One-pixel modules have nothing to shave off.
fn outside_inscribed_circle(x: u32, y: u32, geometry: GridGeometry) -> bool {
    if geometry.module_px < 2 {
        return false;
    }
    // Foreground pixels always lie past the quiet zone, so the subtraction
    // only saturates for background pixels the caller never masks.
    let lx = x.saturating_sub(geometry.margin_px) % geometry.module_px;
    let ly = y.saturating_sub(geometry.margin_px) % geometry.module_px;
    let radius = geometry.module_px as f32 / 2.0;
    let dx = lx as f32 + 0.5 - radius;
    let dy = ly as f32 + 0.5 - radius;
    dx * dx + dy * dy > radius * radius
}
