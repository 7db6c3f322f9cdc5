//! Baseline raster rendering and the container-format boundary.
//!
//! The QR symbol itself comes from the `qrcode` crate; this module scales
//! its module grid into a flat two-tone RGBA raster, serializes rasters to
//! PNG bytes, renders terminal previews, and writes output files. No
//! styling decisions happen here: the raster is drawn with the foreground
//! and the *resolved* background color, and the recoloring pass does the
//! rest.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;
use qrcode::{Color, QrCode, Version};

use crate::error::Error;
use crate::style::{EcLevel, StyleOptions};

/// Where module cells fall in a rendered raster. The circle-shape masking
/// pass needs this to recover module-local coordinates from pixel indices.
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry {
    /// Edge length of one module cell in pixels.
    pub module_px: u32,
    /// Quiet zone thickness in pixels (margin modules × `module_px`).
    pub margin_px: u32,
}

/// A rendered baseline raster plus its grid geometry.
pub struct Raster {
    pub image: RgbaImage,
    pub geometry: GridGeometry,
}

/// Encodes `payload` and renders it as a flat two-tone RGBA raster.
///
/// The raster is drawn with `opts.foreground` on `opts.resolved_background()`
/// and every pixel fully opaque. Each module is scaled to a whole number of
/// pixels, so the output edge is the largest multiple of the module count
/// not exceeding `opts.size` (and never below one pixel per module).
///
/// # Example
///
/// ```rust
/// use qrtint::render::encode_raster;
/// use qrtint::style::StyleOptions;
///
/// let raster = encode_raster("Hello, World!", &StyleOptions::default()).unwrap();
/// assert_eq!(raster.image.width(), raster.image.height());
/// ```
pub fn encode_raster(payload: &str, opts: &StyleOptions) -> Result<Raster, Error> {
    let code = match opts.version {
        Some(v) => QrCode::with_version(payload, Version::Normal(v as i16), opts.ec_level.into())?,
        None => QrCode::with_error_correction_level(payload, opts.ec_level.into())?,
    };
    let width = code.width() as u32;
    let modules = code.to_colors();

    let total = width + 2 * opts.margin;
    let module_px = (opts.size / total).max(1);
    let margin_px = opts.margin * module_px;
    let edge = total * module_px;
    debug!(
        "rendering {width}x{width} modules at {module_px}px/module, {edge}px edge"
    );

    let fg = opts.foreground;
    let bg = opts.resolved_background();
    let mut image = RgbaImage::new(edge, edge);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let mx = (x / module_px) as i64 - opts.margin as i64;
        let my = (y / module_px) as i64 - opts.margin as i64;
        let dark = (0..width as i64).contains(&mx)
            && (0..width as i64).contains(&my)
            && modules[(my as u32 * width + mx as u32) as usize] == Color::Dark;
        let c = if dark { fg } else { bg };
        *pixel = Rgba([c.r, c.g, c.b, 255]);
    }

    Ok(Raster {
        image,
        geometry: GridGeometry { module_px, margin_px },
    })
}

/// Serializes a raster to PNG bytes.
pub fn png_bytes(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Renders the symbol as a block-character string for terminal preview.
///
/// The default rendering uses two `█` per dark module, one text row per
/// module row. `compact` packs two module rows into each text row with
/// half-block characters. Both include the standard four-module quiet zone.
pub fn terminal_string(payload: &str, ec_level: EcLevel, compact: bool) -> Result<String, Error> {
    let code = QrCode::with_error_correction_level(payload, ec_level.into())?;
    let width = code.width() as i32;
    let modules = code.to_colors();
    let dark = |x: i32, y: i32| {
        (0..width).contains(&x)
            && (0..width).contains(&y)
            && modules[(y * width + x) as usize] == Color::Dark
    };

    let border: i32 = 4;
    let mut out = String::new();
    if compact {
        let mut y = -border;
        while y < width + border {
            for x in -border..width + border {
                out.push(match (dark(x, y), dark(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
            y += 2;
        }
    } else {
        for y in -border..width + border {
            for x in -border..width + border {
                let c = if dark(x, y) { '█' } else { ' ' };
                out.push(c);
                out.push(c);
            }
            out.push('\n');
        }
    }
    Ok(out)
}

/// Writes encoded image bytes to `path`, creating missing parent
/// directories, and returns the absolute path written.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<PathBuf, Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;
        }
    }
    fs::write(path, bytes).map_err(|e| Error::write(path, e))?;
    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}
