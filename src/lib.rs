//! # qrtint
//!
//! A Rust library and CLI for generating QR codes with color styling.
//!
//! `qrtint` renders a QR symbol (encoded by the [`qrcode`] crate per the
//! QR Code Model 2 specification) as an RGBA raster, then classifies every
//! pixel as module or background by nearest-color distance and rewrites it
//! according to the requested style: custom foreground/background colors,
//! fully transparent backgrounds, and square or circular modules.
//!
//! Transparency uses a "smart" two-step: the baseline raster is rendered
//! against the *inverse* of the foreground color so the two tones are far
//! apart in RGB space, then every background-classified pixel has its alpha
//! zeroed. Foreground modules stay fully opaque in every mode.
//!
//! ## Example
//!
//! Generate a transparent-background QR code and save it:
//!
//! ```rust,no_run
//! use qrtint::render::{encode_raster, png_bytes, write_bytes};
//! use qrtint::recolor::apply_style;
//! use qrtint::style::StyleOptions;
//!
//! fn main() -> Result<(), qrtint::Error> {
//!     let opts = StyleOptions { transparent: true, ..Default::default() };
//!     let raster = encode_raster("https://example.com", &opts)?;
//!     let base = png_bytes(&raster.image)?;
//!     let styled = apply_style(&base, &opts, raster.geometry);
//!     write_bytes("qr.png".as_ref(), &styled)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`color`]: hex parsing, formatting, and inversion.
//! - [`style`]: styling options and background resolution.
//! - [`classify`]: per-pixel module/background classification.
//! - [`recolor`]: classification-driven recoloring and shape masking.
//! - [`render`]: baseline raster rendering, PNG serialization, terminal
//!   preview, and file output.
//! - [`interactive`]: the prompt-driven CLI input flow.

#![forbid(unsafe_code)]

pub mod classify;
pub mod color;
pub mod error;
pub mod interactive;
pub mod recolor;
pub mod render;
pub mod style;

pub use error::Error;
