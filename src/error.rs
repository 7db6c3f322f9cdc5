//! Fatal error types for a generation request.
//!
//! Styling problems are deliberately absent from this taxonomy: the
//! recoloring pass recovers from them locally by falling back to the
//! unstyled image (see [`crate::recolor::apply_style`]). Malformed color
//! strings are not errors either; they parse to black.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The payload does not fit the requested version and error correction
    /// level, or cannot be encoded at all. Not retried; the caller has to
    /// change its inputs.
    #[error("QR encoding failed: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),

    /// An interactive prompt could not be read or answered.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output file could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
