#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image writing functions.
///
/// Picks the file format from the path extension.
/// See [`functional::save_image`] and [`functional::FileEncoder`].
pub mod functional;

/// JPEG image encoding.
///
/// Pure Rust JPEG encoder for writing RGBA images without their alpha channel.
pub mod jpeg;

/// PNG image encoding and decoding.
///
/// Write and read 8-bit RGBA PNG images.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::{save_image, FileEncoder, ImageFormat};
