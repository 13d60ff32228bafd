#![deny(missing_docs)]
//! Image types and traits for generating and manipulating RGBA images

/// RGBA color type and color normalization.
pub mod color;

/// Raster encoder interface used to persist images.
pub mod encoder;

/// Error types for the image module.
pub mod error;

/// image representation backed by a row-major RGBA pixel buffer.
pub mod image;

pub use crate::color::{Channel, Rgba, TryIntoRgba};
pub use crate::encoder::RasterEncoder;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
