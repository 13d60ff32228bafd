use std::path::Path;

/// A sink that writes a row-major RGBA8 pixel buffer to a file.
///
/// Implementors pick the file format, usually from the extension of `path`.
/// Failures are reported through the implementor's own error type and are
/// handed back to the caller of [`crate::Image::save`] unchanged.
pub trait RasterEncoder {
    /// The error returned when encoding or writing fails.
    type Error;

    /// Encode `rgba` as an image of `width` x `height` pixels and write it to `path`.
    ///
    /// `rgba` holds exactly `width * height * 4` bytes.
    fn encode(&self, path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<(), Self::Error>;
}
