use std::path::Path;

use raster_image::{Image, RasterEncoder};

use crate::error::IoError;
use crate::jpeg::write_jpeg_impl;
use crate::png::write_png_impl;

/// The file formats an image can be written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless PNG, keeps the alpha channel.
    Png,
    /// Lossy JPEG, drops the alpha channel.
    Jpeg,
}

impl ImageFormat {
    /// Infer the format from the extension of a path, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] for a missing or unknown extension.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_path("lines.png").unwrap(), ImageFormat::Png);
    /// assert_eq!(ImageFormat::from_path("photo.JPG").unwrap(), ImageFormat::Jpeg);
    /// assert!(ImageFormat::from_path("image.gif").is_err());
    /// ```
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let ext = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg" | "jpeg") => Ok(ImageFormat::Jpeg),
            _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
        }
    }
}

/// Encoder writing PNG or JPEG files, chosen from the path extension.
#[derive(Clone, Copy, Debug)]
pub struct FileEncoder {
    /// Quality of JPEG files, from 0 (lowest) to 100 (highest).
    pub jpeg_quality: u8,
}

impl Default for FileEncoder {
    fn default() -> Self {
        Self { jpeg_quality: 95 }
    }
}

impl RasterEncoder for FileEncoder {
    type Error = IoError;

    fn encode(&self, path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<(), IoError> {
        match ImageFormat::from_path(path)? {
            ImageFormat::Png => write_png_impl(path, rgba, width, height),
            ImageFormat::Jpeg => write_jpeg_impl(path, rgba, width, height, self.jpeg_quality),
        }
    }
}

/// Writes an image to the given file path with the default [`FileEncoder`].
///
/// The format is inferred from the extension of the path.
///
/// # Arguments
///
/// * `file_path` - The destination, ending in `.png`, `.jpg` or `.jpeg`.
/// * `image` - The image to write.
///
/// # Example
///
/// ```no_run
/// use raster_image::Image;
/// use raster_io::functional as F;
///
/// let image = Image::new([1024, 1024].into()).unwrap();
/// F::save_image("test.png", &image).unwrap();
/// ```
pub fn save_image(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    image.save(file_path, &FileEncoder::default())
}
