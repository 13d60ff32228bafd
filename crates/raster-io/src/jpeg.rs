use crate::error::IoError;
use jpeg_encoder::{ColorType, Encoder};
use raster_image::Image;
use std::path::Path;

/// Writes the given image as a JPEG _(rgb8)_ file, dropping the alpha channel.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG image.
/// - `image` - The image to write.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn write_image_jpeg_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image,
    quality: u8,
) -> Result<(), IoError> {
    let [width, height]: [u32; 2] = image.size().into();
    write_jpeg_impl(file_path, &image.to_rgba8(), width, height, quality)
}

pub(crate) fn write_jpeg_impl(
    file_path: impl AsRef<Path>,
    rgba: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<(), IoError> {
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(IoError::UnsupportedImageSize(width, height));
    };

    let file_path = file_path.as_ref();
    log::debug!(
        "writing {width}x{height} jpeg (quality {quality}) to {}",
        file_path.display()
    );

    // the encoder ignores the alpha byte of every pixel
    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(rgba, w, h, ColorType::Rgba)?;
    Ok(())
}
