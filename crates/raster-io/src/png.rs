use std::{fs, fs::File, io::BufWriter, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder};
use raster_image::{Image, ImageSize};

use crate::error::IoError;

/// Read a PNG image with four channels (rgba8).
///
/// RGB images are expanded with an opaque alpha channel.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGBA image.
pub fn read_image_png_rgba8(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let (buf, size) = read_png_impl(file_path)?;
    Ok(Image::from_rgba8(size, buf)?)
}

/// Writes the given PNG _(rgba8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image to write.
pub fn write_image_png_rgba8(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let [width, height]: [u32; 2] = image.size().into();
    write_png_impl(file_path, &image.to_rgba8(), width, height)
}

// utility function to read the png file
fn read_png_impl(file_path: impl AsRef<Path>) -> Result<(Vec<u8>, ImageSize), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if !file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "unsupported bit depth {:?}",
            info.bit_depth
        )));
    }

    let buf = match info.color_type {
        ColorType::Rgba => buf,
        ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        other => {
            return Err(IoError::PngDecodeError(format!(
                "unsupported color type {other:?}"
            )))
        }
    };

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    Ok((buf, size))
}

pub(crate) fn write_png_impl(
    file_path: impl AsRef<Path>,
    rgba: &[u8],
    width: u32,
    height: u32,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    log::debug!(
        "writing {width}x{height} png to {}",
        file_path.display()
    );

    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(rgba)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}
