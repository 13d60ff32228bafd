use std::path::Path;

use crate::color::{Rgba, TryIntoRgba};
use crate::encoder::RasterEncoder;
use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use raster_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents an RGBA image with a fixed size.
///
/// The pixels are stored row-major: the pixel at `(x, y)` lives at index
/// `y * width + x`. The size is fixed at construction and cannot be changed
/// afterwards, the image has no setter for it:
///
/// ```compile_fail
/// use raster_image::{Image, ImageSize};
///
/// let mut image = Image::new(ImageSize { width: 20, height: 10 }).unwrap();
/// image.size.width = 100;
/// ```
///
/// Coordinates are signed so that negative positions are reported as out of
/// bounds instead of being rejected by the type system. A coordinate is valid
/// iff `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Rgba>,
}

impl Image {
    /// Create a new image filled with opaque white.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    ///
    /// # Errors
    ///
    /// If the width or the height is zero, or the image is too large to be
    /// addressed in memory, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_image::{Image, ImageSize, Rgba};
    ///
    /// let image = Image::new(ImageSize { width: 20, height: 10 }).unwrap();
    ///
    /// assert_eq!(image.width(), 20);
    /// assert_eq!(image.height(), 10);
    /// assert_eq!(image.get_pixel(0, 0).unwrap(), Rgba::WHITE);
    /// ```
    pub fn new(size: ImageSize) -> Result<Self, ImageError> {
        Self::from_size_val(size, Rgba::WHITE)
    }

    /// Create a new image with every pixel set to the given color.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `fill` - The color of every pixel, in any shape accepted by [`TryIntoRgba`].
    ///
    /// # Errors
    ///
    /// If the fill color is invalid or the size has a zero dimension, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_image::{Image, ImageSize, Rgba};
    ///
    /// let image = Image::from_size_val([10, 10].into(), (255, 0, 0)).unwrap();
    ///
    /// assert_eq!(image.get_pixel(9, 9).unwrap(), Rgba::rgb(255, 0, 0));
    /// ```
    pub fn from_size_val(size: ImageSize, fill: impl TryIntoRgba) -> Result<Self, ImageError> {
        let fill = fill.try_into_rgba()?;
        let num_pixels = check_size(size)?;

        log::trace!("allocating {size} filled with {fill:?}");

        Ok(Self {
            size,
            data: vec![fill; num_pixels],
        })
    }

    /// Create a new image from a row-major RGBA8 byte buffer.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - Four bytes per pixel, in `r, g, b, a` order.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the image size, an error is returned.
    pub fn from_rgba8(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        // fits in usize, checked along with the pixel count
        let expected = check_size(size)? * 4;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        let data = data
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self { size, data })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Check whether `(x, y)` addresses a pixel of the image.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width())
            && usize::try_from(y).is_ok_and(|y| y < self.height())
    }

    fn linear_index(&self, x: i64, y: i64) -> Result<usize, ImageError> {
        if !self.in_bounds(x, y) {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok(y as usize * self.width() + x as usize)
    }

    /// Get the color of a pixel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    ///
    /// # Errors
    ///
    /// If the coordinate is outside of the image, an error is returned.
    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Rgba, ImageError> {
        let idx = self.linear_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the color of a pixel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `color` - The new color, in any shape accepted by [`TryIntoRgba`].
    ///
    /// # Errors
    ///
    /// If the coordinate is outside of the image or the color is invalid, an
    /// error is returned and the image is left untouched.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: impl TryIntoRgba) -> Result<(), ImageError> {
        let idx = self.linear_index(x, y)?;
        self.data[idx] = color.try_into_rgba()?;
        Ok(())
    }

    /// Overwrite every pixel of the image with the given color.
    ///
    /// # Errors
    ///
    /// If the color is invalid, an error is returned and the image is left untouched.
    pub fn clear(&mut self, color: impl TryIntoRgba) -> Result<(), ImageError> {
        let color = color.try_into_rgba()?;
        self.data.fill(color);
        Ok(())
    }

    /// Get the pixels of the image as a row-major slice.
    pub fn as_slice(&self) -> &[Rgba] {
        &self.data
    }

    /// Get the pixels of the image as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// Get the pixels of the image as row-major RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(Rgba::as_array).collect()
    }

    /// Write the image to a file through the given encoder.
    ///
    /// Errors of the encoder are returned as they are.
    ///
    /// # Arguments
    ///
    /// * `path` - The destination file, its extension usually selects the format.
    /// * `encoder` - The encoder receiving the size and the RGBA8 bytes.
    pub fn save<E: RasterEncoder>(
        &self,
        path: impl AsRef<Path>,
        encoder: &E,
    ) -> Result<(), E::Error> {
        let [width, height]: [u32; 2] = self.size.into();
        encoder.encode(path.as_ref(), width, height, &self.to_rgba8())
    }
}

// returns the number of pixels, whose RGBA8 bytes must also fit in an allocation
fn check_size(size: ImageSize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .filter(|&n| n > 0)
        .filter(|&n| {
            n.checked_mul(std::mem::size_of::<Rgba>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ImageError::InvalidImageSize(size.width, size.height))
}
