use crate::color::Channel;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when a color channel is not an integer in the range 0..=255.
    #[error("RGBA component {0} must be an int from 0 to 255, got {1}")]
    InvalidChannelValue(Channel, String),

    /// Error when a color is given with an unsupported number of channels.
    #[error("Invalid type of RGBA color: {0}")]
    InvalidColorShape(String),

    /// Error when the image size has a zero dimension.
    #[error("Invalid image size: width ({0}) and height ({1}) must be positive")]
    InvalidImageSize(usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel coordinate is outside of the image.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(i64, i64, usize, usize),

    /// Error when a line plots a pixel outside of the image.
    #[error("Line pixel ({0}, {1}) is out of bounds ({2}x{3})")]
    LinePixelOutOfBounds(i64, i64, usize, usize),
}
