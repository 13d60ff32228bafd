use std::fmt;

use num_traits::PrimInt;

use crate::error::ImageError;

/// One of the four channels of an [`Rgba`] color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The alpha channel.
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
            Channel::Alpha => "a",
        };
        write!(f, "{name}")
    }
}

/// A color with four 8-bit channels: red, green, blue and alpha.
///
/// The default color is opaque black.
///
/// # Examples
///
/// ```
/// use raster_image::Rgba;
///
/// let red = Rgba::rgb(255, 0, 0);
/// assert_eq!(red.as_tuple(), (255, 0, 0, 255));
/// assert_eq!(Rgba::default().as_tuple(), (0, 0, 0, 255));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is fully opaque.
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Create a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from integer channel values of any primitive type.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidChannelValue`] naming the first channel that is
    /// not in the range `0..=255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raster_image::{Channel, ImageError, Rgba};
    ///
    /// assert_eq!(Rgba::try_new(255, 0, 128, 56).unwrap(), Rgba::new(255, 0, 128, 56));
    ///
    /// let err = Rgba::try_new(0, 256, 0, 255).unwrap_err();
    /// assert!(matches!(err, ImageError::InvalidChannelValue(Channel::Green, _)));
    /// ```
    pub fn try_new<T>(r: T, g: T, b: T, a: T) -> Result<Self, ImageError>
    where
        T: PrimInt + fmt::Debug,
    {
        Ok(Self {
            r: channel_from(Channel::Red, r)?,
            g: channel_from(Channel::Green, g)?,
            b: channel_from(Channel::Blue, b)?,
            a: channel_from(Channel::Alpha, a)?,
        })
    }

    /// Create a fully opaque color from integer red, green and blue values.
    ///
    /// Floating point channels are not accepted, even when integral:
    ///
    /// ```compile_fail
    /// use raster_image::Rgba;
    ///
    /// let color = Rgba::try_rgb(25.0, 0.0, 0.0);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Rgba::try_new`].
    pub fn try_rgb<T>(r: T, g: T, b: T) -> Result<Self, ImageError>
    where
        T: PrimInt + fmt::Debug,
    {
        Ok(Self {
            r: channel_from(Channel::Red, r)?,
            g: channel_from(Channel::Green, g)?,
            b: channel_from(Channel::Blue, b)?,
            a: 255,
        })
    }

    /// Get the color as a `(r, g, b, a)` tuple.
    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Get the color as a `[r, g, b, a]` array.
    pub fn as_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Rgba::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.as_array()
    }
}

// a channel is valid only within 0..=255
fn channel_from<T>(channel: Channel, value: T) -> Result<u8, ImageError>
where
    T: PrimInt + fmt::Debug,
{
    value
        .to_u8()
        .ok_or_else(|| ImageError::InvalidChannelValue(channel, format!("{value:?}")))
}

/// Conversion of the accepted color shapes into a validated [`Rgba`].
///
/// Every drawing operation takes its color through this trait, so a color is
/// validated when the operation is called. The accepted shapes are:
///
/// - a structured [`Rgba`] value,
/// - a 3-tuple or 3-array of channels (red, green, blue with opaque alpha),
/// - a 4-tuple or 4-array of channels (red, green, blue, alpha),
/// - a slice of 3 or 4 channels, checked at runtime.
///
/// # Examples
///
/// ```
/// use raster_image::{Rgba, TryIntoRgba};
///
/// assert_eq!((0, 255, 0).try_into_rgba().unwrap(), Rgba::rgb(0, 255, 0));
/// assert_eq!([0, 0, 255, 55].try_into_rgba().unwrap(), Rgba::new(0, 0, 255, 55));
/// assert!((0, 300, 0).try_into_rgba().is_err());
/// assert!([1, 2].as_slice().try_into_rgba().is_err());
/// ```
pub trait TryIntoRgba {
    /// Validate and convert the value into a color.
    fn try_into_rgba(self) -> Result<Rgba, ImageError>;
}

impl TryIntoRgba for Rgba {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        Ok(self)
    }
}

impl TryIntoRgba for &Rgba {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        Ok(*self)
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for (T, T, T) {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        Rgba::try_rgb(self.0, self.1, self.2)
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for (T, T, T, T) {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        Rgba::try_new(self.0, self.1, self.2, self.3)
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for [T; 3] {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        let [r, g, b] = self;
        Rgba::try_rgb(r, g, b)
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for [T; 4] {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        let [r, g, b, a] = self;
        Rgba::try_new(r, g, b, a)
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for &[T] {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        match *self {
            [r, g, b] => Rgba::try_rgb(r, g, b),
            [r, g, b, a] => Rgba::try_new(r, g, b, a),
            _ => Err(ImageError::InvalidColorShape(format!(
                "slice of {} channels",
                self.len()
            ))),
        }
    }
}

impl<T: PrimInt + fmt::Debug> TryIntoRgba for &Vec<T> {
    fn try_into_rgba(self) -> Result<Rgba, ImageError> {
        self.as_slice().try_into_rgba()
    }
}
