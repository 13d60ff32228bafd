use raster_image::{Image, ImageError, TryIntoRgba};
use std::cmp::{max, min};
use std::iter::FusedIterator;

/// Iterator over the pixels of a straight line, produced with Bresenham's algorithm.
///
/// The line goes from `p0` to `p1`, both included, and yields exactly
/// `max(|x1 - x0|, |y1 - y0|) + 1` points. Consecutive points are 8-connected.
/// Only integer arithmetic is used, and any pair of `i64` endpoints is accepted.
///
/// # Examples
///
/// ```
/// use raster_imgproc::draw::BresenhamLine;
///
/// let points: Vec<_> = BresenhamLine::new((0, 0), (4, 2)).collect();
/// assert_eq!(points, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
/// ```
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    dx: i128,
    dy: i128,
    sx: i64,
    sy: i64,
    err: i128,
    remaining: u128,
}

impl BresenhamLine {
    /// Create the line from `p0` to `p1`, given as `(x, y)`.
    pub fn new(p0: (i64, i64), p1: (i64, i64)) -> Self {
        let (x0, y0) = p0;
        let (x1, y1) = p1;

        // spans between any two i64 coordinates fit in u64, the error term in i128
        let dx = i128::from(x0.abs_diff(x1));
        let dy = i128::from(y0.abs_diff(y1));
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        // the error term starts at half of the major axis span
        let major = max(dx, dy);

        Self {
            x: x0,
            y: y0,
            dx,
            dy,
            sx,
            sy,
            err: major / 2,
            remaining: major.unsigned_abs() + 1,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = (self.x, self.y);

        // the endpoint may sit at the edge of the i64 range, never step past it
        if self.remaining == 0 {
            return Some(point);
        }

        if self.dx > self.dy {
            self.x += self.sx;
            self.err -= self.dy;
            if self.err < 0 {
                self.y += self.sy;
                self.err += self.dx;
            }
        } else {
            self.y += self.sy;
            self.err -= self.dx;
            if self.err < 0 {
                self.x += self.sx;
                self.err += self.dy;
            }
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for BresenhamLine {}

/// Draws a line on an image inplace using Bresenham's line algorithm.
///
/// The whole line must lie inside the image. The line is checked before any
/// pixel is written, so on error the image is left unchanged.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line, in any shape accepted by [`TryIntoRgba`].
///
/// # Errors
///
/// Returns [`ImageError::LinePixelOutOfBounds`] with the first point of the
/// line, in drawing order, that falls outside of the image, or a color
/// validation error.
///
/// # Examples
///
/// ```
/// use raster_image::{Image, Rgba};
/// use raster_imgproc::draw::draw_line;
///
/// let mut img = Image::new([10, 10].into()).unwrap();
/// draw_line(&mut img, (2, 5), (7, 5), (255, 0, 0)).unwrap();
///
/// assert_eq!(img.get_pixel(7, 5).unwrap(), Rgba::rgb(255, 0, 0));
/// assert!(draw_line(&mut img, (0, 0), (10, 0), (255, 0, 0)).is_err());
/// ```
pub fn draw_line(
    img: &mut Image,
    p0: (i64, i64),
    p1: (i64, i64),
    color: impl TryIntoRgba,
) -> Result<(), ImageError> {
    let color = color.try_into_rgba()?;
    let line = BresenhamLine::new(p0, p1);

    if let Some((x, y)) = line.clone().find(|&(x, y)| !img.in_bounds(x, y)) {
        return Err(ImageError::LinePixelOutOfBounds(
            x,
            y,
            img.width(),
            img.height(),
        ));
    }

    for (x, y) in line {
        img.set_pixel(x, y, color)?;
    }

    Ok(())
}

/// Draws a filled rectangle on an image inplace.
///
/// The corners can be given in any order and both are included. The
/// rectangle is clipped to the image; a rectangle entirely outside of the
/// image draws nothing and is not an error.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - One corner of the rectangle as a tuple of (x, y).
/// * `p1` - The opposite corner of the rectangle as a tuple of (x, y).
/// * `color` - The fill color, in any shape accepted by [`TryIntoRgba`].
///
/// # Errors
///
/// Only an invalid color is an error.
pub fn draw_filled_rect(
    img: &mut Image,
    p0: (i64, i64),
    p1: (i64, i64),
    color: impl TryIntoRgba,
) -> Result<(), ImageError> {
    let color = color.try_into_rgba()?;

    let (x0, y0) = p0;
    let (x1, y1) = p1;

    // clip the sorted corners to the image
    let x_min = max(0, min(x0, x1));
    let y_min = max(0, min(y0, y1));
    let x_max = min(img.width() as i64 - 1, max(x0, x1));
    let y_max = min(img.height() as i64 - 1, max(y0, y1));

    if x_min > x_max || y_min > y_max {
        return Ok(());
    }

    let (x_min, x_max) = (x_min as usize, x_max as usize);
    let (y_min, y_max) = (y_min as usize, y_max as usize);
    let cols = img.cols();

    img.as_slice_mut()
        .chunks_exact_mut(cols)
        .skip(y_min)
        .take(y_max - y_min + 1)
        .for_each(|row| row[x_min..=x_max].fill(color));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_image::{Channel, ImageSize, Rgba};

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    fn small_image() -> Result<Image, ImageError> {
        Image::new(ImageSize {
            width: 10,
            height: 10,
        })
    }

    // 1 where the pixel has the given color, 0 elsewhere
    fn mask(img: &Image, color: Rgba) -> Vec<u8> {
        img.as_slice().iter().map(|&px| u8::from(px == color)).collect()
    }

    fn painted(img: &Image, color: Rgba) -> Vec<(i64, i64)> {
        let cols = img.cols() as i64;
        img.as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &px)| px == color)
            .map(|(i, _)| (i as i64 % cols, i as i64 / cols))
            .collect()
    }

    #[test]
    fn test_line_points() {
        for (p0, p1) in [
            ((0, 0), (0, 0)),
            ((0, 0), (7, 3)),
            ((7, 3), (0, 0)),
            ((3, -4), (-2, 9)),
            ((-5, 2), (5, 2)),
            ((1, 1), (6, 6)),
            ((4, 0), (0, 9)),
        ] {
            let points: Vec<_> = BresenhamLine::new(p0, p1).collect();
            let dx = (p0.0 - p1.0).abs();
            let dy = (p0.1 - p1.1).abs();

            assert_eq!(points.len() as i64, dx.max(dy) + 1);
            assert_eq!(points.first(), Some(&p0));
            assert_eq!(points.last(), Some(&p1));
            for pair in points.windows(2) {
                let step = ((pair[1].0 - pair[0].0).abs(), (pair[1].1 - pair[0].1).abs());
                assert!(step.0 <= 1 && step.1 <= 1 && step != (0, 0));
            }
        }
    }

    #[test]
    fn test_line_exact_size() {
        let mut line = BresenhamLine::new((0, 0), (5, 2));
        assert_eq!(line.size_hint(), (6, Some(6)));
        line.next();
        assert_eq!(line.size_hint(), (5, Some(5)));
        assert_eq!(line.by_ref().count(), 5);
        assert_eq!(line.next(), None);
    }

    #[test]
    fn test_line_extreme_endpoints() {
        let mut line = BresenhamLine::new((i64::MIN, 0), (0, 0));
        assert_eq!(line.next(), Some((i64::MIN, 0)));
        assert_eq!(line.next(), Some((i64::MIN + 1, 0)));

        // the line ends on the last representable coordinate without stepping past it
        let points: Vec<_> =
            BresenhamLine::new((i64::MAX - 2, i64::MIN), (i64::MAX, i64::MIN)).collect();
        assert_eq!(
            points,
            vec![
                (i64::MAX - 2, i64::MIN),
                (i64::MAX - 1, i64::MIN),
                (i64::MAX, i64::MIN),
            ]
        );

        // the full i64 span has more points than usize can count
        let line = BresenhamLine::new((i64::MIN, 0), (i64::MAX, 0));
        assert_eq!(line.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_line_far_out_of_bounds() -> Result<(), ImageError> {
        let mut img = small_image()?;
        for (p0, p1, first_out) in [
            ((i64::MIN, 0), (0, 0), (i64::MIN, 0)),
            ((0, 0), (i64::MAX, 0), (10, 0)),
            ((5, 5), (i64::MIN, i64::MAX), (0, 10)),
        ] {
            let (x, y) = first_out;
            assert_eq!(
                draw_line(&mut img, p0, p1, Rgba::BLACK),
                Err(ImageError::LinePixelOutOfBounds(x, y, 10, 10))
            );
        }
        assert_eq!(img, small_image()?);
        Ok(())
    }

    #[test]
    fn test_horizontal_line() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_line(&mut img, (2, 5), (7, 5), RED)?;

        let expected: Vec<_> = (2..=7).map(|x| (x, 5)).collect();
        assert_eq!(painted(&img, RED), expected);
        assert_eq!(painted(&img, Rgba::WHITE).len(), 100 - 6);
        Ok(())
    }

    #[test]
    fn test_vertical_line() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_line(&mut img, (4, 2), (4, 7), GREEN)?;

        let expected: Vec<_> = (2..=7).map(|y| (4, y)).collect();
        assert_eq!(painted(&img, GREEN), expected);
        Ok(())
    }

    #[test]
    fn test_diagonal_line() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_line(&mut img, (1, 1), (5, 5), BLUE)?;

        let expected: Vec<_> = (1..=5).map(|i| (i, i)).collect();
        assert_eq!(painted(&img, BLUE), expected);
        Ok(())
    }

    #[test]
    fn test_line_reversed_endpoints() -> Result<(), ImageError> {
        for (p0, p1) in [((2, 5), (7, 5)), ((4, 2), (4, 7)), ((1, 1), (5, 5)), ((8, 1), (1, 8))] {
            let mut forward = small_image()?;
            let mut backward = small_image()?;
            draw_line(&mut forward, p0, p1, RED)?;
            draw_line(&mut backward, p1, p0, RED)?;
            assert_eq!(forward, backward);
        }
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_shallow() -> Result<(), ImageError> {
        let mut img = Image::new([5, 5].into())?;
        draw_line(&mut img, (0, 1), (4, 3), RED)?;
        assert_eq!(
            mask(&img, RED),
            &[
                0, 0, 0, 0, 0,
                1, 1, 0, 0, 0,
                0, 0, 1, 1, 0,
                0, 0, 0, 0, 1,
                0, 0, 0, 0, 0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_steep() -> Result<(), ImageError> {
        let mut img = Image::new([5, 5].into())?;
        draw_line(&mut img, (3, 0), (1, 4), BLUE)?;
        assert_eq!(
            mask(&img, BLUE),
            &[
                0, 0, 0, 1, 0,
                0, 0, 0, 1, 0,
                0, 0, 1, 0, 0,
                0, 0, 1, 0, 0,
                0, 1, 0, 0, 0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_line_single_point() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_line(&mut img, (3, 3), (3, 3), RED)?;
        assert_eq!(painted(&img, RED), vec![(3, 3)]);
        Ok(())
    }

    #[test]
    fn test_line_out_of_bounds_is_atomic() -> Result<(), ImageError> {
        let mut img = small_image()?;
        assert_eq!(
            draw_line(&mut img, (5, 5), (12, 5), RED),
            Err(ImageError::LinePixelOutOfBounds(10, 5, 10, 10))
        );
        assert_eq!(
            draw_line(&mut img, (-2, 0), (3, 0), RED),
            Err(ImageError::LinePixelOutOfBounds(-2, 0, 10, 10))
        );
        assert_eq!(img, small_image()?);
        Ok(())
    }

    #[test]
    fn test_line_invalid_color() -> Result<(), ImageError> {
        let mut img = small_image()?;
        assert!(matches!(
            draw_line(&mut img, (0, 0), (3, 3), (0, 256, 0)),
            Err(ImageError::InvalidChannelValue(Channel::Green, _))
        ));
        assert!(matches!(
            draw_line(&mut img, (0, 0), (3, 3), [1, 2].as_slice()),
            Err(ImageError::InvalidColorShape(_))
        ));
        assert_eq!(img, small_image()?);
        Ok(())
    }

    #[test]
    fn test_rectangle_basic_fill() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_filled_rect(&mut img, (2, 3), (5, 6), RED)?;

        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..=5).contains(&x) && (3..=6).contains(&y);
                let expected = if inside { RED } else { Rgba::WHITE };
                assert_eq!(img.get_pixel(x, y)?, expected, "pixel ({x}, {y})");
            }
        }
        Ok(())
    }

    #[test]
    fn test_rectangle_corners_in_any_order() -> Result<(), ImageError> {
        let mut expected = small_image()?;
        draw_filled_rect(&mut expected, (2, 3), (5, 6), RED)?;

        for (p0, p1) in [((5, 6), (2, 3)), ((2, 6), (5, 3)), ((5, 3), (2, 6))] {
            let mut img = small_image()?;
            draw_filled_rect(&mut img, p0, p1, RED)?;
            assert_eq!(img, expected);
        }
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_rectangle_clipped() -> Result<(), ImageError> {
        let mut img = Image::new([5, 5].into())?;
        draw_filled_rect(&mut img, (3, -2), (20, 1), GREEN)?;
        assert_eq!(
            mask(&img, GREEN),
            &[
                0, 0, 0, 1, 1,
                0, 0, 0, 1, 1,
                0, 0, 0, 0, 0,
                0, 0, 0, 0, 0,
                0, 0, 0, 0, 0,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_rectangle_outside_is_noop() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_filled_rect(&mut img, (20, 20), (30, 30), RED)?;
        draw_filled_rect(&mut img, (-8, -8), (-1, 4), RED)?;
        draw_filled_rect(&mut img, (2, 10), (6, 12), RED)?;
        assert_eq!(img, small_image()?);
        Ok(())
    }

    #[test]
    fn test_rectangle_covering_image() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_filled_rect(&mut img, (-100, -100), (100, 100), BLUE)?;
        assert!(img.as_slice().iter().all(|&px| px == BLUE));
        Ok(())
    }

    #[test]
    fn test_rectangle_degenerate() -> Result<(), ImageError> {
        let mut img = small_image()?;
        draw_filled_rect(&mut img, (4, 4), (4, 4), RED)?;
        assert_eq!(painted(&img, RED), vec![(4, 4)]);

        draw_filled_rect(&mut img, (0, 9), (9, 9), GREEN)?;
        assert_eq!(painted(&img, GREEN).len(), 10);
        Ok(())
    }

    #[test]
    fn test_rectangle_invalid_color() -> Result<(), ImageError> {
        let mut img = small_image()?;
        // the color is validated even when nothing would be drawn
        assert!(matches!(
            draw_filled_rect(&mut img, (20, 20), (30, 30), (0, 0, 0, -1)),
            Err(ImageError::InvalidChannelValue(Channel::Alpha, _))
        ));
        assert_eq!(img, small_image()?);
        Ok(())
    }
}
