//! Surface-space geometry.

/// A position on the drawing surface, in pixels.
///
/// Points are plain values: once created they are never mutated, only copied
/// into strokes and stickers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point with both coordinates multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_tuples_convert_to_pixel_coordinates() {
        assert_eq!(Point::from((10, -3)), Point::new(10.0, -3.0));
    }

    #[test]
    fn scaled_multiplies_both_axes() {
        assert_eq!(Point::new(2.5, 8.0).scaled(4.0), Point::new(10.0, 32.0));
    }
}
