//! Binary images and perspective sampling

use crate::point::ResultPoint;
use crate::{Error, Result};
use std::fmt;

/// A packed `width x height` grid of black (`true`) and white (`false`)
/// pixels. Rows are stored in 32-bit words, least significant bit first.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: u32,
    height: u32,
    row_size: usize,
    bits: Vec<u32>,
}

impl BitMatrix {
    /// Create an all-white matrix
    pub fn new(width: u32, height: u32) -> Self {
        let row_size = (width as usize).div_ceil(32);
        Self {
            width,
            height,
            row_size,
            bits: vec![0; row_size * height as usize],
        }
    }

    /// Build a matrix from text, one line per row.
    ///
    /// Each pixel is written as `set` or `unset`; both must have the same
    /// length. Mostly useful for fixtures.
    pub fn parse(text: &str, set: &str, unset: &str) -> Result<Self> {
        if set.is_empty() || set.len() != unset.len() {
            return Err(Error::Invalid("pixel markers must be non-empty and equal length".into()));
        }
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        let width = rows.first().map_or(0, |row| row.len() / set.len());
        let mut matrix = BitMatrix::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width * set.len() {
                return Err(Error::Invalid(format!("row {y} has a different width")));
            }
            for x in 0..width {
                let pixel = &row[x * set.len()..(x + 1) * set.len()];
                if pixel == set {
                    matrix.set(x as u32, y as u32);
                } else if pixel != unset {
                    return Err(Error::Invalid(format!("unexpected pixel {pixel:?} in row {y}")));
                }
            }
        }
        Ok(matrix)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read a pixel. Coordinates outside the matrix read as white.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let offset = y as usize * self.row_size + (x as usize >> 5);
        (self.bits[offset] >> (x & 0x1f)) & 1 != 0
    }

    /// Set a pixel to black
    #[inline]
    pub fn set(&mut self, x: u32, y: u32) {
        let offset = y as usize * self.row_size + (x as usize >> 5);
        self.bits[offset] |= 1 << (x & 0x1f);
    }

    /// Invert one pixel
    #[inline]
    pub fn flip(&mut self, x: u32, y: u32) {
        let offset = y as usize * self.row_size + (x as usize >> 5);
        self.bits[offset] ^= 1 << (x & 0x1f);
    }

    /// Set every pixel in a rectangle to black
    pub fn set_region(&mut self, left: u32, top: u32, width: u32, height: u32) {
        let right = (left + width).min(self.width);
        let bottom = (top + height).min(self.height);
        for y in top..bottom {
            for x in left..right {
                self.set(x, y);
            }
        }
    }

    /// Rotate the matrix by 180 degrees in place
    pub fn rotate180(&mut self) {
        let mut rotated = BitMatrix::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x as i32, y as i32) {
                    rotated.set(self.width - 1 - x, self.height - 1 - y);
                }
            }
        }
        *self = rotated;
    }

    /// Sample a `dimension_x x dimension_y` grid of module centers through
    /// `transform`, which maps grid space to image space.
    ///
    /// Fails with [`Error::NotFound`] when a sample lands more than one pixel
    /// outside the image; samples just over the edge are clamped.
    pub fn sample_grid(
        &self,
        dimension_x: u32,
        dimension_y: u32,
        transform: &PerspectiveTransform,
    ) -> Result<BitMatrix> {
        if dimension_x == 0 || dimension_y == 0 {
            return Err(Error::NotFound);
        }
        let mut sampled = BitMatrix::new(dimension_x, dimension_y);
        let mut points = vec![0f32; 2 * dimension_x as usize];
        for y in 0..dimension_y {
            let center_y = y as f32 + 0.5;
            for (x, pair) in points.chunks_exact_mut(2).enumerate() {
                pair[0] = x as f32 + 0.5;
                pair[1] = center_y;
            }
            transform.transform_points(&mut points);
            for (x, pair) in points.chunks_exact(2).enumerate() {
                let (px, py) = self.nudge(pair[0], pair[1])?;
                if self.get(px, py) {
                    sampled.set(x as u32, y);
                }
            }
        }
        Ok(sampled)
    }

    fn nudge(&self, x: f32, y: f32) -> Result<(i32, i32)> {
        let (x, y) = (x.floor() as i32, y.floor() as i32);
        let (width, height) = (self.width as i32, self.height as i32);
        if x < -1 || x > width || y < -1 || y > height {
            return Err(Error::NotFound);
        }
        Ok((x.clamp(0, width - 1), y.clamp(0, height - 1)))
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                f.write_str(if self.get(x, y) { "X " } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitMatrix({}x{})", self.width, self.height)
    }
}

/// A projective mapping between two quadrilaterals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    a11: f32,
    a12: f32,
    a13: f32,
    a21: f32,
    a22: f32,
    a23: f32,
    a31: f32,
    a32: f32,
    a33: f32,
}

impl PerspectiveTransform {
    #[allow(clippy::too_many_arguments)]
    fn new(
        a11: f32,
        a21: f32,
        a31: f32,
        a12: f32,
        a22: f32,
        a32: f32,
        a13: f32,
        a23: f32,
        a33: f32,
    ) -> Self {
        Self {
            a11,
            a12,
            a13,
            a21,
            a22,
            a23,
            a31,
            a32,
            a33,
        }
    }

    /// The transform taking the corners of `from` onto the corners of `to`.
    /// Corners are given in the order top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn quadrilateral_to_quadrilateral(from: [ResultPoint; 4], to: [ResultPoint; 4]) -> Self {
        let q_to_s = Self::quadrilateral_to_square(from);
        let s_to_q = Self::square_to_quadrilateral(to);
        s_to_q.times(&q_to_s)
    }

    fn square_to_quadrilateral(corners: [ResultPoint; 4]) -> Self {
        let [p0, p1, p2, p3] = corners;
        let (x0, y0, x1, y1, x2, y2, x3, y3) =
            (p0.x(), p0.y(), p1.x(), p1.y(), p2.x(), p2.y(), p3.x(), p3.y());
        let dx3 = x0 - x1 + x2 - x3;
        let dy3 = y0 - y1 + y2 - y3;
        if dx3 == 0.0 && dy3 == 0.0 {
            // affine
            return Self::new(x1 - x0, x2 - x1, x0, y1 - y0, y2 - y1, y0, 0.0, 0.0, 1.0);
        }
        let dx1 = x1 - x2;
        let dx2 = x3 - x2;
        let dy1 = y1 - y2;
        let dy2 = y3 - y2;
        let denominator = dx1 * dy2 - dx2 * dy1;
        let a13 = (dx3 * dy2 - dx2 * dy3) / denominator;
        let a23 = (dx1 * dy3 - dx3 * dy1) / denominator;
        Self::new(
            x1 - x0 + a13 * x1,
            x3 - x0 + a23 * x3,
            x0,
            y1 - y0 + a13 * y1,
            y3 - y0 + a23 * y3,
            y0,
            a13,
            a23,
            1.0,
        )
    }

    fn quadrilateral_to_square(corners: [ResultPoint; 4]) -> Self {
        Self::square_to_quadrilateral(corners).build_adjoint()
    }

    fn build_adjoint(&self) -> Self {
        Self::new(
            self.a22 * self.a33 - self.a23 * self.a32,
            self.a23 * self.a31 - self.a21 * self.a33,
            self.a21 * self.a32 - self.a22 * self.a31,
            self.a13 * self.a32 - self.a12 * self.a33,
            self.a11 * self.a33 - self.a13 * self.a31,
            self.a12 * self.a31 - self.a11 * self.a32,
            self.a12 * self.a23 - self.a13 * self.a22,
            self.a13 * self.a21 - self.a11 * self.a23,
            self.a11 * self.a22 - self.a12 * self.a21,
        )
    }

    fn times(&self, other: &Self) -> Self {
        Self::new(
            self.a11 * other.a11 + self.a21 * other.a12 + self.a31 * other.a13,
            self.a11 * other.a21 + self.a21 * other.a22 + self.a31 * other.a23,
            self.a11 * other.a31 + self.a21 * other.a32 + self.a31 * other.a33,
            self.a12 * other.a11 + self.a22 * other.a12 + self.a32 * other.a13,
            self.a12 * other.a21 + self.a22 * other.a22 + self.a32 * other.a23,
            self.a12 * other.a31 + self.a22 * other.a32 + self.a32 * other.a33,
            self.a13 * other.a11 + self.a23 * other.a12 + self.a33 * other.a13,
            self.a13 * other.a21 + self.a23 * other.a22 + self.a33 * other.a23,
            self.a13 * other.a31 + self.a23 * other.a32 + self.a33 * other.a33,
        )
    }

    /// Map interleaved `x, y` pairs in place
    pub fn transform_points(&self, points: &mut [f32]) {
        for pair in points.chunks_exact_mut(2) {
            let (x, y) = (pair[0], pair[1]);
            let denominator = self.a13 * x + self.a23 * y + self.a33;
            pair[0] = (self.a11 * x + self.a21 * y + self.a31) / denominator;
            pair[1] = (self.a12 * x + self.a22 * y + self.a32) / denominator;
        }
    }
}
