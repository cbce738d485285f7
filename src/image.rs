//! Image handling and luminance access

use crate::bit_matrix::BitMatrix;
use crate::{Error, Result};
use std::borrow::Cow;

/// Read-only access to 8-bit luminance samples.
///
/// This is the only view of pixel data the decoder needs. Sources that
/// already hold a contiguous `width * height` buffer can hand it out from
/// [`matrix`](LuminanceSource::matrix) without copying.
pub trait LuminanceSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// One row of `width` samples. `y` must be less than `height`.
    fn row(&self, y: u32) -> Cow<'_, [u8]>;

    /// All samples in row-major order.
    fn matrix(&self) -> Cow<'_, [u8]> {
        let mut matrix = Vec::with_capacity(self.width() as usize * self.height() as usize);
        for y in 0..self.height() {
            matrix.extend_from_slice(&self.row(y));
        }
        Cow::Owned(matrix)
    }
}

/// A grayscale image to be scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create an image from grayscale data
    pub fn from_gray(data: &[u8], width: u32, height: u32) -> Result<Self> {
        if (data.len() as u64) != (width as u64) * (height as u64) {
            return Err(Error::Invalid(format!(
                "expected {} bytes for a {width}x{height} image, got {}",
                width as u64 * height as u64,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Get the image width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get access to the raw image data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// A negative of this image, for light-on-dark symbols
    pub fn inverted(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|sample| !sample).collect(),
        }
    }
}

impl LuminanceSource for Image {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn row(&self, y: u32) -> Cow<'_, [u8]> {
        let start = y as usize * self.width as usize;
        Cow::Borrowed(&self.data[start..start + self.width as usize])
    }

    fn matrix(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }
}

/// Render a binary image as luminance, black modules at 0 and white at 255
impl From<&BitMatrix> for Image {
    fn from(bits: &BitMatrix) -> Self {
        let (width, height) = (bits.width(), bits.height());
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            data.extend((0..width as i32).map(|x| if bits.get(x, y) { 0 } else { 255 }));
        }
        Self { width, height, data }
    }
}

#[cfg(feature = "image")]
impl From<&::image::GrayImage> for Image {
    fn from(gray: &::image::GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        Self {
            width,
            height,
            data: gray.as_raw().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gray_rejects_wrong_length() {
        let err = Image::from_gray(&[0; 10], 4, 3).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
    }

    #[test]
    fn test_rows_and_matrix() {
        let data: Vec<u8> = (0..12).collect();
        let image = Image::from_gray(&data, 4, 3).unwrap();
        assert_eq!(&*image.row(1), &[4, 5, 6, 7]);
        assert_eq!(&*LuminanceSource::matrix(&image), data.as_slice());
    }

    #[test]
    fn test_inverted() {
        let image = Image::from_gray(&[0, 255, 16, 200], 2, 2).unwrap();
        assert_eq!(image.inverted().data(), &[255, 0, 239, 55]);
    }

    #[test]
    fn test_from_bit_matrix() {
        let bits = BitMatrix::parse("X.\n.X\n", "X", ".").unwrap();
        let image = Image::from(&bits);
        assert_eq!((image.width(), image.height()), (2, 2));
        assert_eq!(image.data(), &[0, 255, 255, 0]);
    }

    struct Gradient;

    impl LuminanceSource for Gradient {
        fn width(&self) -> u32 {
            3
        }

        fn height(&self) -> u32 {
            2
        }

        fn row(&self, y: u32) -> Cow<'_, [u8]> {
            Cow::Owned(vec![y as u8; 3])
        }
    }

    #[test]
    fn test_default_matrix_concatenates_rows() {
        assert_eq!(&*Gradient.matrix(), &[0, 0, 0, 1, 1, 1]);
    }
}
