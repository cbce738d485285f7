//! Global histogram thresholding
//!
//! Builds one luminance histogram for the whole image, finds the two
//! dominant peaks (paper and ink) and thresholds at the emptiest bucket
//! between them. Cheap, and good enough for evenly lit symbols.

use crate::bit_matrix::BitMatrix;
use crate::image::LuminanceSource;
use crate::{Error, Result};

const LUMINANCE_BITS: u32 = 5;
const LUMINANCE_SHIFT: u32 = 8 - LUMINANCE_BITS;
const LUMINANCE_BUCKETS: usize = 1 << LUMINANCE_BITS;

/// Turns a borrowed luminance source into a [`BitMatrix`].
pub struct GlobalHistogramBinarizer<'a, S: LuminanceSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: LuminanceSource + ?Sized> GlobalHistogramBinarizer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Threshold the whole image.
    ///
    /// Pixels darker than the estimated black point become black. Fails with
    /// [`Error::NotFound`] when the histogram has no two separated peaks.
    pub fn black_matrix(&self) -> Result<BitMatrix> {
        let width = self.source.width();
        let height = self.source.height();
        if width == 0 || height == 0 {
            return Err(Error::NotFound);
        }
        let luminances = self.source.matrix();

        let mut buckets = [0u32; LUMINANCE_BUCKETS];
        for &pixel in luminances.iter() {
            buckets[(pixel >> LUMINANCE_SHIFT) as usize] += 1;
        }
        let black_point = compute_black_point(&buckets)?;
        log::trace!("black point {black_point} for {width}x{height} image");

        let mut matrix = BitMatrix::new(width, height);
        for (y, row) in luminances.chunks_exact(width as usize).enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                if u32::from(pixel) < black_point {
                    matrix.set(x as u32, y as u32);
                }
            }
        }
        Ok(matrix)
    }
}

/// Pick a black/white threshold from a luminance histogram.
///
/// `buckets` holds the histogram with `256 / buckets.len()` luminance values
/// per bucket. The result is a luminance value: samples below it are black.
///
/// The bucket count must be a power of two no larger than 256.
pub fn compute_black_point(buckets: &[u32]) -> Result<u32> {
    let num_buckets = buckets.len();
    if !num_buckets.is_power_of_two() || num_buckets > 256 {
        return Err(Error::Invalid(format!(
            "{num_buckets} histogram buckets, expected a power of two up to 256"
        )));
    }
    let shift = 8 - num_buckets.trailing_zeros();

    let mut max_bucket_count = 0;
    let mut first_peak = 0;
    let mut first_peak_size = 0;
    for (x, &count) in buckets.iter().enumerate() {
        if count > first_peak_size {
            first_peak = x;
            first_peak_size = count;
        }
        max_bucket_count = max_bucket_count.max(count);
    }

    // Favor a second peak that is both tall and far from the first.
    let mut second_peak = 0;
    let mut second_peak_score = 0u64;
    for (x, &count) in buckets.iter().enumerate() {
        let distance = x.abs_diff(first_peak) as u64;
        let score = u64::from(count) * distance * distance;
        if score > second_peak_score {
            second_peak = x;
            second_peak_score = score;
        }
    }

    if second_peak_score == 0 {
        // a single population of luminance values
        return Err(Error::NotFound);
    }
    if first_peak > second_peak {
        std::mem::swap(&mut first_peak, &mut second_peak);
    }
    if second_peak - first_peak <= num_buckets / 16 {
        return Err(Error::NotFound);
    }

    let mut best_valley = second_peak - 1;
    let mut best_valley_score = -1i64;
    for x in (first_peak + 1..second_peak).rev() {
        let from_first = (x - first_peak) as i64;
        let score = from_first
            * from_first
            * (second_peak - x) as i64
            * i64::from(max_bucket_count - buckets[x]);
        if score > best_valley_score {
            best_valley = x;
            best_valley_score = score;
        }
    }

    Ok((best_valley as u32) << shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    #[test]
    fn test_two_level_histogram() {
        let mut buckets = [0u32; 32];
        buckets[0] = 100;
        buckets[31] = 100;
        // x^2 * (31 - x) peaks at x = 21
        assert_eq!(compute_black_point(&buckets), Ok(21 << 3));
    }

    #[test]
    fn test_valley_prefers_empty_bucket() {
        let mut buckets = [5u32; 32];
        buckets[4] = 400;
        buckets[26] = 300;
        buckets[12] = 0;
        let black_point = compute_black_point(&buckets).unwrap();
        assert!(black_point > 4 << 3 && black_point < 26 << 3);
    }

    #[test]
    fn test_uniform_image_is_not_found() {
        let mut buckets = [0u32; 32];
        buckets[17] = 1000;
        assert_eq!(compute_black_point(&buckets), Err(Error::NotFound));
    }

    #[test]
    fn test_close_peaks_are_not_found() {
        let mut buckets = [0u32; 32];
        buckets[10] = 500;
        buckets[12] = 400;
        assert_eq!(compute_black_point(&buckets), Err(Error::NotFound));
    }

    #[test]
    fn test_bucket_count_is_validated() {
        for len in [0, 24, 512] {
            let buckets = vec![0u32; len];
            assert!(matches!(compute_black_point(&buckets), Err(Error::Invalid(_))), "{len} buckets");
        }

        let mut buckets = [0u32; 256];
        buckets[0] = 100;
        buckets[255] = 100;
        let black_point = compute_black_point(&buckets).unwrap();
        assert!(black_point > 0 && black_point < 255);
    }

    #[test]
    fn test_black_matrix_thresholds_pixels() {
        let data = [10, 240, 240, 10, 30, 220];
        let image = Image::from_gray(&data, 3, 2).unwrap();
        let matrix = GlobalHistogramBinarizer::new(&image).black_matrix().unwrap();
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(1, 0));
        assert!(!matrix.get(2, 0));
        assert!(matrix.get(0, 1));
        assert!(matrix.get(1, 1));
        assert!(!matrix.get(2, 1));
    }

    #[test]
    fn test_blank_image_is_not_found() {
        let image = Image::from_gray(&[255; 64], 8, 8).unwrap();
        let result = GlobalHistogramBinarizer::new(&image).black_matrix();
        assert_eq!(result.unwrap_err(), Error::NotFound);
    }
}
