//! Locate PDF417 symbols by their start and stop guard patterns
//!
//! Rows are scanned a few pixels apart for the start pattern. Once found it
//! is followed up to its first row and down to its last; the stop pattern is
//! searched the same way to the right of it. A symbol is reported as eight
//! optional vertices:
//!
//! | index | point |
//! |---|---|
//! | 0 | top left, outer edge of the start pattern |
//! | 1 | bottom left, outer edge of the start pattern |
//! | 2 | top right, outer edge of the stop pattern |
//! | 3 | bottom right, outer edge of the stop pattern |
//! | 4 | top, where the start pattern ends |
//! | 5 | bottom, where the start pattern ends |
//! | 6 | top, where the stop pattern begins |
//! | 7 | bottom, where the stop pattern begins |

use crate::bit_matrix::BitMatrix;
use crate::point::ResultPoint;

const INDEXES_START_PATTERN: [usize; 4] = [0, 4, 1, 5];
const INDEXES_STOP_PATTERN: [usize; 4] = [6, 2, 7, 3];

const MAX_AVG_VARIANCE: f32 = 0.42;
const MAX_INDIVIDUAL_VARIANCE: f32 = 0.8;

const START_PATTERN: [u32; 8] = [8, 1, 1, 1, 1, 1, 1, 3];
const STOP_PATTERN: [u32; 9] = [7, 1, 1, 3, 1, 1, 1, 2, 1];

/// How far left of the scan position a pattern may start
const MAX_PIXEL_DRIFT: i32 = 3;
/// How far a pattern may wander between consecutive rows
const MAX_PATTERN_DRIFT: i32 = 5;
/// Rows without the pattern tolerated before a symbol is considered to end
const SKIPPED_ROW_COUNT_MAX: i32 = 25;
const ROW_STEP: i32 = 5;
const BARCODE_MIN_HEIGHT: i32 = 10;

/// Corner points of one symbol, see the module documentation
pub(crate) type Vertices = [Option<ResultPoint>; 8];

/// Symbols found in a binarized image
#[derive(Debug, Clone)]
pub(crate) struct DetectorResult {
    /// The image the vertices refer to; rotated when `rotated` is set
    pub(crate) bits: BitMatrix,
    pub(crate) symbols: Vec<Vertices>,
    pub(crate) rotated: bool,
}

/// Find one symbol, or every symbol when `multiple` is set.
///
/// When nothing is found the image is turned upside down and searched
/// again, so symbols printed rotated by 180 degrees are read as well.
pub(crate) fn detect(bits: &BitMatrix, multiple: bool) -> DetectorResult {
    let symbols = detect_in(bits, multiple);
    if !symbols.is_empty() {
        log::debug!("detector found {} symbols", symbols.len());
        return DetectorResult {
            bits: bits.clone(),
            symbols,
            rotated: false,
        };
    }

    let mut rotated = bits.clone();
    rotated.rotate180();
    let symbols = detect_in(&rotated, multiple);
    log::debug!("detector found {} symbols after rotating", symbols.len());
    DetectorResult {
        bits: rotated,
        symbols,
        rotated: true,
    }
}

fn detect_in(matrix: &BitMatrix, multiple: bool) -> Vec<Vertices> {
    let mut symbols: Vec<Vertices> = Vec::new();
    let mut row = 0;
    let mut column = 0;
    let mut found_in_row = false;
    while row < matrix.height() as i32 {
        let vertices = find_vertices(matrix, row, column);

        if vertices[0].is_none() && vertices[3].is_none() {
            if !found_in_row {
                break;
            }
            // continue below the lowest symbol found so far
            found_in_row = false;
            column = 0;
            for symbol in &symbols {
                for point in [symbol[1], symbol[3]].into_iter().flatten() {
                    row = row.max(point.y() as i32);
                }
            }
            row += ROW_STEP;
            continue;
        }

        found_in_row = true;
        log::trace!("symbol candidate at row {row}: {vertices:?}");
        symbols.push(vertices);
        if !multiple {
            break;
        }
        // look for another symbol to the right of this one
        match vertices[2].or(vertices[4]) {
            Some(point) => {
                column = point.x() as i32;
                row = point.y() as i32;
            }
            None => break,
        }
    }
    symbols
}

fn find_vertices(matrix: &BitMatrix, start_row: i32, start_column: i32) -> Vertices {
    let mut result: Vertices = [None; 8];

    let start = find_rows_with_pattern(matrix, start_row, start_column, &START_PATTERN);
    copy_to_result(&mut result, start, &INDEXES_START_PATTERN);

    let (stop_row, stop_column) = match result[4] {
        Some(point) => (point.y() as i32, point.x() as i32),
        None => (start_row, start_column),
    };
    let stop = find_rows_with_pattern(matrix, stop_row, stop_column, &STOP_PATTERN);
    copy_to_result(&mut result, stop, &INDEXES_STOP_PATTERN);
    result
}

fn copy_to_result(result: &mut Vertices, found: [Option<ResultPoint>; 4], indexes: &[usize; 4]) {
    for (&index, point) in indexes.iter().zip(found) {
        result[index] = point;
    }
}

/// Outer and inner edge of `pattern` on its first and last row, in that
/// order: top outer, top inner, bottom outer, bottom inner.
fn find_rows_with_pattern(
    matrix: &BitMatrix,
    mut start_row: i32,
    start_column: i32,
    pattern: &[u32],
) -> [Option<ResultPoint>; 4] {
    let height = matrix.height() as i32;
    let mut result = [None; 4];
    let mut counters = vec![0u32; pattern.len()];

    let mut found = None;
    while start_row < height {
        if let Some(mut location) =
            find_guard_pattern(matrix, start_column, start_row, pattern, &mut counters)
        {
            // walk up to the first row showing the pattern
            while start_row > 0 {
                match find_guard_pattern(matrix, start_column, start_row - 1, pattern, &mut counters) {
                    Some(previous) => {
                        location = previous;
                        start_row -= 1;
                    }
                    None => break,
                }
            }
            found = Some(location);
            break;
        }
        start_row += ROW_STEP;
    }

    let mut stop_row = start_row + 1;
    if let Some((start_x, end_x)) = found {
        result[0] = Some(ResultPoint::from((start_x, start_row)));
        result[1] = Some(ResultPoint::from((end_x, start_row)));

        let mut skipped_row_count = 0;
        let mut previous = (start_x, end_x);
        while stop_row < height {
            let location = find_guard_pattern(matrix, previous.0, stop_row, pattern, &mut counters);
            match location {
                Some(location)
                    if (previous.0 - location.0).abs() < MAX_PATTERN_DRIFT
                        && (previous.1 - location.1).abs() < MAX_PATTERN_DRIFT =>
                {
                    previous = location;
                    skipped_row_count = 0;
                }
                _ if skipped_row_count > SKIPPED_ROW_COUNT_MAX => break,
                _ => skipped_row_count += 1,
            }
            stop_row += 1;
        }
        stop_row -= skipped_row_count + 1;
        result[2] = Some(ResultPoint::from((previous.0, stop_row)));
        result[3] = Some(ResultPoint::from((previous.1, stop_row)));
    }

    if stop_row - start_row < BARCODE_MIN_HEIGHT {
        return [None; 4];
    }
    result
}

/// Start and end column of `pattern` on `row`, searching right from
/// `column`. The end is the first pixel after the pattern.
fn find_guard_pattern(
    matrix: &BitMatrix,
    column: i32,
    row: i32,
    pattern: &[u32],
    counters: &mut [u32],
) -> Option<(i32, i32)> {
    let width = matrix.width() as i32;
    counters.fill(0);

    let mut pattern_start = column;
    let mut pixel_drift = 0;
    while matrix.get(pattern_start, row) && pattern_start > 0 && pixel_drift < MAX_PIXEL_DRIFT {
        pixel_drift += 1;
        pattern_start -= 1;
    }

    let last = pattern.len() - 1;
    let mut counter_position = 0;
    let mut is_white = false;
    let mut x = pattern_start;
    while x < width {
        if matrix.get(x, row) != is_white {
            counters[counter_position] += 1;
        } else {
            if counter_position == last {
                if pattern_match_variance(counters, pattern) < MAX_AVG_VARIANCE {
                    return Some((pattern_start, x));
                }
                pattern_start += (counters[0] + counters[1]) as i32;
                counters.copy_within(2.., 0);
                counters[last - 1] = 0;
                counters[last] = 0;
                counter_position -= 1;
            } else {
                counter_position += 1;
            }
            counters[counter_position] = 1;
            is_white = !is_white;
        }
        x += 1;
    }

    (counter_position == last && pattern_match_variance(counters, pattern) < MAX_AVG_VARIANCE)
        .then_some((pattern_start, x - 1))
}

/// Average deviation per pixel of the measured run lengths from the
/// pattern, or infinity when any single run is too far off.
fn pattern_match_variance(counters: &[u32], pattern: &[u32]) -> f32 {
    let total: u32 = counters.iter().sum();
    let pattern_length: u32 = pattern.iter().sum();
    if total < pattern_length {
        return f32::INFINITY;
    }
    let unit_bar_width = total as f32 / pattern_length as f32;
    let max_individual_variance = MAX_INDIVIDUAL_VARIANCE * unit_bar_width;

    let mut total_variance = 0.0;
    for (&counter, &expected) in counters.iter().zip(pattern) {
        let scaled = expected as f32 * unit_bar_width;
        let variance = (counter as f32 - scaled).abs();
        if variance > max_individual_variance {
            return f32::INFINITY;
        }
        total_variance += variance;
    }
    total_variance / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::writer::Pdf417Writer;

    #[test]
    fn test_pattern_match_variance() {
        assert_eq!(pattern_match_variance(&[16, 2, 2, 2, 2, 2, 2, 6], &START_PATTERN), 0.0);
        assert!(pattern_match_variance(&[15, 2, 3, 2, 2, 2, 2, 6], &START_PATTERN) < MAX_AVG_VARIANCE);
        assert_eq!(
            pattern_match_variance(&[4, 4, 4, 4, 4, 4, 4, 4], &START_PATTERN),
            f32::INFINITY
        );
        // too short to be scaled down
        assert_eq!(pattern_match_variance(&[1; 8], &START_PATTERN), f32::INFINITY);
    }

    #[test]
    fn test_find_guard_pattern_in_row() {
        // two pixels per module, start pattern at 3
        let row = format!("...{}{}{}X", "X".repeat(16), "..XX".repeat(3), "......");
        let matrix = BitMatrix::parse(&row, "X", ".").unwrap();
        let mut counters = [0; 8];
        assert_eq!(
            find_guard_pattern(&matrix, 0, 0, &START_PATTERN, &mut counters),
            Some((3, 37))
        );
        // starting a pixel inside the first bar drifts back to its edge
        assert_eq!(
            find_guard_pattern(&matrix, 5, 0, &START_PATTERN, &mut counters),
            Some((3, 37))
        );
    }

    #[test]
    fn test_detect_rendered_symbol() {
        let writer = Pdf417Writer::new(3, 2).unwrap();
        let bits = writer.encode_bytes(b"detector").unwrap();
        let result = detect(&bits, false);
        assert!(!result.rotated);
        assert_eq!(result.symbols.len(), 1);

        let vertices = result.symbols[0];
        let rows = (bits.height() - 16) / 6;
        let bottom = (8 + rows * 6 - 1) as f32;
        assert_eq!(vertices[0], Some(ResultPoint::new(8.0, 8.0)));
        assert_eq!(vertices[4], Some(ResultPoint::new(42.0, 8.0)));
        assert_eq!(vertices[5], Some(ResultPoint::new(42.0, bottom)));
        let stop = (8 + 17 * 6 * 2) as f32;
        assert_eq!(vertices[6], Some(ResultPoint::new(stop, 8.0)));
        assert_eq!(vertices[7], Some(ResultPoint::new(stop, bottom)));
    }

    #[test]
    fn test_detect_upside_down_symbol() {
        let writer = Pdf417Writer::new(2, 1).unwrap();
        let mut bits = writer.encode_bytes(b"flipped").unwrap();
        bits.rotate180();
        let result = detect(&bits, false);
        assert!(result.rotated);
        assert_eq!(result.symbols.len(), 1);
    }

    #[test]
    fn test_detect_nothing_in_blank_image() {
        let result = detect(&BitMatrix::new(100, 60), true);
        assert!(result.symbols.is_empty());
    }
}
