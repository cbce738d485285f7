//! Sample every column of a located symbol and decode its codewords
//!
//! Starting from the corners found by the detector, the row indicator
//! columns are traced first. They give the symbol shape, which fixes how
//! many data columns to sample. Each data column is then read row by row,
//! seeded from the codewords already found next to it. After row numbers
//! are reconciled the codewords are voted into a grid, error corrected and
//! handed to the bit stream parser.

use super::barcode_metadata::BarcodeMetadata;
use super::barcode_value::BarcodeValue;
use super::bounding_box::BoundingBox;
use super::codeword::Codeword;
use super::codeword_decoder;
use super::common::{
    bit_count_sum, get_codeword, number_of_ec_codewords, pattern_bucket, BARS_IN_MODULE,
    MAX_CODEWORDS_IN_BARCODE,
};
use super::decoded_bit_stream_parser::{self, DecoderResult};
use super::detection_result::{DetectionResult, Reconciliation};
use super::detection_result_column::{DetectionResultColumn, RowIndicator};
use super::ec;
use crate::bit_matrix::BitMatrix;
use crate::point::ResultPoint;
use crate::{Error, Result};

/// How far a codeword start may be moved onto the nearest edge
const CODEWORD_SKEW_SIZE: i32 = 2;
const MAX_ERRORS: usize = 3;
const MAX_EC_CODEWORDS: usize = 512;
const MAX_AMBIGUOUS_TRIES: usize = 100;

/// Decode the symbol whose codeword area is bounded by the four points.
///
/// The left points sit where the start pattern ends and the right points
/// where the stop pattern begins. Either side may be missing, but not
/// both.
pub(crate) fn decode(
    image: &BitMatrix,
    top_left: Option<ResultPoint>,
    bottom_left: Option<ResultPoint>,
    top_right: Option<ResultPoint>,
    bottom_right: Option<ResultPoint>,
    mut min_codeword_width: i32,
    mut max_codeword_width: i32,
) -> Result<DecoderResult> {
    let mut bounding_box = BoundingBox::new(
        image.width(),
        image.height(),
        top_left,
        bottom_left,
        top_right,
        bottom_right,
    )?;

    let mut left_indicator = None;
    let mut right_indicator = None;
    let mut detection_result = None;
    for pass in 0..2 {
        if let Some(start) = top_left {
            left_indicator = Some(row_indicator_column(
                image,
                &bounding_box,
                start,
                true,
                min_codeword_width,
                max_codeword_width,
            ));
        }
        if let Some(start) = top_right {
            right_indicator = Some(row_indicator_column(
                image,
                &bounding_box,
                start,
                false,
                min_codeword_width,
                max_codeword_width,
            ));
        }
        let mut result =
            merge(left_indicator.as_mut(), right_indicator.as_mut()).ok_or(Error::NotFound)?;
        let grown = result.bounding_box().min_y() < bounding_box.min_y()
            || result.bounding_box().max_y() > bounding_box.max_y();
        if pass == 0 && grown {
            // the indicators say rows are missing; trace again over the larger box
            bounding_box = result.bounding_box().clone();
        } else {
            result.set_bounding_box(bounding_box.clone());
            detection_result = Some(result);
            break;
        }
    }
    let mut result = detection_result.ok_or(Error::NotFound)?;

    let max_column = result.column_count() + 1;
    let left_to_right = left_indicator.is_some();
    if let Some(column) = left_indicator {
        result.set_column(0, column);
    }
    if let Some(column) = right_indicator {
        result.set_column(max_column, column);
    }

    for n in 1..=max_column {
        let barcode_column = if left_to_right { n } else { max_column - n };
        if result.column(barcode_column).is_some() {
            continue;
        }
        let indicator = match barcode_column {
            0 => Some(RowIndicator::Left),
            column if column == max_column => Some(RowIndicator::Right),
            _ => None,
        };
        let bounding_box = result.bounding_box().clone();
        result.set_column(barcode_column, DetectionResultColumn::new(&bounding_box, indicator));

        let mut previous_start_column = -1;
        for image_row in bounding_box.min_y()..=bounding_box.max_y() {
            let mut start_column = start_column(&result, barcode_column, image_row, left_to_right);
            if start_column < 0 || start_column > bounding_box.max_x() {
                if previous_start_column == -1 {
                    continue;
                }
                start_column = previous_start_column;
            }
            let Some(codeword) = detect_codeword(
                image,
                bounding_box.min_x(),
                bounding_box.max_x(),
                left_to_right,
                start_column,
                image_row,
                min_codeword_width,
                max_codeword_width,
            ) else {
                continue;
            };
            previous_start_column = start_column;
            min_codeword_width = min_codeword_width.min(codeword.width());
            max_codeword_width = max_codeword_width.max(codeword.width());
            if let Some(column) = result.column_mut(barcode_column) {
                column.set_codeword(image_row, codeword);
            }
        }
    }

    create_decoder_result(&mut result)
}

/// Trace one row indicator column from `start`, first down and then up
/// through the bounding box.
fn row_indicator_column(
    image: &BitMatrix,
    bounding_box: &BoundingBox,
    start: ResultPoint,
    left_to_right: bool,
    min_codeword_width: i32,
    max_codeword_width: i32,
) -> DetectionResultColumn {
    let side = if left_to_right {
        RowIndicator::Left
    } else {
        RowIndicator::Right
    };
    let mut column = DetectionResultColumn::new(bounding_box, Some(side));
    for increment in [1, -1] {
        let mut start_column = start.x() as i32;
        let mut image_row = start.y() as i32;
        while (bounding_box.min_y()..=bounding_box.max_y()).contains(&image_row) {
            if let Some(codeword) = detect_codeword(
                image,
                0,
                image.width() as i32,
                left_to_right,
                start_column,
                image_row,
                min_codeword_width,
                max_codeword_width,
            ) {
                start_column = if left_to_right {
                    codeword.start_x()
                } else {
                    codeword.end_x()
                };
                column.set_codeword(image_row, codeword);
            }
            image_row += increment;
        }
    }
    column
}

/// Combine what the two row indicator columns say into the shape and
/// extent of the symbol.
fn merge(
    mut left: Option<&mut DetectionResultColumn>,
    mut right: Option<&mut DetectionResultColumn>,
) -> Option<DetectionResult> {
    if left.is_none() && right.is_none() {
        return None;
    }
    let metadata = barcode_metadata(left.as_deref_mut(), right.as_deref_mut())?;
    let bounding_box = BoundingBox::merge(
        left.and_then(adjust_bounding_box),
        right.and_then(adjust_bounding_box),
    )?;
    Some(DetectionResult::new(metadata, bounding_box))
}

fn barcode_metadata(
    left: Option<&mut DetectionResultColumn>,
    right: Option<&mut DetectionResultColumn>,
) -> Option<BarcodeMetadata> {
    let Some(left_metadata) = left.and_then(DetectionResultColumn::barcode_metadata) else {
        return right.and_then(DetectionResultColumn::barcode_metadata);
    };
    let Some(right_metadata) = right.and_then(DetectionResultColumn::barcode_metadata) else {
        return Some(left_metadata);
    };
    if left_metadata.column_count() != right_metadata.column_count()
        && left_metadata.error_correction_level() != right_metadata.error_correction_level()
        && left_metadata.row_count() != right_metadata.row_count()
    {
        log::debug!("row indicators disagree: {left_metadata:?} vs {right_metadata:?}");
        return None;
    }
    Some(left_metadata)
}

/// Extend the box of a row indicator column by the rows its codewords say
/// exist above and below the traced part.
fn adjust_bounding_box(column: &mut DetectionResultColumn) -> Option<BoundingBox> {
    let row_heights = column.row_heights()?;
    let max_row_height = row_heights.iter().copied().max().unwrap_or(0) as i32;

    let mut missing_start_rows = 0;
    for &height in &row_heights {
        missing_start_rows += max_row_height - height as i32;
        if height > 0 {
            break;
        }
    }
    let leading_gaps = column.codewords().iter().take_while(|c| c.is_none()).count() as i32;
    missing_start_rows -= missing_start_rows.min(leading_gaps);

    let mut missing_end_rows = 0;
    for &height in row_heights.iter().rev() {
        missing_end_rows += max_row_height - height as i32;
        if height > 0 {
            break;
        }
    }
    let trailing_gaps = column.codewords().iter().rev().take_while(|c| c.is_none()).count() as i32;
    missing_end_rows -= missing_end_rows.min(trailing_gaps);

    let is_left = column.row_indicator() == Some(RowIndicator::Left);
    column
        .bounding_box()
        .add_missing_rows(missing_start_rows, missing_end_rows, is_left)
        .ok()
}

fn is_valid_barcode_column(result: &DetectionResult, barcode_column: isize) -> bool {
    barcode_column >= 0 && barcode_column <= result.column_count() as isize + 1
}

/// Where to look for the codeword of `barcode_column` on `image_row`,
/// judging from codewords already found.
fn start_column(
    result: &DetectionResult,
    barcode_column: usize,
    image_row: i32,
    left_to_right: bool,
) -> i32 {
    let offset: isize = if left_to_right { 1 } else { -1 };
    let near_edge = |codeword: &Codeword| {
        if left_to_right {
            codeword.end_x()
        } else {
            codeword.start_x()
        }
    };

    let previous_index = barcode_column as isize - offset;
    let previous = if is_valid_barcode_column(result, previous_index) {
        result.column(previous_index as usize)
    } else {
        None
    };
    if let Some(codeword) = previous.and_then(|column| column.codeword(image_row)) {
        return near_edge(codeword);
    }
    if let Some(codeword) = result
        .column(barcode_column)
        .and_then(|column| column.codeword_nearby(image_row))
    {
        return if left_to_right {
            codeword.start_x()
        } else {
            codeword.end_x()
        };
    }
    if let Some(codeword) = previous.and_then(|column| column.codeword_nearby(image_row)) {
        return near_edge(codeword);
    }

    let mut skipped_columns = 0;
    let mut column_index = barcode_column as isize;
    while is_valid_barcode_column(result, column_index - offset) {
        column_index -= offset;
        let first = result
            .column(column_index as usize)
            .and_then(|column| column.codewords().iter().flatten().next());
        if let Some(codeword) = first {
            return near_edge(codeword) + offset as i32 * skipped_columns * codeword.width();
        }
        skipped_columns += 1;
    }

    if left_to_right {
        result.bounding_box().min_x()
    } else {
        result.bounding_box().max_x()
    }
}

#[allow(clippy::too_many_arguments)]
fn detect_codeword(
    image: &BitMatrix,
    min_column: i32,
    max_column: i32,
    left_to_right: bool,
    start_column: i32,
    image_row: i32,
    min_codeword_width: i32,
    max_codeword_width: i32,
) -> Option<Codeword> {
    let start_column = adjust_codeword_start_column(
        image,
        min_column,
        max_column,
        left_to_right,
        start_column,
        image_row,
    );
    let mut module_bit_count =
        module_bit_count(image, min_column, max_column, left_to_right, start_column, image_row)?;
    let width = bit_count_sum(&module_bit_count) as i32;
    let (start_x, end_x) = if left_to_right {
        (start_column, start_column + width)
    } else {
        module_bit_count.reverse();
        (start_column - width, start_column)
    };
    if !check_codeword_skew(width, min_codeword_width, max_codeword_width) {
        return None;
    }

    let pattern = codeword_decoder::decoded_value(&module_bit_count)?;
    let value = get_codeword(pattern)?;
    Some(Codeword::new(start_x, end_x, pattern_bucket(pattern), value))
}

/// Element widths starting at `start_column`, read in the scan direction.
///
/// Reading toward the right a codeword starts on a bar, reading toward the
/// left on a space. A codeword cut off by the image edge is accepted when
/// only the last element is missing.
fn module_bit_count(
    image: &BitMatrix,
    min_column: i32,
    max_column: i32,
    left_to_right: bool,
    start_column: i32,
    image_row: i32,
) -> Option<[u32; BARS_IN_MODULE]> {
    let mut counts = [0u32; BARS_IN_MODULE];
    let mut image_column = start_column;
    let mut module_number = 0;
    let increment = if left_to_right { 1 } else { -1 };
    let mut previous_pixel = left_to_right;
    let in_range = |column: i32| {
        if left_to_right {
            column < max_column
        } else {
            column >= min_column
        }
    };

    while in_range(image_column) && module_number < BARS_IN_MODULE {
        if image.get(image_column, image_row) == previous_pixel {
            counts[module_number] += 1;
            image_column += increment;
        } else {
            module_number += 1;
            previous_pixel = !previous_pixel;
        }
    }

    let at_edge = image_column == if left_to_right { max_column } else { min_column };
    let complete = module_number == BARS_IN_MODULE
        || (at_edge && module_number == BARS_IN_MODULE - 1);
    complete.then_some(counts)
}

/// Move the start onto the nearest bar/space edge, unless that edge is
/// more than a couple of pixels away.
fn adjust_codeword_start_column(
    image: &BitMatrix,
    min_column: i32,
    max_column: i32,
    mut left_to_right: bool,
    codeword_start_column: i32,
    image_row: i32,
) -> i32 {
    let mut corrected = codeword_start_column;
    let mut increment = if left_to_right { -1 } else { 1 };
    for _ in 0..2 {
        while (if left_to_right {
            corrected >= min_column
        } else {
            corrected < max_column
        }) && left_to_right == image.get(corrected, image_row)
        {
            if (codeword_start_column - corrected).abs() > CODEWORD_SKEW_SIZE {
                return codeword_start_column;
            }
            corrected += increment;
        }
        increment = -increment;
        left_to_right = !left_to_right;
    }
    corrected
}

fn check_codeword_skew(codeword_size: i32, min_codeword_width: i32, max_codeword_width: i32) -> bool {
    min_codeword_width - CODEWORD_SKEW_SIZE <= codeword_size
        && codeword_size <= max_codeword_width + CODEWORD_SKEW_SIZE
}

fn create_decoder_result(result: &mut DetectionResult) -> Result<DecoderResult> {
    let Reconciliation { passes, unadjusted } = result.reconcile();
    log::debug!("row numbers reconciled in {passes} passes, {unadjusted} codewords left without a row");
    log::trace!("reconciled codewords:\n{result}");

    let mut matrix = barcode_matrix(result);
    adjust_codeword_count(result, &mut matrix)?;

    let column_count = result.column_count();
    let mut codewords = vec![0; result.row_count() * column_count];
    let mut erasures = Vec::new();
    let mut ambiguous_indexes = Vec::new();
    let mut ambiguous_values = Vec::new();
    for (row, cells) in matrix.iter().enumerate() {
        for column in 0..column_count {
            let index = row * column_count + column;
            let values = cells[column + 1].value();
            match values.as_slice() {
                [] => erasures.push(index),
                [value] => codewords[index] = *value,
                _ => {
                    ambiguous_indexes.push(index);
                    ambiguous_values.push(values);
                }
            }
        }
    }
    log::debug!(
        "{} codewords, {} erasures, {} ambiguous",
        codewords.len(),
        erasures.len(),
        ambiguous_indexes.len()
    );

    decode_ambiguous(
        result.error_correction_level(),
        codewords,
        &erasures,
        &ambiguous_indexes,
        &ambiguous_values,
    )
}

/// Vote the codewords of every column into a `rows x (columns + 2)` grid.
fn barcode_matrix(result: &DetectionResult) -> Vec<Vec<BarcodeValue>> {
    let mut matrix =
        vec![vec![BarcodeValue::default(); result.column_count() + 2]; result.row_count()];
    for (column_index, column) in result.columns().iter().enumerate() {
        let Some(column) = column else {
            continue;
        };
        for codeword in column.codewords().iter().flatten() {
            let Ok(row) = usize::try_from(codeword.row_number()) else {
                continue;
            };
            if let Some(cells) = matrix.get_mut(row) {
                cells[column_index].set_value(codeword.value());
            }
        }
    }
    matrix
}

/// The length descriptor is also implied by the symbol shape. Use that when
/// it was not read, and add it as a competing vote when it was read
/// differently.
fn adjust_codeword_count(result: &DetectionResult, matrix: &mut [Vec<BarcodeValue>]) -> Result<()> {
    let Some(cell) = matrix.first_mut().and_then(|row| row.get_mut(1)) else {
        return Err(Error::NotFound);
    };
    let calculated = (result.column_count() * result.row_count()) as i64
        - i64::from(number_of_ec_codewords(result.error_correction_level()));
    let plausible = (1..=i64::from(MAX_CODEWORDS_IN_BARCODE)).contains(&calculated);
    match cell.value().first() {
        None if !plausible => return Err(Error::NotFound),
        None => cell.set_value(calculated as u32),
        Some(&read) if i64::from(read) != calculated && plausible => {
            cell.set_value(calculated as u32)
        }
        Some(_) => {}
    }
    Ok(())
}

/// Try every combination of tied values until error correction accepts
/// one, giving up after a fixed number of attempts.
fn decode_ambiguous(
    ec_level: u32,
    mut codewords: Vec<u32>,
    erasures: &[usize],
    ambiguous_indexes: &[usize],
    ambiguous_values: &[Vec<u32>],
) -> Result<DecoderResult> {
    let mut choices = vec![0; ambiguous_indexes.len()];
    for _ in 0..MAX_AMBIGUOUS_TRIES {
        for ((&index, values), &choice) in ambiguous_indexes.iter().zip(ambiguous_values).zip(&choices) {
            codewords[index] = values[choice];
        }
        match decode_codewords(codewords.clone(), ec_level, erasures) {
            Err(Error::Checksum) => log::trace!("combination {choices:?} failed error correction"),
            other => return other,
        }
        if !next_combination(&mut choices, ambiguous_values) {
            break;
        }
    }
    Err(Error::Checksum)
}

/// Step `choices` to the next combination, first position fastest.
/// Returns `false` once every combination has been visited.
fn next_combination(choices: &mut [usize], values: &[Vec<u32>]) -> bool {
    for (choice, values) in choices.iter_mut().zip(values) {
        if *choice + 1 < values.len() {
            *choice += 1;
            return true;
        }
        *choice = 0;
    }
    false
}

fn decode_codewords(mut codewords: Vec<u32>, ec_level: u32, erasures: &[usize]) -> Result<DecoderResult> {
    if codewords.is_empty() {
        return Err(Error::Format("empty codeword stream"));
    }
    let num_ec_codewords = number_of_ec_codewords(ec_level) as usize;
    let corrected = correct_errors(&mut codewords, erasures, num_ec_codewords)?;
    verify_codeword_count(&mut codewords, num_ec_codewords)?;

    let mut result = decoded_bit_stream_parser::decode(&codewords, ec_level)?;
    result.errors_corrected = corrected;
    result.erasures = erasures.len();
    Ok(result)
}

fn correct_errors(codewords: &mut [u32], erasures: &[usize], num_ec_codewords: usize) -> Result<usize> {
    if erasures.len() > num_ec_codewords / 2 + MAX_ERRORS || num_ec_codewords > MAX_EC_CODEWORDS {
        return Err(Error::Checksum);
    }
    let corrected = ec::decode(codewords, num_ec_codewords)?;
    if corrected > 0 {
        log::debug!("corrected {corrected} codewords");
    }
    Ok(corrected)
}

/// Check the length descriptor against the stream, filling it in when it
/// reads zero.
fn verify_codeword_count(codewords: &mut [u32], num_ec_codewords: usize) -> Result<()> {
    if codewords.len() < 4 {
        return Err(Error::Format("fewer than four codewords"));
    }
    let length = codewords[0] as usize;
    if length > codewords.len() {
        return Err(Error::Format("length descriptor exceeds symbol"));
    }
    if length == 0 {
        if num_ec_codewords >= codewords.len() {
            return Err(Error::Format("no room for data codewords"));
        }
        codewords[0] = (codewords.len() - num_ec_codewords) as u32;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::writer::Pdf417Writer;

    #[test]
    fn test_verify_codeword_count() {
        let mut codewords = vec![0, 1, 2, 3, 4, 5];
        verify_codeword_count(&mut codewords, 2).unwrap();
        assert_eq!(codewords[0], 4);

        assert!(verify_codeword_count(&mut [0, 1, 2], 2).is_err());
        assert!(verify_codeword_count(&mut [7, 1, 2, 3, 4, 5], 2).is_err());
        assert!(verify_codeword_count(&mut [0, 1, 2, 3], 4).is_err());
        assert!(verify_codeword_count(&mut [6, 1, 2, 3, 4, 5], 2).is_ok());
    }

    #[test]
    fn test_check_codeword_skew() {
        assert!(check_codeword_skew(34, 34, 34));
        assert!(check_codeword_skew(32, 34, 36));
        assert!(check_codeword_skew(38, 34, 36));
        assert!(!check_codeword_skew(31, 34, 36));
        assert!(!check_codeword_skew(39, 34, 36));
    }

    #[test]
    fn test_next_combination_visits_everything_once() {
        let values = vec![vec![1, 2], vec![3, 4, 5]];
        let mut choices = vec![0, 0];
        let mut seen = vec![choices.clone()];
        while next_combination(&mut choices, &values) {
            seen.push(choices.clone());
        }
        assert_eq!(
            seen,
            vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1], vec![0, 2], vec![1, 2]]
        );
        assert_eq!(choices, vec![0, 0]);
        assert!(!next_combination(&mut [], &[]));
    }

    #[test]
    fn test_module_bit_count_reads_both_directions() {
        // a space, then 3 2 1 1 2 3 1 4 and a closing bar
        let row = ".XXX..X.XX...X....X";
        let image = BitMatrix::parse(row, "X", ".").unwrap();
        assert_eq!(
            module_bit_count(&image, 0, 19, true, 1, 0),
            Some([3, 2, 1, 1, 2, 3, 1, 4])
        );
        // reading back starts on the last space
        assert_eq!(
            module_bit_count(&image, 0, 19, false, 17, 0),
            Some([4, 1, 3, 2, 1, 1, 2, 3])
        );
        // runs into the right edge after three elements
        assert_eq!(module_bit_count(&image, 0, 19, true, 13, 0), None);
    }

    #[test]
    fn test_adjust_codeword_start_column() {
        let image = BitMatrix::parse("....XXXX....", "X", ".").unwrap();
        // one pixel inside the bar moves back to its edge
        assert_eq!(adjust_codeword_start_column(&image, 0, 12, true, 5, 0), 4);
        // one pixel before it moves forward
        assert_eq!(adjust_codeword_start_column(&image, 0, 12, true, 3, 0), 4);
        // too far from any edge stays put
        assert_eq!(adjust_codeword_start_column(&image, 0, 12, true, 7, 0), 7);
    }

    #[test]
    fn test_adjust_codeword_count_fills_missing_length() {
        let metadata = BarcodeMetadata::new(2, 1, 2, 0).unwrap();
        let bbox = crate::test_utils::test_bounding_box(30);
        let result = DetectionResult::new(metadata, bbox);
        let mut matrix = barcode_matrix(&result);
        adjust_codeword_count(&result, &mut matrix).unwrap();
        // 3 rows of 2 minus 2 EC codewords
        assert_eq!(matrix[0][1].value(), vec![4]);

        matrix[0][1] = BarcodeValue::default();
        matrix[0][1].set_value(9);
        adjust_codeword_count(&result, &mut matrix).unwrap();
        assert_eq!(matrix[0][1].value(), vec![4, 9]);
    }

    #[test]
    fn test_decode_ambiguous_corrects_bad_first_choice() {
        let writer = Pdf417Writer::new(3, 2).unwrap();
        let data = [900, 7 * 30 + 4, 11 * 30 + 11, 14 * 30 + 29];
        let (codewords, _) = writer.symbol_codewords(&data).unwrap();
        let expected = decode_codewords(codewords.clone(), 2, &[]).unwrap();
        assert_eq!(expected.data, b"HELLO");

        let ambiguous_indexes = [2, 5];
        let ambiguous_values: Vec<Vec<u32>> = ambiguous_indexes
            .iter()
            .map(|&index| {
                let right = codewords[index];
                vec![right - 1, right]
            })
            .collect();
        let mut damaged = codewords.clone();
        damaged[2] = 0;
        damaged[5] = 0;
        let result = decode_ambiguous(2, damaged, &[], &ambiguous_indexes, &ambiguous_values).unwrap();
        assert_eq!(result.data, b"HELLO");
    }

    #[test]
    fn test_too_many_erasures_is_checksum_error() {
        let writer = Pdf417Writer::new(3, 0).unwrap();
        let (codewords, _) = writer.symbol_codewords(&[1, 2, 3]).unwrap();
        let erasures: Vec<usize> = (0..5).collect();
        assert_eq!(
            decode_ambiguous(0, codewords, &erasures, &[], &[]),
            Err(Error::Checksum)
        );
    }

    /// Corners of the codeword area of a symbol drawn by [`Pdf417Writer`]
    /// with module width 2, row height 6 and a quiet zone of 4.
    fn codeword_area(columns: u32, rows: u32) -> [ResultPoint; 4] {
        let top = 8.0;
        let bottom = top + (rows * 6 - 1) as f32;
        let left = 8.0 + 17.0 * 2.0;
        let right = 8.0 + (17 * (columns + 3) * 2) as f32;
        [
            ResultPoint::new(left, top),
            ResultPoint::new(left, bottom),
            ResultPoint::new(right, top),
            ResultPoint::new(right, bottom),
        ]
    }

    #[test]
    fn test_decode_clean_symbol() {
        let writer = Pdf417Writer::new(3, 2).unwrap();
        let payload = b"PDF417 scanning";
        let image = writer.encode_bytes(payload).unwrap();
        let rows = (image.height() - 16) / 6;
        let [tl, bl, tr, br] = codeword_area(3, rows);
        let result = decode(&image, Some(tl), Some(bl), Some(tr), Some(br), 34, 34).unwrap();
        assert_eq!(result.data, payload);
        assert_eq!(result.ec_level, 2);
        assert_eq!(result.errors_corrected, 0);
        assert_eq!(result.erasures, 0);
    }

    #[test]
    fn test_decode_from_right_indicator_only() {
        let writer = Pdf417Writer::new(2, 1).unwrap();
        let image = writer.encode_bytes(b"right side").unwrap();
        let rows = (image.height() - 16) / 6;
        let [_, _, tr, br] = codeword_area(2, rows);
        let result = decode(&image, None, None, Some(tr), Some(br), 34, 34).unwrap();
        assert_eq!(result.data, b"right side");
    }

    #[test]
    fn test_decode_without_corners_is_not_found() {
        let image = BitMatrix::new(40, 40);
        assert_eq!(decode(&image, None, None, None, None, 34, 34), Err(Error::NotFound));
    }
}
