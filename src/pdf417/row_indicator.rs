//! Row indicator column logic
//!
//! The outermost codeword of every row encodes the row number divided by
//! three plus one of three pieces of symbol metadata, chosen by the row's
//! cluster. On the left side rows cycle through (row count / 3,
//! EC level and row count % 3, column count); the right side uses the same
//! pieces shifted by one row.

use super::barcode_metadata::BarcodeMetadata;
use super::barcode_value::BarcodeValue;
use super::codeword::Codeword;
use super::detection_result_column::{DetectionResultColumn, RowIndicator};

impl DetectionResultColumn {
    fn is_left(&self) -> bool {
        self.row_indicator() == Some(RowIndicator::Left)
    }

    /// Which metadata slot a row indicator row carries
    fn metadata_slot(&self, codeword: &Codeword) -> i32 {
        let row_number = codeword.row_number();
        if self.is_left() {
            row_number % 3
        } else {
            (row_number + 2) % 3
        }
    }

    fn set_row_numbers(&mut self) {
        for codeword in self.codewords_mut().iter_mut().flatten() {
            codeword.set_row_number_as_row_indicator_column();
        }
    }

    /// First and last codeword slots covered by this side of the bounding box
    fn indicator_row_range(&self) -> (i32, i32) {
        let bounding_box = self.bounding_box();
        let (top, bottom) = if self.is_left() {
            (bounding_box.top_left(), bounding_box.bottom_left())
        } else {
            (bounding_box.top_right(), bounding_box.bottom_right())
        };
        (
            self.image_row_to_codeword_index(top.y() as i32),
            self.image_row_to_codeword_index(bottom.y() as i32),
        )
    }

    /// Assign row numbers from the indicator values and drop codewords whose
    /// row number jumps in a way the neighbouring rows cannot explain.
    pub(crate) fn adjust_complete_indicator_column_row_numbers(&mut self, metadata: &BarcodeMetadata) {
        self.set_row_numbers();
        self.remove_incorrect_codewords(metadata);
        let (first_row, last_row) = self.indicator_row_range();
        let row_count = metadata.row_count() as i32;
        let codewords = self.codewords_mut();

        let mut barcode_row = -1;
        let mut max_row_height = 1;
        let mut current_row_height = 0;
        for codewords_row in first_row.max(0)..last_row.min(codewords.len() as i32) {
            let index = codewords_row as usize;
            let Some(codeword) = codewords[index] else {
                continue;
            };
            let row_difference = codeword.row_number() - barcode_row;
            if row_difference == 0 {
                current_row_height += 1;
            } else if row_difference == 1 {
                max_row_height = max_row_height.max(current_row_height);
                current_row_height = 1;
                barcode_row = codeword.row_number();
            } else if row_difference < 0
                || codeword.row_number() >= row_count
                || row_difference > codewords_row
            {
                codewords[index] = None;
            } else {
                let checked_rows = if max_row_height > 2 {
                    (max_row_height - 2) * row_difference
                } else {
                    row_difference
                };
                let mut close_previous_codeword_found = checked_rows >= codewords_row;
                let mut i = 1;
                while i <= checked_rows && !close_previous_codeword_found {
                    // there must be no codeword right above a row jump
                    close_previous_codeword_found = codewords[index - i as usize].is_some();
                    i += 1;
                }
                if close_previous_codeword_found {
                    codewords[index] = None;
                } else {
                    barcode_row = codeword.row_number();
                    current_row_height = 1;
                }
            }
        }
    }

    /// Number of image rows sampled for each symbol row, or `None` if the
    /// column carries no usable metadata.
    pub(crate) fn row_heights(&mut self) -> Option<Vec<u32>> {
        let metadata = self.barcode_metadata()?;
        self.adjust_incomplete_indicator_column_row_numbers(&metadata);
        let mut heights = vec![0; metadata.row_count() as usize];
        for codeword in self.codewords().iter().flatten() {
            if let Some(height) = usize::try_from(codeword.row_number())
                .ok()
                .and_then(|row| heights.get_mut(row))
            {
                *height += 1;
            }
        }
        Some(heights)
    }

    /// Like the complete variant but trusts any forward jump; used before
    /// the bounding box is final.
    fn adjust_incomplete_indicator_column_row_numbers(&mut self, metadata: &BarcodeMetadata) {
        let (first_row, last_row) = self.indicator_row_range();
        let row_count = metadata.row_count() as i32;
        let codewords = self.codewords_mut();

        let mut barcode_row = -1;
        let mut max_row_height = 1;
        let mut current_row_height = 0;
        for codewords_row in first_row.max(0)..last_row.min(codewords.len() as i32) {
            let index = codewords_row as usize;
            let Some(codeword) = codewords[index].as_mut() else {
                continue;
            };
            codeword.set_row_number_as_row_indicator_column();
            let row_difference = codeword.row_number() - barcode_row;
            if row_difference == 0 {
                current_row_height += 1;
            } else if row_difference == 1 {
                max_row_height = max_row_height.max(current_row_height);
                current_row_height = 1;
                barcode_row = codeword.row_number();
            } else if codeword.row_number() >= row_count {
                codewords[index] = None;
            } else {
                barcode_row = codeword.row_number();
                current_row_height = 1;
            }
        }
        log::trace!("row indicator max row height {max_row_height}");
    }

    /// Vote on the symbol shape across every codeword of the column.
    ///
    /// Codewords that disagree with the winning shape are removed.
    pub(crate) fn barcode_metadata(&mut self) -> Option<BarcodeMetadata> {
        let mut column_count = BarcodeValue::default();
        let mut row_count_upper_part = BarcodeValue::default();
        let mut row_count_lower_part = BarcodeValue::default();
        let mut ec_level = BarcodeValue::default();

        self.set_row_numbers();
        for codeword in self.codewords().iter().flatten() {
            let indicator_value = codeword.value() % 30;
            match self.metadata_slot(codeword) {
                0 => row_count_upper_part.set_value(indicator_value * 3 + 1),
                1 => {
                    ec_level.set_value(indicator_value / 3);
                    row_count_lower_part.set_value(indicator_value % 3);
                }
                _ => column_count.set_value(indicator_value + 1),
            }
        }

        let metadata = BarcodeMetadata::new(
            *column_count.value().first()?,
            *row_count_upper_part.value().first()?,
            *row_count_lower_part.value().first()?,
            *ec_level.value().first()?,
        );
        match metadata {
            Some(metadata) => {
                self.remove_incorrect_codewords(&metadata);
                Some(metadata)
            }
            None => {
                log::debug!("row indicator column announces an impossible symbol shape");
                None
            }
        }
    }

    fn remove_incorrect_codewords(&mut self, metadata: &BarcodeMetadata) {
        let is_left = self.is_left();
        for slot in self.codewords_mut() {
            let Some(codeword) = slot else {
                continue;
            };
            let indicator_value = codeword.value() % 30;
            let mut row_number = codeword.row_number();
            if row_number > metadata.row_count() as i32 {
                *slot = None;
                continue;
            }
            if !is_left {
                row_number += 2;
            }
            let consistent = match row_number % 3 {
                0 => indicator_value * 3 + 1 == metadata.row_count_upper_part(),
                1 => {
                    indicator_value / 3 == metadata.error_correction_level()
                        && indicator_value % 3 == metadata.row_count_lower_part()
                }
                _ => indicator_value + 1 == metadata.column_count(),
            };
            if !consistent {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{indicator_codeword, test_bounding_box};

    const ROWS: u32 = 6;
    const COLUMNS: u32 = 4;
    const EC_LEVEL: u32 = 1;

    fn indicator_column(side: RowIndicator, rows: &[Option<u32>]) -> DetectionResultColumn {
        let bbox = test_bounding_box(rows.len() as i32);
        let mut column = DetectionResultColumn::new(&bbox, Some(side));
        for (image_row, row) in rows.iter().enumerate() {
            if let Some(row) = row {
                let codeword = indicator_codeword(side, *row, ROWS, COLUMNS, EC_LEVEL);
                column.set_codeword(image_row as i32, codeword);
            }
        }
        column
    }

    fn two_pixel_rows() -> Vec<Option<u32>> {
        (0..ROWS).flat_map(|row| [Some(row), Some(row)]).collect()
    }

    #[test]
    fn test_left_metadata() {
        let mut column = indicator_column(RowIndicator::Left, &two_pixel_rows());
        let metadata = column.barcode_metadata().unwrap();
        assert_eq!(metadata.column_count(), COLUMNS);
        assert_eq!(metadata.row_count(), ROWS);
        assert_eq!(metadata.error_correction_level(), EC_LEVEL);
    }

    #[test]
    fn test_right_metadata_is_shifted() {
        let mut column = indicator_column(RowIndicator::Right, &two_pixel_rows());
        let metadata = column.barcode_metadata().unwrap();
        assert_eq!(metadata.column_count(), COLUMNS);
        assert_eq!(metadata.row_count(), ROWS);
        assert_eq!(metadata.error_correction_level(), EC_LEVEL);
    }

    #[test]
    fn test_metadata_needs_every_slot() {
        // rows 0 and 3 both carry the upper row count only
        let mut column = indicator_column(RowIndicator::Left, &[Some(0), Some(3)]);
        assert!(column.barcode_metadata().is_none());
    }

    #[test]
    fn test_metadata_outvotes_misread_codeword() {
        let mut rows = two_pixel_rows();
        rows.push(Some(5));
        let bbox = test_bounding_box(rows.len() as i32 + 1);
        let mut column = DetectionResultColumn::new(&bbox, Some(RowIndicator::Left));
        for (image_row, row) in rows.iter().enumerate() {
            let row = row.unwrap();
            let codeword = indicator_codeword(RowIndicator::Left, row, ROWS, COLUMNS, EC_LEVEL);
            column.set_codeword(image_row as i32, codeword);
        }
        // a row 2 codeword claiming 9 columns
        column.set_codeword(rows.len() as i32, Codeword::new(0, 17, 6, 8));
        let metadata = column.barcode_metadata().unwrap();
        assert_eq!(metadata.column_count(), COLUMNS);
        assert!(column.codeword(rows.len() as i32).is_none());
    }

    #[test]
    fn test_row_heights() {
        let mut rows = two_pixel_rows();
        rows[4] = None;
        let mut column = indicator_column(RowIndicator::Left, &rows);
        assert_eq!(column.row_heights(), Some(vec![2, 2, 1, 2, 2, 2]));
    }

    #[test]
    fn test_complete_adjustment_drops_backwards_jump() {
        let rows = [
            Some(0),
            Some(0),
            Some(1),
            Some(1),
            Some(0),
            Some(2),
            Some(2),
            Some(3),
        ];
        let mut column = indicator_column(RowIndicator::Left, &rows);
        let metadata = column.barcode_metadata().unwrap();
        column.adjust_complete_indicator_column_row_numbers(&metadata);
        let row_numbers: Vec<Option<i32>> = column
            .codewords()
            .iter()
            .map(|codeword| codeword.map(|codeword| codeword.row_number()))
            .collect();
        assert_eq!(
            row_numbers,
            vec![
                Some(0),
                Some(0),
                Some(1),
                Some(1),
                None,
                Some(2),
                Some(2),
                Some(3)
            ]
        );
    }
}
