//! Row number reconciliation across all columns of a symbol
//!
//! Data codewords do not carry their row number, only their cluster. The row
//! indicator columns do, so row numbers are pushed from the indicators into
//! the data columns, then from codewords that already have a row number into
//! neighbours of the same cluster, until no more progress is made.

use std::fmt;

use super::barcode_metadata::BarcodeMetadata;
use super::bounding_box::BoundingBox;
use super::codeword::Codeword;
use super::detection_result_column::DetectionResultColumn;

/// Stop walking away from a row indicator after this many codewords that
/// could not take its row number.
const ADJUST_ROW_NUMBER_SKIP: u32 = 2;

/// Outcome of [`DetectionResult::reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reconciliation {
    pub passes: usize,
    /// Data codewords still without a valid row number
    pub unadjusted: usize,
}

/// All sampled columns of one symbol.
///
/// Column 0 is the left row indicator, columns `1..=column_count` hold data
/// and column `column_count + 1` is the right row indicator. Any of them may
/// be missing.
#[derive(Debug, Clone)]
pub(crate) struct DetectionResult {
    metadata: BarcodeMetadata,
    columns: Vec<Option<DetectionResultColumn>>,
    bounding_box: BoundingBox,
    column_count: usize,
}

impl DetectionResult {
    pub(crate) fn new(metadata: BarcodeMetadata, bounding_box: BoundingBox) -> Self {
        let column_count = metadata.column_count() as usize;
        Self {
            metadata,
            columns: vec![None; column_count + 2],
            bounding_box,
            column_count,
        }
    }

    pub(crate) fn metadata(&self) -> &BarcodeMetadata {
        &self.metadata
    }

    pub(crate) fn column_count(&self) -> usize {
        self.column_count
    }

    pub(crate) fn row_count(&self) -> usize {
        self.metadata.row_count() as usize
    }

    pub(crate) fn error_correction_level(&self) -> u32 {
        self.metadata.error_correction_level()
    }

    pub(crate) fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub(crate) fn set_bounding_box(&mut self, bounding_box: BoundingBox) {
        self.bounding_box = bounding_box;
    }

    pub(crate) fn set_column(&mut self, index: usize, column: DetectionResultColumn) {
        if let Some(slot) = self.columns.get_mut(index) {
            *slot = Some(column);
        }
    }

    pub(crate) fn column(&self, index: usize) -> Option<&DetectionResultColumn> {
        self.columns.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> Option<&mut DetectionResultColumn> {
        self.columns.get_mut(index).and_then(Option::as_mut)
    }

    pub(crate) fn columns(&self) -> &[Option<DetectionResultColumn>] {
        &self.columns
    }

    fn right_indicator_index(&self) -> usize {
        self.column_count + 1
    }

    /// Assign row numbers to as many data codewords as possible.
    ///
    /// Both row indicator columns are cleaned up first, then passes run
    /// while the number of data codewords without a row keeps shrinking.
    /// The result is a fixed point: another pass changes nothing.
    pub(crate) fn reconcile(&mut self) -> Reconciliation {
        let metadata = self.metadata;
        let right = self.right_indicator_index();
        for index in [0, right] {
            if let Some(column) = self.columns[index].as_mut() {
                column.adjust_complete_indicator_column_row_numbers(&metadata);
            }
        }

        let mut passes = 0;
        let mut unadjusted = usize::MAX;
        loop {
            let previous = unadjusted;
            // Counted after the neighbour step, not after the indicator
            // step alone: an unchanged count means the pass changed nothing.
            unadjusted = self.adjust_row_numbers();
            passes += 1;
            log::trace!("reconciliation pass {passes}: {unadjusted} codewords unadjusted");
            if unadjusted == 0 || unadjusted >= previous {
                break;
            }
        }

        Reconciliation { passes, unadjusted }
    }

    /// One reconciliation pass. Returns the number of data codewords still
    /// without a row number afterwards.
    pub(crate) fn adjust_row_numbers(&mut self) -> usize {
        if self.adjust_row_numbers_by_row() == 0 {
            return self.unadjusted_count();
        }
        for column in 1..=self.column_count {
            let rows = self.columns[column]
                .as_ref()
                .map_or(0, |column| column.codewords().len());
            for row in 0..rows {
                let needs_row = self.codeword_at(column, row as i32)
                    .is_some_and(|codeword| !codeword.has_valid_row_number());
                if needs_row {
                    self.adjust_row_number_from_neighbours(column, row);
                }
            }
        }
        self.unadjusted_count()
    }

    /// Data codewords that have no valid row number
    pub(crate) fn unadjusted_count(&self) -> usize {
        self.columns[1..=self.column_count]
            .iter()
            .flatten()
            .flat_map(|column| column.codewords().iter().flatten())
            .filter(|codeword| !codeword.has_valid_row_number())
            .count()
    }

    fn adjust_row_numbers_by_row(&mut self) -> usize {
        self.adjust_row_numbers_from_both_indicators();
        self.adjust_row_numbers_from_indicator(false) + self.adjust_row_numbers_from_indicator(true)
    }

    /// Rows where both indicators agree override whatever the data columns
    /// hold. Codewords whose cluster contradicts the agreed row are dropped.
    fn adjust_row_numbers_from_both_indicators(&mut self) {
        let right = self.right_indicator_index();
        let (Some(left_column), Some(right_column)) = (self.column(0), self.column(right)) else {
            return;
        };
        let agreed_rows: Vec<(usize, i32)> = left_column
            .codewords()
            .iter()
            .zip(right_column.codewords())
            .enumerate()
            .filter_map(|(index, pair)| match pair {
                (Some(left), Some(right))
                    if left.row_number() == right.row_number() && left.has_valid_row_number() =>
                {
                    Some((index, left.row_number()))
                }
                _ => None,
            })
            .collect();

        for (index, row_number) in agreed_rows {
            for column in self.columns[1..=self.column_count].iter_mut().flatten() {
                let Some(slot) = column.codewords_mut().get_mut(index) else {
                    continue;
                };
                if let Some(codeword) = slot {
                    codeword.set_row_number(row_number);
                    if !codeword.has_valid_row_number() {
                        *slot = None;
                    }
                }
            }
        }
    }

    /// Walk from one indicator column towards the other, handing its row
    /// numbers to data codewords of the matching cluster.
    fn adjust_row_numbers_from_indicator(&mut self, from_right: bool) -> usize {
        let indicator_index = if from_right { self.right_indicator_index() } else { 0 };
        let Some(indicator) = self.column(indicator_index) else {
            return 0;
        };
        let indicator_rows: Vec<(usize, i32)> = indicator
            .codewords()
            .iter()
            .enumerate()
            .filter_map(|(index, codeword)| codeword.map(|codeword| (index, codeword.row_number())))
            .collect();

        let walk: Vec<usize> = if from_right {
            (1..=self.column_count + 1).rev().collect()
        } else {
            (1..=self.column_count).collect()
        };

        let mut unadjusted = 0;
        for (index, row_number) in indicator_rows {
            let mut invalid_row_counts = 0;
            for &column in &walk {
                if invalid_row_counts >= ADJUST_ROW_NUMBER_SKIP {
                    break;
                }
                let Some(codeword) = self.columns[column]
                    .as_mut()
                    .and_then(|column| column.codewords_mut().get_mut(index))
                    .and_then(Option::as_mut)
                else {
                    continue;
                };
                invalid_row_counts = adjust_row_number_if_valid(row_number, invalid_row_counts, codeword);
                if !codeword.has_valid_row_number() {
                    unadjusted += 1;
                }
            }
        }
        unadjusted
    }

    fn codeword_at(&self, column: usize, row: i32) -> Option<&Codeword> {
        let row = usize::try_from(row).ok()?;
        self.column(column)?.codewords().get(row)?.as_ref()
    }

    /// Borrow a row number from the first neighbour of the same cluster that
    /// has a valid one. The neighbour order decides ties and must not change.
    fn adjust_row_number_from_neighbours(&mut self, column: usize, row: usize) {
        let Some(&codeword) = self.codeword_at(column, row as i32) else {
            return;
        };
        let previous = column - 1;
        let next = if self.column(column + 1).is_some() { column + 1 } else { previous };
        let row = row as i32;

        let neighbours = [
            (column, row - 1),
            (column, row + 1),
            (previous, row),
            (next, row),
            (previous, row - 1),
            (next, row - 1),
            (previous, row + 1),
            (next, row + 1),
            (column, row - 2),
            (column, row + 2),
            (previous, row - 2),
            (next, row - 2),
            (previous, row + 2),
            (next, row + 2),
        ];
        let donor = neighbours.iter().find_map(|&(neighbour_column, neighbour_row)| {
            self.codeword_at(neighbour_column, neighbour_row)
                .filter(|other| other.has_valid_row_number() && other.bucket() == codeword.bucket())
                .map(Codeword::row_number)
        });

        if let Some(row_number) = donor {
            if let Some(target) = self.columns[column]
                .as_mut()
                .and_then(|column| column.codewords_mut().get_mut(row as usize))
                .and_then(Option::as_mut)
            {
                target.set_row_number(row_number);
            }
        }
    }
}

fn adjust_row_number_if_valid(row_indicator_row_number: i32, mut invalid_row_counts: u32, codeword: &mut Codeword) -> u32 {
    if !codeword.has_valid_row_number() {
        if codeword.is_valid_row_number(row_indicator_row_number) {
            codeword.set_row_number(row_indicator_row_number);
            invalid_row_counts = 0;
        } else {
            invalid_row_counts += 1;
        }
    }
    invalid_row_counts
}

impl fmt::Display for DetectionResult {
    /// One line per image row: `row|value` per column, blanks for gaps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .columns
            .iter()
            .flatten()
            .map(|column| column.codewords().len())
            .max()
            .unwrap_or(0);
        for row in 0..rows {
            write!(f, "CW {row:3}:")?;
            for column in 0..self.columns.len() {
                match self.codeword_at(column, row as i32) {
                    Some(codeword) => write!(f, " {:3}|{:3}", codeword.row_number(), codeword.value())?,
                    None => write!(f, "    |   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::detection_result_column::RowIndicator;
    use crate::test_utils::{data_codeword, indicator_codeword, test_bounding_box};

    const ROWS: u32 = 3;
    const COLUMNS: u32 = 2;
    const PIXELS_PER_ROW: u32 = 3;

    /// A 3 row, 2 column symbol sampled three image rows per symbol row.
    ///
    /// The left indicator misses image row 5, the right indicator misses
    /// all of symbol row 1 and the second data column misreads image row 4
    /// as a codeword from the row 0 cluster.
    fn damaged_symbol() -> DetectionResult {
        let height = (ROWS * PIXELS_PER_ROW) as i32;
        let bbox = test_bounding_box(height);
        let metadata = BarcodeMetadata::new(COLUMNS, 1, 2, 0).unwrap();
        let mut result = DetectionResult::new(metadata, bbox.clone());

        let mut left = DetectionResultColumn::new(&bbox, Some(RowIndicator::Left));
        let mut right = DetectionResultColumn::new(&bbox, Some(RowIndicator::Right));
        let mut data = [
            DetectionResultColumn::new(&bbox, None),
            DetectionResultColumn::new(&bbox, None),
        ];
        for image_row in 0..height {
            let row = image_row as u32 / PIXELS_PER_ROW;
            if image_row != 5 {
                left.set_codeword(image_row, indicator_codeword(RowIndicator::Left, row, ROWS, COLUMNS, 0));
            }
            if row != 1 {
                right.set_codeword(image_row, indicator_codeword(RowIndicator::Right, row, ROWS, COLUMNS, 0));
            }
            for (column, data_column) in data.iter_mut().enumerate() {
                let cluster_row = if column == 1 && image_row == 4 { 0 } else { row };
                data_column.set_codeword(image_row, data_codeword(cluster_row, 100 + column as u32));
            }
        }

        result.set_column(0, left);
        let [first, second] = data;
        result.set_column(1, first);
        result.set_column(2, second);
        result.set_column(3, right);
        result
    }

    fn data_rows(result: &DetectionResult, column: usize) -> Vec<i32> {
        result
            .column(column)
            .unwrap()
            .codewords()
            .iter()
            .map(|codeword| codeword.map_or(-2, |codeword| codeword.row_number()))
            .collect()
    }

    #[test]
    fn test_gap_filled_from_neighbours() {
        let mut result = damaged_symbol();
        let stats = result.reconcile();
        assert_eq!(stats, Reconciliation { passes: 1, unadjusted: 0 });
        assert_eq!(data_rows(&result, 1), vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
        // the misread keeps its own cluster and borrows row 0 from two rows up
        assert_eq!(data_rows(&result, 2), vec![0, 0, 0, 1, 0, 1, 2, 2, 2]);
    }

    #[test]
    fn test_complete_left_indicator_covers_right_gap() {
        let height = (ROWS * PIXELS_PER_ROW) as i32;
        let bbox = test_bounding_box(height);
        let metadata = BarcodeMetadata::new(COLUMNS, 1, 2, 0).unwrap();
        let mut result = DetectionResult::new(metadata, bbox.clone());

        let mut left = DetectionResultColumn::new(&bbox, Some(RowIndicator::Left));
        let mut right = DetectionResultColumn::new(&bbox, Some(RowIndicator::Right));
        for image_row in 0..height {
            let row = image_row as u32 / PIXELS_PER_ROW;
            left.set_codeword(image_row, indicator_codeword(RowIndicator::Left, row, ROWS, COLUMNS, 0));
            if image_row != 4 {
                right.set_codeword(image_row, indicator_codeword(RowIndicator::Right, row, ROWS, COLUMNS, 0));
            }
        }
        result.set_column(0, left);
        for column in 1..=COLUMNS {
            let mut data = DetectionResultColumn::new(&bbox, None);
            for image_row in 0..height {
                let row = image_row as u32 / PIXELS_PER_ROW;
                data.set_codeword(image_row, data_codeword(row, 100 + column));
            }
            result.set_column(column as usize, data);
        }
        result.set_column(3, right);

        let stats = result.reconcile();
        assert!(stats.passes <= 2, "{} passes", stats.passes);
        assert_eq!(stats.unadjusted, 0);
        for column in 1..=2 {
            assert_eq!(data_rows(&result, column), vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
        }
    }

    #[test]
    fn test_reconcile_at_fixed_point_is_a_no_op() {
        let mut result = damaged_symbol();
        result.reconcile();
        let before = result.to_string();
        assert_eq!(result.adjust_row_numbers(), 0);
        assert_eq!(result.to_string(), before);
    }

    #[test]
    fn test_agreeing_indicators_drop_contradicting_codewords() {
        let bbox = test_bounding_box(3);
        let metadata = BarcodeMetadata::new(1, 1, 2, 0).unwrap();
        let mut result = DetectionResult::new(metadata, bbox.clone());
        let mut left = DetectionResultColumn::new(&bbox, Some(RowIndicator::Left));
        let mut right = DetectionResultColumn::new(&bbox, Some(RowIndicator::Right));
        let mut data = DetectionResultColumn::new(&bbox, None);
        for image_row in 0..3 {
            left.set_codeword(image_row, indicator_codeword(RowIndicator::Left, 0, 3, 1, 0));
            right.set_codeword(image_row, indicator_codeword(RowIndicator::Right, 0, 3, 1, 0));
        }
        data.set_codeword(0, data_codeword(0, 7));
        // row 1 cluster on a row both indicators call row 0
        data.set_codeword(1, data_codeword(1, 8));
        result.set_column(0, left);
        result.set_column(1, data);
        result.set_column(2, right);

        let stats = result.reconcile();
        assert_eq!(stats.unadjusted, 0);
        assert_eq!(data_rows(&result, 1), vec![0, -2, -2]);
    }

    #[test]
    fn test_missing_indicators_leave_codewords_unadjusted() {
        let bbox = test_bounding_box(3);
        let metadata = BarcodeMetadata::new(1, 1, 2, 0).unwrap();
        let mut result = DetectionResult::new(metadata, bbox.clone());
        let mut data = DetectionResultColumn::new(&bbox, None);
        data.set_codeword(0, data_codeword(0, 7));
        result.set_column(1, data);

        let stats = result.reconcile();
        // the second pass only confirms that nothing changed
        assert_eq!(stats, Reconciliation { passes: 2, unadjusted: 1 });
    }

    #[test]
    fn test_display_marks_gaps() {
        let bbox = test_bounding_box(2);
        let metadata = BarcodeMetadata::new(1, 1, 2, 0).unwrap();
        let mut result = DetectionResult::new(metadata, bbox.clone());
        let mut data = DetectionResultColumn::new(&bbox, None);
        data.set_codeword(1, data_codeword(0, 42));
        result.set_column(1, data);
        assert_eq!(
            result.to_string(),
            "CW   0:    |       |       |   \nCW   1:    |     -1| 42    |   \n"
        );
    }
}
