//! Property-based tests for PDF417 decoding
//!
//! Random payloads are rendered with the symbol writer and scanned back.
//! Synthetic codeword grids with random erasures and misreads exercise row
//! number reconciliation directly.

use crate::pdf417::{BarcodeMetadata, DetectionResult, DetectionResultColumn, RowIndicator};
use crate::test_utils::{data_codeword, indicator_codeword, test_bounding_box};
use crate::{Image, Pdf417Reader, Pdf417Writer, Scanner};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Render `data` and decode it again with the reader alone
fn roundtrip(columns: u32, ec_level: u32, data: &[u8]) -> Result<Vec<Vec<u8>>, TestCaseError> {
    let bits = Pdf417Writer::new(columns, ec_level)
        .and_then(|writer| writer.encode_bytes(data))
        .map_err(|e| TestCaseError::fail(format!("Failed to render symbol: {e}")))?;
    let symbols = Pdf417Reader::new()
        .decode(&bits)
        .map_err(|e| TestCaseError::fail(format!("Failed to decode symbol: {e}")))?;
    Ok(symbols.iter().map(|s| s.data().to_vec()).collect())
}

/// A codeword grid as the sampler would see it, `pixels_per_row` image
/// rows per symbol row, with some cells damaged.
#[derive(Debug, Clone)]
struct Grid {
    rows: u32,
    columns: u32,
    pixels_per_row: u32,
    /// One flag per cell, column major, row indicators included
    erased: Vec<bool>,
    /// Cluster row a data cell was misread as, if any
    misread: Vec<Option<u32>>,
}

impl Grid {
    fn height(&self) -> i32 {
        (self.rows * self.pixels_per_row) as i32
    }

    fn cell(&self, column: u32, image_row: i32) -> usize {
        column as usize * self.height() as usize + image_row as usize
    }

    fn detection_result(&self) -> DetectionResult {
        let bbox = test_bounding_box(self.height());
        let upper = (self.rows - 1) / 3 * 3 + 1;
        let lower = (self.rows - 1) % 3;
        let metadata = BarcodeMetadata::new(self.columns, upper, lower, 0).expect("valid shape");
        let mut result = DetectionResult::new(metadata, bbox.clone());

        let right = self.columns + 1;
        for column in 0..=right {
            let side = match column {
                0 => Some(RowIndicator::Left),
                c if c == right => Some(RowIndicator::Right),
                _ => None,
            };
            let mut detection_column = DetectionResultColumn::new(&bbox, side);
            for image_row in 0..self.height() {
                let cell = self.cell(column, image_row);
                if self.erased[cell] {
                    continue;
                }
                let row = image_row as u32 / self.pixels_per_row;
                let codeword = match side {
                    Some(side) => indicator_codeword(side, row, self.rows, self.columns, 0),
                    None => data_codeword(self.misread[cell].unwrap_or(row), 100 + column),
                };
                detection_column.set_codeword(image_row, codeword);
            }
            result.set_column(column as usize, detection_column);
        }
        result
    }
}

fn damaged_grid(misread_weight: f64) -> impl Strategy<Value = Grid> {
    (3u32..=12, 1u32..=5, 2u32..=4)
        .prop_flat_map(move |(rows, columns, pixels_per_row)| {
            let cells = ((columns + 2) * rows * pixels_per_row) as usize;
            (
                Just((rows, columns, pixels_per_row)),
                prop::collection::vec(prop::bool::weighted(0.3), cells),
                prop::collection::vec(prop::option::weighted(misread_weight, 0u32..3), cells),
            )
        })
        .prop_map(|((rows, columns, pixels_per_row), erased, misread)| Grid {
            rows,
            columns,
            pixels_per_row,
            erased,
            misread,
        })
}

/// Row numbers of every data codeword, `None` for empty cells
fn data_rows(result: &DetectionResult) -> Vec<Option<i32>> {
    (1..=result.column_count())
        .filter_map(|column| result.column(column))
        .flat_map(|column| column.codewords().iter().map(|c| c.map(|c| c.row_number())))
        .collect()
}

/// Every data codeword that has a row number sits in that row's cluster
fn assert_buckets_consistent(result: &DetectionResult) -> Result<(), TestCaseError> {
    for column in (1..=result.column_count()).filter_map(|column| result.column(column)) {
        for codeword in column.codewords().iter().flatten() {
            if codeword.row_number() >= 0 {
                prop_assert!(
                    codeword.has_valid_row_number(),
                    "row {} assigned to a bucket {} codeword",
                    codeword.row_number(),
                    codeword.bucket()
                );
            }
        }
    }
    Ok(())
}

/// Another pass after reconciliation changes nothing
fn assert_fixed_point(result: &mut DetectionResult) -> Result<(), TestCaseError> {
    let before = data_rows(result);
    let unadjusted = result.unadjusted_count();
    prop_assert_eq!(result.adjust_row_numbers(), unadjusted);
    prop_assert_eq!(data_rows(result), before);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Arbitrary bytes survive rendering and decoding
    #[test]
    fn prop_pdf417_roundtrip_bytes(
        data in prop::collection::vec(any::<u8>(), 1..80),
        columns in 3u32..=8,
        ec_level in 0u32..=4,
    ) {
        let decoded = roundtrip(columns, ec_level, &data)?;

        prop_assert_eq!(decoded.len(), 1, "Expected exactly one decoded symbol");
        prop_assert_eq!(&decoded[0], &data, "Decoded data doesn't match original");
    }

    /// Text scanned from a luminance image through the full scanner
    #[test]
    fn prop_pdf417_scan_ascii(data in "[a-zA-Z0-9 ,.:/-]{1,60}") {
        let bits = Pdf417Writer::new(4, 2)
            .and_then(|writer| writer.encode_bytes(data.as_bytes()))
            .map_err(|e| TestCaseError::fail(format!("Failed to render symbol: {e}")))?;

        let symbols = Scanner::new()
            .scan(&Image::from(&bits))
            .map_err(|e| TestCaseError::fail(format!("Failed to scan image: {e}")))?;

        prop_assert_eq!(symbols.len(), 1);
        prop_assert_eq!(symbols[0].text(), data.as_str());
    }

    /// With only erasures, reconciliation never assigns a wrong row
    #[test]
    fn prop_reconcile_erasures_assign_true_rows(grid in damaged_grid(0.0)) {
        let mut result = grid.detection_result();
        result.reconcile();

        for (column, detection_column) in (1..=result.column_count())
            .filter_map(|column| result.column(column).map(|c| (column, c)))
        {
            for (image_row, codeword) in detection_column.codewords().iter().enumerate() {
                let Some(codeword) = codeword else { continue };
                if codeword.has_valid_row_number() {
                    prop_assert_eq!(
                        codeword.row_number(),
                        (image_row as u32 / grid.pixels_per_row) as i32,
                        "column {} image row {}",
                        column,
                        image_row
                    );
                }
            }
        }
        assert_fixed_point(&mut result)?;
    }

    /// Misread clusters never end up with a row of another cluster
    #[test]
    fn prop_reconcile_misreads_keep_buckets(grid in damaged_grid(0.15)) {
        let mut result = grid.detection_result();
        result.reconcile();

        assert_buckets_consistent(&result)?;
        assert_fixed_point(&mut result)?;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_simple_pdf417_roundtrip() {
        let decoded = roundtrip(3, 2, b"Hello, World!").expect("Failed to decode symbol");
        assert_eq!(decoded, vec![b"Hello, World!".to_vec()]);
    }

    #[test]
    fn test_undamaged_grid_reconciles_fully() {
        let grid = Grid {
            rows: 6,
            columns: 3,
            pixels_per_row: 3,
            erased: vec![false; 5 * 18],
            misread: vec![None; 5 * 18],
        };
        let mut result = grid.detection_result();
        let stats = result.reconcile();
        assert_eq!(stats.unadjusted, 0);
        let expected: Vec<Option<i32>> = (0..3)
            .flat_map(|_| (0..18).map(|image_row| Some(image_row / 3)))
            .collect();
        assert_eq!(data_rows(&result), expected);
    }
}
