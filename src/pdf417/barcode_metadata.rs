//! Symbol shape as announced by the row indicator columns

use super::common::{MAX_CODEWORDS_IN_ROW, MAX_ROWS_IN_BARCODE, MIN_ROWS_IN_BARCODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BarcodeMetadata {
    column_count: u32,
    error_correction_level: u32,
    row_count_upper_part: u32,
    row_count_lower_part: u32,
    row_count: u32,
}

impl BarcodeMetadata {
    /// Returns `None` when the shape is outside what PDF417 allows:
    /// 1 to 32 data columns and 3 to 90 rows.
    pub(crate) fn new(
        column_count: u32,
        row_count_upper_part: u32,
        row_count_lower_part: u32,
        error_correction_level: u32,
    ) -> Option<Self> {
        let row_count = row_count_upper_part + row_count_lower_part;
        if !(1..=MAX_CODEWORDS_IN_ROW).contains(&column_count)
            || !(MIN_ROWS_IN_BARCODE..=MAX_ROWS_IN_BARCODE).contains(&row_count)
        {
            return None;
        }
        Some(Self {
            column_count,
            error_correction_level,
            row_count_upper_part,
            row_count_lower_part,
            row_count,
        })
    }

    pub(crate) fn column_count(&self) -> u32 {
        self.column_count
    }

    pub(crate) fn error_correction_level(&self) -> u32 {
        self.error_correction_level
    }

    pub(crate) fn row_count(&self) -> u32 {
        self.row_count
    }

    pub(crate) fn row_count_upper_part(&self) -> u32 {
        self.row_count_upper_part
    }

    pub(crate) fn row_count_lower_part(&self) -> u32 {
        self.row_count_lower_part
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_is_sum_of_parts() {
        let metadata = BarcodeMetadata::new(4, 10, 2, 3).unwrap();
        assert_eq!(metadata.row_count(), 12);
        assert_eq!(metadata.column_count(), 4);
        assert_eq!(metadata.error_correction_level(), 3);
    }

    #[test]
    fn test_row_count_bounds_are_rejected_not_clamped() {
        assert!(BarcodeMetadata::new(2, 1, 1, 0).is_none());
        assert!(BarcodeMetadata::new(2, 1, 2, 0).is_some());
        assert!(BarcodeMetadata::new(2, 88, 2, 0).is_some());
        assert!(BarcodeMetadata::new(2, 89, 2, 0).is_none());
    }

    #[test]
    fn test_column_count_bounds() {
        assert!(BarcodeMetadata::new(0, 4, 0, 0).is_none());
        assert!(BarcodeMetadata::new(32, 4, 0, 0).is_some());
        assert!(BarcodeMetadata::new(33, 4, 0, 0).is_none());
    }
}
