//! One decoded cell of the codeword grid

pub(crate) const BARCODE_ROW_UNKNOWN: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Codeword {
    start_x: i32,
    end_x: i32,
    bucket: u32,
    value: u32,
    row_number: i32,
}

impl Codeword {
    pub(crate) fn new(start_x: i32, end_x: i32, bucket: u32, value: u32) -> Self {
        Self {
            start_x,
            end_x,
            bucket,
            value,
            row_number: BARCODE_ROW_UNKNOWN,
        }
    }

    pub(crate) fn has_valid_row_number(&self) -> bool {
        self.is_valid_row_number(self.row_number)
    }

    /// A row number fits this codeword when the row uses the codeword's
    /// cluster: rows cycle through buckets 0, 3 and 6.
    pub(crate) fn is_valid_row_number(&self, row_number: i32) -> bool {
        row_number != BARCODE_ROW_UNKNOWN && self.bucket as i32 == (row_number % 3) * 3
    }

    /// Derive the row number from a row indicator value, which carries
    /// `row / 3` in its upper part.
    pub(crate) fn set_row_number_as_row_indicator_column(&mut self) {
        self.row_number = (self.value as i32 / 30) * 3 + self.bucket as i32 / 3;
    }

    pub(crate) fn width(&self) -> i32 {
        self.end_x - self.start_x
    }

    pub(crate) fn start_x(&self) -> i32 {
        self.start_x
    }

    pub(crate) fn end_x(&self) -> i32 {
        self.end_x
    }

    pub(crate) fn bucket(&self) -> u32 {
        self.bucket
    }

    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    pub(crate) fn row_number(&self) -> i32 {
        self.row_number
    }

    pub(crate) fn set_row_number(&mut self, row_number: i32) {
        self.row_number = row_number;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_codeword_has_unknown_row() {
        let codeword = Codeword::new(10, 27, 3, 5);
        assert_eq!(codeword.row_number(), BARCODE_ROW_UNKNOWN);
        assert!(!codeword.has_valid_row_number());
        assert_eq!(codeword.width(), 17);
    }

    #[test]
    fn test_row_number_must_match_bucket() {
        let codeword = Codeword::new(0, 17, 6, 0);
        assert!(codeword.is_valid_row_number(2));
        assert!(codeword.is_valid_row_number(8));
        assert!(!codeword.is_valid_row_number(3));
        assert!(!codeword.is_valid_row_number(BARCODE_ROW_UNKNOWN));
    }

    #[test]
    fn test_row_indicator_row_number() {
        // value 2 * 30 + x in cluster 3 sits on row 7
        let mut codeword = Codeword::new(0, 17, 3, 64);
        codeword.set_row_number_as_row_indicator_column();
        assert_eq!(codeword.row_number(), 7);
        assert!(codeword.has_valid_row_number());
    }
}
