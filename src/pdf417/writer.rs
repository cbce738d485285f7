//! Render codewords as a PDF417 symbol
//!
//! Only the low level is covered: the caller supplies data codewords (or raw
//! bytes, which go through byte compaction), and the writer adds the length
//! descriptor, padding, error correction and the row structure.

use super::common::{
    number_of_ec_codewords, MAX_CODEWORDS_IN_BARCODE, MAX_CODEWORDS_IN_ROW, MAX_ROWS_IN_BARCODE,
    MIN_ROWS_IN_BARCODE, MODULES_IN_CODEWORD, MODULES_IN_STOP_PATTERN, START_PATTERN_BITS,
    STOP_PATTERN_BITS,
};
use super::detection_result_column::RowIndicator;
use super::ec;
use super::tables::TABLES;
use crate::bit_matrix::BitMatrix;
use crate::{Error, Result};

const PAD_CODEWORD: u32 = 900;
const BYTE_COMPACTION_MODE_LATCH: u32 = 901;
const BYTE_COMPACTION_MODE_LATCH_6: u32 = 924;
const MAX_EC_LEVEL: u32 = 8;

/// Builds symbol images from codewords.
///
/// ```
/// use zedbar_pdf417::{BitMatrix, Pdf417Writer};
///
/// let writer = Pdf417Writer::new(4, 2)?.module_width(2).row_height(6);
/// let matrix: BitMatrix = writer.encode_bytes(b"hello")?;
/// assert!(matrix.width() > 4 * 17 * 2);
/// # Ok::<(), zedbar_pdf417::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdf417Writer {
    columns: u32,
    ec_level: u32,
    module_width: u32,
    row_height: u32,
    quiet_zone: u32,
}

impl Pdf417Writer {
    /// A writer for symbols with `columns` data columns (1 to 32) and
    /// error correction level 0 to 8.
    pub fn new(columns: u32, ec_level: u32) -> Result<Self> {
        if !(1..=MAX_CODEWORDS_IN_ROW).contains(&columns) {
            return Err(Error::Invalid(format!("{columns} data columns, expected 1 to 32")));
        }
        if ec_level > MAX_EC_LEVEL {
            return Err(Error::Invalid(format!("error correction level {ec_level}, expected 0 to 8")));
        }
        Ok(Self {
            columns,
            ec_level,
            module_width: 2,
            row_height: 6,
            quiet_zone: 4,
        })
    }

    /// Pixels per module horizontally
    pub fn module_width(mut self, module_width: u32) -> Self {
        self.module_width = module_width.max(1);
        self
    }

    /// Pixels per symbol row
    pub fn row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height.max(1);
        self
    }

    /// White border around the symbol, in modules
    pub fn quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Render `data` using byte compaction.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<BitMatrix> {
        self.encode_codewords(&byte_compaction(data))
    }

    /// Render data codewords, which must not include the length descriptor.
    pub fn encode_codewords(&self, data: &[u32]) -> Result<BitMatrix> {
        let (codewords, rows) = self.symbol_codewords(data)?;
        Ok(self.render(&codewords, rows))
    }

    /// The complete codeword stream of a symbol: length descriptor, data,
    /// padding and error correction, plus the number of rows it fills.
    pub(crate) fn symbol_codewords(&self, data: &[u32]) -> Result<(Vec<u32>, u32)> {
        if let Some(&bad) = data.iter().find(|&&codeword| codeword > MAX_CODEWORDS_IN_BARCODE) {
            return Err(Error::Invalid(format!("codeword {bad} out of range")));
        }
        let num_ec_codewords = number_of_ec_codewords(self.ec_level);
        let needed = data.len() as u32 + 1 + num_ec_codewords;
        let rows = needed.div_ceil(self.columns).max(MIN_ROWS_IN_BARCODE);
        if rows > MAX_ROWS_IN_BARCODE {
            return Err(Error::Invalid(format!(
                "{} codewords do not fit in {} columns",
                data.len(),
                self.columns
            )));
        }
        let data_length = rows * self.columns - num_ec_codewords;
        if data_length > MAX_CODEWORDS_IN_BARCODE {
            return Err(Error::Invalid(format!("symbol of {data_length} data codewords is too large")));
        }

        let mut codewords = Vec::with_capacity((rows * self.columns) as usize);
        codewords.push(data_length);
        codewords.extend_from_slice(data);
        codewords.resize(data_length as usize, PAD_CODEWORD);
        let ec_codewords = ec::encode(&codewords, num_ec_codewords as usize)?;
        codewords.extend(ec_codewords);
        log::debug!(
            "writing {rows}x{} symbol, {} data codewords, level {}",
            self.columns,
            data.len(),
            self.ec_level
        );
        Ok((codewords, rows))
    }

    fn render(&self, codewords: &[u32], rows: u32) -> BitMatrix {
        let modules_per_row = MODULES_IN_CODEWORD * (self.columns + 3) + MODULES_IN_STOP_PATTERN;
        let width = (modules_per_row + 2 * self.quiet_zone) * self.module_width;
        let height = rows * self.row_height + 2 * self.quiet_zone * self.module_width;
        let mut matrix = BitMatrix::new(width, height);

        for (row, row_codewords) in codewords.chunks(self.columns as usize).enumerate() {
            let row = row as u32;
            let cluster = (row % 3) as usize;
            let top = self.quiet_zone * self.module_width + row * self.row_height;
            let mut line = RowWriter {
                matrix: &mut matrix,
                x: self.quiet_zone * self.module_width,
                top,
                module_width: self.module_width,
                row_height: self.row_height,
            };

            line.append_bits(START_PATTERN_BITS, MODULES_IN_CODEWORD);
            let left = row_indicator_value(RowIndicator::Left, row, rows, self.columns, self.ec_level);
            line.append_codeword(cluster, left);
            for &codeword in row_codewords {
                line.append_codeword(cluster, codeword);
            }
            let right = row_indicator_value(RowIndicator::Right, row, rows, self.columns, self.ec_level);
            line.append_codeword(cluster, right);
            line.append_bits(STOP_PATTERN_BITS, MODULES_IN_STOP_PATTERN);
        }
        matrix
    }
}

/// Value of the row indicator codeword on one side of `row`.
///
/// The three rows of each group spread row count, column count and
/// error correction level across the two sides so that every row carries
/// two of the three.
pub(crate) fn row_indicator_value(
    side: RowIndicator,
    row: u32,
    rows: u32,
    columns: u32,
    ec_level: u32,
) -> u32 {
    let rows_value = (rows - 1) / 3;
    let columns_value = columns - 1;
    let level_value = ec_level * 3 + (rows - 1) % 3;
    let value = match (side, row % 3) {
        (RowIndicator::Left, 0) | (RowIndicator::Right, 1) => rows_value,
        (RowIndicator::Left, 1) | (RowIndicator::Right, 2) => level_value,
        _ => columns_value,
    };
    (row / 3) * 30 + value
}

/// Byte compaction of arbitrary data: groups of six bytes become five
/// base 900 codewords, a short tail is written one codeword per byte.
fn byte_compaction(data: &[u8]) -> Vec<u32> {
    let latch = if data.len() % 6 == 0 {
        BYTE_COMPACTION_MODE_LATCH_6
    } else {
        BYTE_COMPACTION_MODE_LATCH
    };
    let mut codewords = vec![latch];
    let mut groups = data.chunks_exact(6);
    for group in &mut groups {
        let mut value = group.iter().fold(0u64, |value, &byte| (value << 8) | u64::from(byte));
        let mut digits = [0u32; 5];
        for digit in digits.iter_mut().rev() {
            *digit = (value % 900) as u32;
            value /= 900;
        }
        codewords.extend(digits);
    }
    codewords.extend(groups.remainder().iter().map(|&byte| u32::from(byte)));
    codewords
}

struct RowWriter<'a> {
    matrix: &'a mut BitMatrix,
    x: u32,
    top: u32,
    module_width: u32,
    row_height: u32,
}

impl RowWriter<'_> {
    fn append_codeword(&mut self, cluster: usize, value: u32) {
        // values are range checked before rendering
        let pattern = TABLES.pattern(cluster, value).unwrap_or(0);
        self.append_bits(pattern, MODULES_IN_CODEWORD);
    }

    /// Most significant bit first
    fn append_bits(&mut self, bits: u32, count: u32) {
        for bit in (0..count).rev() {
            if (bits >> bit) & 1 == 1 {
                self.matrix
                    .set_region(self.x, self.top, self.module_width, self.row_height);
            }
            self.x += self.module_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::decoded_bit_stream_parser;

    #[test]
    fn test_row_indicator_values() {
        // 10 rows, 3 columns, level 2
        let value = |side, row| row_indicator_value(side, row, 10, 3, 2);
        assert_eq!(value(RowIndicator::Left, 0), 3);
        assert_eq!(value(RowIndicator::Left, 1), 6);
        assert_eq!(value(RowIndicator::Left, 2), 2);
        assert_eq!(value(RowIndicator::Right, 0), 2);
        assert_eq!(value(RowIndicator::Right, 1), 3);
        assert_eq!(value(RowIndicator::Right, 2), 6);
        assert_eq!(value(RowIndicator::Left, 9), 93);
    }

    #[test]
    fn test_symbol_codewords_layout() {
        let writer = Pdf417Writer::new(2, 0).unwrap();
        let (codewords, rows) = writer.symbol_codewords(&[900, 1, 2]).unwrap();
        // 3 data + SLD + 2 EC fits in 3 rows of 2
        assert_eq!(rows, 3);
        assert_eq!(codewords.len(), 6);
        assert_eq!(&codewords[..4], &[4, 900, 1, 2]);

        let (codewords, rows) = writer.symbol_codewords(&[1]).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(&codewords[..4], &[4, 1, PAD_CODEWORD, PAD_CODEWORD]);
    }

    #[test]
    fn test_symbol_codewords_rejects_bad_input() {
        let writer = Pdf417Writer::new(1, 0).unwrap();
        assert!(matches!(writer.symbol_codewords(&[929]), Err(Error::Invalid(_))));
        assert!(matches!(writer.symbol_codewords(&[0; 200]), Err(Error::Invalid(_))));
        assert!(Pdf417Writer::new(0, 0).is_err());
        assert!(Pdf417Writer::new(33, 0).is_err());
        assert!(Pdf417Writer::new(4, 9).is_err());
    }

    #[test]
    fn test_byte_compaction_decodes() {
        for data in [&b"abcdef"[..], b"hello world", b"\x00\xff\x10"] {
            let mut codewords = byte_compaction(data);
            codewords.insert(0, codewords.len() as u32 + 1);
            let result = decoded_bit_stream_parser::decode(&codewords, 0).unwrap();
            assert_eq!(result.data, data);
        }
    }

    #[test]
    fn test_rows_use_standard_patterns() {
        let writer = Pdf417Writer::new(1, 0).unwrap().module_width(1).row_height(1).quiet_zone(0);
        let matrix = writer.encode_codewords(&[900]).unwrap();
        let pattern_at = |x: u32, y: u32| {
            (x..x + 17).fold(0u32, |bits, x| (bits << 1) | u32::from(matrix.get(x as i32, y as i32)))
        };
        assert_eq!(pattern_at(0, 0), START_PATTERN_BITS);
        // left indicators of a 3 row symbol at level 0: 0 in cluster 0, 2 in cluster 3
        assert_eq!(pattern_at(17, 0), 0x1d5c0);
        assert_eq!(pattern_at(17, 1), 0x1ea40);
    }

    #[test]
    fn test_render_dimensions() {
        let writer = Pdf417Writer::new(3, 1).unwrap().module_width(1).row_height(3).quiet_zone(2);
        let matrix = writer.encode_codewords(&[900, 1]).unwrap();
        // start, two indicators, three data, stop, quiet zone
        assert_eq!(matrix.width(), 17 + 17 * 5 + 18 + 4);
        assert_eq!(matrix.height(), 3 * 3 + 4);
        // first start pattern bar after the quiet zone
        assert!(!matrix.get(1, 2));
        assert!(matrix.get(2, 2));
        assert!(matrix.get(9, 4));
        assert!(!matrix.get(10, 4));
    }
}
