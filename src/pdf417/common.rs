//! Constants and bit-count helpers shared by the PDF417 stages

use super::tables::TABLES;

pub(crate) const NUMBER_OF_CODEWORDS: u32 = 929;
/// Largest SLD (symbol length descriptor) value a symbol may carry
pub(crate) const MAX_CODEWORDS_IN_BARCODE: u32 = NUMBER_OF_CODEWORDS - 1;
pub(crate) const MIN_ROWS_IN_BARCODE: u32 = 3;
pub(crate) const MAX_ROWS_IN_BARCODE: u32 = 90;
pub(crate) const MAX_CODEWORDS_IN_ROW: u32 = 32;
pub(crate) const MODULES_IN_CODEWORD: u32 = 17;
pub(crate) const MODULES_IN_STOP_PATTERN: u32 = 18;
pub(crate) const BARS_IN_MODULE: usize = 8;

/// Start guard, 17 modules: `11111111010101000`
pub(crate) const START_PATTERN_BITS: u32 = 0x1fea8;
/// Stop guard, 18 modules: `111111101000101001`
pub(crate) const STOP_PATTERN_BITS: u32 = 0x3fa29;

pub(crate) fn bit_count_sum(module_bit_count: &[u32]) -> u32 {
    module_bit_count.iter().sum()
}

/// Translate a 17-bit bar/space pattern to its codeword value, if the
/// pattern belongs to any cluster.
pub(crate) fn get_codeword(symbol: u32) -> Option<u32> {
    TABLES.codeword(symbol & 0x3ffff)
}

/// Widths of the eight elements of a 17-module pattern, first bar first.
///
/// Returns `None` unless the pattern is exactly four bars and four spaces
/// starting with a bar.
pub(crate) fn element_widths(pattern: u32) -> Option<[u32; BARS_IN_MODULE]> {
    let mut widths = [0u32; BARS_IN_MODULE];
    let mut element = 0;
    let mut previous = true;
    for bit in (0..MODULES_IN_CODEWORD).rev() {
        let black = (pattern >> bit) & 1 == 1;
        if bit == MODULES_IN_CODEWORD - 1 && !black {
            return None;
        }
        if black != previous {
            element += 1;
            if element == BARS_IN_MODULE {
                return None;
            }
            previous = black;
        }
        widths[element] += 1;
    }
    (element == BARS_IN_MODULE - 1).then_some(widths)
}

/// Cluster number (0, 3 or 6 for real codewords) of a set of element widths
pub(crate) fn codeword_bucket(module_bit_count: &[u32; BARS_IN_MODULE]) -> u32 {
    let [e0, _, e2, _, e4, _, e6, _] = module_bit_count.map(|width| width as i32);
    ((e0 - e2 + e4 - e6 + 9) % 9) as u32
}

/// Cluster number of a 17-bit pattern
pub(crate) fn pattern_bucket(pattern: u32) -> u32 {
    element_widths(pattern).map_or(u32::MAX, |widths| codeword_bucket(&widths))
}

/// EC codewords carried by a symbol at `ec_level`
pub(crate) fn number_of_ec_codewords(ec_level: u32) -> u32 {
    2 << ec_level
}
