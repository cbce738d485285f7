//! Turn measured element widths into a codeword pattern

use super::common::{bit_count_sum, get_codeword, BARS_IN_MODULE, MODULES_IN_CODEWORD};
use super::tables::TABLES;

/// Decode the eight measured element widths of one codeword into its 17-bit
/// bar pattern.
///
/// The widths are first resampled onto 17 modules and looked up directly;
/// if that pattern is not a codeword the closest pattern by width ratios
/// is used instead.
pub(crate) fn decoded_value(module_bit_count: &[u32; BARS_IN_MODULE]) -> Option<u32> {
    let sampled = sample_bit_counts(module_bit_count);
    let symbol = bit_value(&sampled);
    if get_codeword(symbol).is_some() {
        return Some(symbol);
    }
    closest_decoded_value(module_bit_count)
}

/// Sample the middle of each of the 17 modules and count how many samples
/// land in each element.
fn sample_bit_counts(module_bit_count: &[u32; BARS_IN_MODULE]) -> [u32; BARS_IN_MODULE] {
    let sum = bit_count_sum(module_bit_count) as f32;
    let mut result = [0u32; BARS_IN_MODULE];
    let mut bit_count_index = 0;
    let mut sum_previous_bits = 0;
    for i in 0..MODULES_IN_CODEWORD {
        let sample_index =
            sum / (2 * MODULES_IN_CODEWORD) as f32 + (i as f32 * sum) / MODULES_IN_CODEWORD as f32;
        if bit_count_index < BARS_IN_MODULE - 1
            && (sum_previous_bits + module_bit_count[bit_count_index]) as f32 <= sample_index
        {
            sum_previous_bits += module_bit_count[bit_count_index];
            bit_count_index += 1;
        }
        result[bit_count_index] += 1;
    }
    result
}

fn bit_value(module_bit_count: &[u32; BARS_IN_MODULE]) -> u32 {
    let mut result = 0u32;
    for (i, &count) in module_bit_count.iter().enumerate() {
        let bit = u32::from(i % 2 == 0);
        for _ in 0..count {
            result = (result << 1) | bit;
        }
    }
    result
}

fn closest_decoded_value(module_bit_count: &[u32; BARS_IN_MODULE]) -> Option<u32> {
    let sum = bit_count_sum(module_bit_count);
    let mut ratios = [0f32; BARS_IN_MODULE];
    if sum > 1 {
        for (ratio, &count) in ratios.iter_mut().zip(module_bit_count) {
            *ratio = count as f32 / sum as f32;
        }
    }

    let mut best_error = f32::MAX;
    let mut best_match = None;
    for (table_ratios, &symbol) in TABLES.ratios().iter().zip(TABLES.symbols()) {
        let mut error = 0.0;
        for (expected, actual) in table_ratios.iter().zip(&ratios) {
            let diff = expected - actual;
            error += diff * diff;
            if error >= best_error {
                break;
            }
        }
        if error < best_error {
            best_error = error;
            best_match = Some(symbol);
        }
    }
    best_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf417::common::element_widths;

    #[test]
    fn test_exact_widths_decode_to_their_pattern() {
        for &symbol in TABLES.symbols().iter().step_by(97) {
            let widths = element_widths(symbol).unwrap();
            assert_eq!(decoded_value(&widths), Some(symbol));
        }
    }

    #[test]
    fn test_scaled_widths_decode_to_their_pattern() {
        let symbol = TABLES.pattern(1, 300).unwrap();
        let widths = element_widths(symbol).unwrap().map(|width| width * 3);
        assert_eq!(decoded_value(&widths), Some(symbol));
    }

    #[test]
    fn test_blurred_edge_still_decodes() {
        let symbol = TABLES.pattern(2, 17).unwrap();
        let mut widths = element_widths(symbol).unwrap().map(|width| width * 4);
        // one pixel lost to blur on the widest bar, one gained by its neighbour
        let widest = (0..BARS_IN_MODULE).step_by(2).max_by_key(|&i| widths[i]).unwrap();
        widths[widest] -= 1;
        widths[widest + 1] += 1;
        assert_eq!(decoded_value(&widths), Some(symbol));
    }

    #[test]
    fn test_closest_ratio_matches_exact_widths() {
        let symbol = TABLES.pattern(0, 928).unwrap();
        let widths = element_widths(symbol).unwrap().map(|width| width * 5);
        assert_eq!(closest_decoded_value(&widths), Some(symbol));
    }

    #[test]
    fn test_bit_value_packs_bars_as_ones() {
        assert_eq!(bit_value(&[8, 1, 1, 1, 1, 1, 1, 3]), 0x1fea8);
    }

    #[test]
    fn test_sample_bit_counts_handles_zero_width() {
        let sampled = sample_bit_counts(&[0; BARS_IN_MODULE]);
        assert_eq!(bit_count_sum(&sampled), MODULES_IN_CODEWORD);
    }
}
