//! Entry point for decoding PDF417 symbols from an image

use super::common::{MODULES_IN_CODEWORD, MODULES_IN_STOP_PATTERN};
use super::decoded_bit_stream_parser::DecoderResult;
use super::detector::{self, Vertices};
use super::scanning_decoder;
use crate::binarizer::GlobalHistogramBinarizer;
use crate::bit_matrix::BitMatrix;
use crate::image::LuminanceSource;
use crate::point::ResultPoint;
use crate::symbol::{Symbol, SymbolType};
use crate::{Error, Result};

/// Decodes PDF417 symbols.
///
/// By default only the first symbol found is decoded; with
/// [`multiple`](Self::multiple) every symbol in the image is, in the order
/// the detector finds them (top to bottom, then left to right).
///
/// ```
/// use zedbar_pdf417::{Pdf417Reader, Pdf417Writer};
///
/// let bits = Pdf417Writer::new(3, 2)?.encode_bytes(b"PDF417")?;
/// let symbols = Pdf417Reader::new().decode(&bits)?;
/// assert_eq!(symbols[0].data(), b"PDF417");
/// # Ok::<(), zedbar_pdf417::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pdf417Reader {
    multiple: bool,
}

impl Pdf417Reader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every symbol instead of only the first.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Binarize `source` and decode it.
    pub fn decode_luminance<S: LuminanceSource + ?Sized>(&self, source: &S) -> Result<Vec<Symbol>> {
        let bits = GlobalHistogramBinarizer::new(source).black_matrix()?;
        self.decode(&bits)
    }

    /// Decode symbols from a binarized image.
    ///
    /// In multiple mode a symbol that fails to decode is skipped; the call
    /// only fails when none of them could be decoded.
    pub fn decode(&self, bits: &BitMatrix) -> Result<Vec<Symbol>> {
        let detected = detector::detect(bits, self.multiple);
        let mut symbols = Vec::new();
        let mut first_error = None;
        for vertices in &detected.symbols {
            let result = scanning_decoder::decode(
                &detected.bits,
                vertices[4],
                vertices[5],
                vertices[6],
                vertices[7],
                min_codeword_width(vertices),
                max_codeword_width(vertices),
            );
            match result {
                Ok(result) => {
                    let points = if detected.rotated {
                        rotate_points(vertices, bits.width(), bits.height())
                    } else {
                        vertices.iter().flatten().copied().collect()
                    };
                    symbols.push(symbol(result, points));
                }
                Err(error) => {
                    log::debug!("skipping symbol at {:?}: {error}", vertices[0]);
                    first_error.get_or_insert(error);
                }
            }
        }

        if symbols.is_empty() {
            return Err(first_error.unwrap_or(Error::NotFound));
        }
        Ok(symbols)
    }

    /// Decode and join the text of all symbols in detection order.
    pub fn decode_text(&self, bits: &BitMatrix) -> Result<String> {
        let symbols = self.decode(bits)?;
        Ok(symbols.iter().map(|symbol| symbol.text()).collect())
    }
}

fn symbol(result: DecoderResult, points: Vec<ResultPoint>) -> Symbol {
    Symbol {
        symbol_type: SymbolType::Pdf417,
        data: result.data,
        points,
        ec_level: result.ec_level,
        corrected_errors: result.errors_corrected,
        erasures: result.erasures,
        metadata: result.metadata,
    }
}

/// Map vertices found in the rotated image back onto the original.
fn rotate_points(vertices: &Vertices, width: u32, height: u32) -> Vec<ResultPoint> {
    let right = width as f32 - 1.0;
    let bottom = height as f32 - 1.0;
    vertices
        .iter()
        .flatten()
        .map(|point| ResultPoint::new(right - point.x(), bottom - point.y()))
        .collect()
}

fn width(p1: Option<ResultPoint>, p2: Option<ResultPoint>) -> Option<i64> {
    Some((p1?.x() - p2?.x()).abs() as i64)
}

fn stop_to_codeword(width: i64) -> i64 {
    width * i64::from(MODULES_IN_CODEWORD) / i64::from(MODULES_IN_STOP_PATTERN)
}

/// Widest codeword the guard patterns suggest
fn max_codeword_width(p: &Vertices) -> i32 {
    let widths = [
        width(p[0], p[4]),
        width(p[6], p[2]).map(stop_to_codeword),
        width(p[1], p[5]),
        width(p[7], p[3]).map(stop_to_codeword),
    ];
    widths.into_iter().map(|w| w.unwrap_or(0)).max().unwrap_or(0) as i32
}

/// Narrowest codeword the guard patterns suggest
fn min_codeword_width(p: &Vertices) -> i32 {
    let widths = [
        width(p[0], p[4]),
        width(p[6], p[2]).map(stop_to_codeword),
        width(p[1], p[5]),
        width(p[7], p[3]).map(stop_to_codeword),
    ];
    widths
        .into_iter()
        .flatten()
        .min()
        .map_or(i32::MAX, |w| w.min(i64::from(i32::MAX)) as i32)
}
