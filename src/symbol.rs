//! Decoded symbols and the closed set of symbology types

use crate::pdf417::ResultMetadata;
use crate::point::ResultPoint;
use std::borrow::Cow;
use std::fmt::Display;

/// The symbologies known to the scanner.
///
/// The set is fixed; [`crate::Scanner`] dispatches over it with a single
/// `match`. Only PDF417 currently has a decoder behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolType {
    Codabar,
    Code128,
    Code39,
    DataMatrix,
    Pdf417,
    QrCode,
    Upca,
}

impl SymbolType {
    pub(crate) const ALL: [Self; 7] = [
        SymbolType::Codabar,
        SymbolType::Code128,
        SymbolType::Code39,
        SymbolType::DataMatrix,
        SymbolType::Pdf417,
        SymbolType::QrCode,
        SymbolType::Upca,
    ];
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Codabar => "Codabar",
                Self::Code128 => "CODE-128",
                Self::Code39 => "CODE-39",
                Self::DataMatrix => "DataMatrix",
                Self::Pdf417 => "PDF417",
                Self::QrCode => "QR-Code",
                Self::Upca => "UPC-A",
            }
        )
    }
}

/// A decoded barcode symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub(crate) symbol_type: SymbolType,
    pub(crate) data: Vec<u8>,
    pub(crate) points: Vec<ResultPoint>,
    pub(crate) ec_level: u32,
    pub(crate) corrected_errors: usize,
    pub(crate) erasures: usize,
    pub(crate) metadata: Option<ResultMetadata>,
}

impl Symbol {
    /// Get the symbol type
    pub fn symbol_type(&self) -> SymbolType {
        self.symbol_type
    }

    /// Get the decoded data as bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the decoded data as a string (if valid UTF-8)
    pub fn data_string(&self) -> Option<&str> {
        std::str::from_utf8(self.data()).ok()
    }

    /// Get the decoded data as text.
    ///
    /// Byte compaction can carry arbitrary 8-bit data; anything that is not
    /// valid UTF-8 is read as Windows-1252.
    pub fn text(&self) -> Cow<'_, str> {
        match std::str::from_utf8(&self.data) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&self.data);
                text
            }
        }
    }

    /// Detector vertices, in image coordinates.
    ///
    /// Only the vertices the detector actually found are present; a symbol
    /// decoded from one row indicator column reports four.
    pub fn points(&self) -> &[ResultPoint] {
        &self.points
    }

    /// Error correction level (0..=8)
    pub fn ec_level(&self) -> u32 {
        self.ec_level
    }

    /// Number of codewords repaired by error correction
    pub fn corrected_errors(&self) -> usize {
        self.corrected_errors
    }

    /// Number of codewords that could not be read at all
    pub fn erasures(&self) -> usize {
        self.erasures
    }

    /// Macro PDF417 structured-append metadata, when the symbol carried a
    /// control block
    pub fn metadata(&self) -> Option<&ResultMetadata> {
        self.metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_with(data: &[u8]) -> Symbol {
        Symbol {
            symbol_type: SymbolType::Pdf417,
            data: data.to_vec(),
            points: Vec::new(),
            ec_level: 2,
            corrected_errors: 0,
            erasures: 0,
            metadata: None,
        }
    }

    #[test]
    fn test_text_prefers_utf8() {
        let symbol = symbol_with("grüße".as_bytes());
        assert_eq!(symbol.data_string(), Some("grüße"));
        assert_eq!(symbol.text(), "grüße");
    }

    #[test]
    fn test_text_falls_back_to_windows_1252() {
        let symbol = symbol_with(&[b'c', b'a', b'f', 0xe9]);
        assert_eq!(symbol.data_string(), None);
        assert_eq!(symbol.text(), "café");
    }

    #[test]
    fn test_symbol_type_names() {
        assert_eq!(SymbolType::Pdf417.to_string(), "PDF417");
        assert_eq!(SymbolType::Upca.to_string(), "UPC-A");
        assert_eq!(SymbolType::ALL.len(), 7);
    }
}
